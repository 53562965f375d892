//! Ward agglomerative clustering for dense vectors.
//!
//! ## Agglomerative clustering
//!
//! Bottom-up hierarchical clustering starts with every point as its own cluster and
//! repeatedly merges the closest pair. The result is not one partition but the
//! whole merge history, a **dendrogram**: cut it at any level to get a flat
//! clustering with that many clusters.
//!
//! ## Ward's criterion
//!
//! Ward's method merges the pair whose union increases the total within-cluster
//! sum of squares the least:
//!
//! ```text
//! Δ(A, B) = ESS(A ∪ B) − ESS(A) − ESS(B) = |A||B| / (|A|+|B|) · ‖μ_A − μ_B‖²
//! ```
//!
//! **Assumptions**: like k-means, Ward favours compact, roughly spherical clusters
//! of similar size. Unlike k-means it needs no `k` up front and is deterministic.
//!
//! ## Two formulations
//!
//! - [`Ward::fit`] keeps a squared-dissimilarity matrix and updates it with the
//!   Lance-Williams recurrence after each merge.
//! - [`Ward::fit_reference`] recomputes the ESS increase of every candidate pair from
//!   the raw data at every step. It is slow and exists to validate the former.
//!
//! Both return the same [`Dendrogram`].
//!
//! ## Usage
//!
//! ```rust
//! use dendro::cluster::{Clustering, Ward};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! let tree = Ward::default().fit(&data).unwrap();
//! assert_eq!(tree.num_levels(), 4);
//! assert_eq!(tree.root().unwrap().size(), 4);
//!
//! // Flat labels from the two-cluster level.
//! let labels = Ward::new(2).fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);
//! assert_ne!(labels[0], labels[2]);
//! ```

mod dendrogram;
mod dissimilarity;
mod lance_williams;
pub mod reference;
mod selector;
mod traits;
mod util;
mod ward;

pub use dendrogram::{ClusterNode, Dendrogram, Level, Merge};
pub use traits::Clustering;
pub use ward::Ward;
