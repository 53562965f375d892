//! Ward agglomerative clustering.
//!
//! `dendro` builds the full merge history (a dendrogram) of Ward's minimum-variance
//! hierarchical clustering over dense vectors.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`Ward`]: incremental clustering via the Lance-Williams recurrence
//! - [`Dendrogram`]: levels, nodes, merge heights, flat cuts, and leaf order
//! - a brute-force reference formulation for cross-checking results

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{ClusterNode, Clustering, Dendrogram, Level, Merge, Ward};
pub use error::{Error, Result};
