//! Ward's minimum-variance agglomerative clustering.
//!
//! # The Algorithm
//!
//! Start with every observation in its own cluster. At each step, merge the two
//! clusters whose union increases the total within-cluster sum of squares the
//! least. After `n − 1` merges a single cluster remains.
//!
//! Dissimilarities are squared Euclidean distances, updated after every merge with
//! the Lance-Williams recurrence, so no step ever
//! revisits the raw data. The merge height of a step is the square root of the
//! selected dissimilarity; for two singletons it is their Euclidean distance.
//!
//! ## Complexity
//!
//! - **Time**: O(n³): each of the `n − 1` steps scans all live pairs.
//! - **Space**: O(n²) for the condensed dissimilarity matrix and the level history.
//!
//! ## Determinism
//!
//! There is no randomness. Among equal dissimilarities the first pair in positional
//! scan order wins, and each new level lists the merged cluster first, followed by
//! the survivors in their previous order.
//!
//! ## References
//!
//! Ward, J. H. (1963). "Hierarchical Grouping to Optimize an Objective Function."
//! JASA 58(301).
//!
//! Lance, G. N., Williams, W. T. (1967). "A General Theory of Classificatory
//! Sorting Strategies." The Computer Journal 9(4).

use log::{debug, trace};

use super::dendrogram::Dendrogram;
use super::dissimilarity::DissimilarityMatrix;
use super::traits::Clustering;
use super::{lance_williams, reference, selector, util};
use crate::error::{Error, Result};

/// Ward agglomerative clustering.
#[derive(Debug, Clone)]
pub struct Ward {
    /// Number of flat clusters reported by [`Clustering::fit_predict`].
    n_clusters: usize,
}

impl Ward {
    /// Create a Ward clusterer whose flat cut yields `n_clusters` clusters.
    ///
    /// The full dendrogram from [`Ward::fit`] does not depend on `n_clusters`.
    pub fn new(n_clusters: usize) -> Self {
        Self { n_clusters }
    }

    /// Set the number of clusters used by `fit_predict`.
    pub fn with_n_clusters(mut self, n_clusters: usize) -> Self {
        self.n_clusters = n_clusters;
        self
    }

    /// Build the full dendrogram with the incremental Lance-Williams algorithm.
    pub fn fit(&self, data: &[Vec<f32>]) -> Result<Dendrogram> {
        let d = util::validate(data)?;
        let n = data.len();
        debug!("ward fit: {n} observations, {d} dimensions");

        let mut matrix = DissimilarityMatrix::from_observations(data);
        let mut tree = Dendrogram::with_leaves(n);

        while tree.current().len() > 1 {
            let live = tree.current_ids();
            let pair = selector::select_pair(&matrix, &live)?;

            let size_first = tree.current_size(pair.first_pos);
            let size_second = tree.current_size(pair.second_pos);
            let survivors: Vec<(usize, usize)> = live
                .iter()
                .enumerate()
                .filter(|&(pos, _)| pos != pair.first_pos && pos != pair.second_pos)
                .map(|(pos, &id)| (id, tree.current_size(pos)))
                .collect();

            let clamped =
                lance_williams::update(&mut matrix, &pair, size_first, size_second, survivors);
            tree.add_clamped(clamped);

            let height = pair.dissimilarity.sqrt();
            trace!(
                "merge {} + {} at {height} ({} observations)",
                pair.first_id,
                pair.second_id,
                size_first + size_second
            );
            tree.merge(pair.first_pos, pair.second_pos, height);
        }

        debug!(
            "ward fit done: {} levels, {} clamped updates",
            tree.num_levels(),
            tree.clamped_updates()
        );
        Ok(tree)
    }

    /// Build the full dendrogram by recomputing each candidate's error sum of squares
    /// from the raw observations.
    ///
    /// Much slower than [`Ward::fit`]; intended for cross-checking it.
    pub fn fit_reference(&self, data: &[Vec<f32>]) -> Result<Dendrogram> {
        reference::fit_reference(data)
    }
}

impl Default for Ward {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Clustering for Ward {
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        if self.n_clusters == 0 {
            return Err(Error::InvalidParameter {
                name: "n_clusters",
                message: "must be at least 1",
            });
        }
        if !data.is_empty() && self.n_clusters > data.len() {
            return Err(Error::InvalidClusterCount {
                requested: self.n_clusters,
                n_items: data.len(),
            });
        }
        self.fit(data)?.labels(self.n_clusters)
    }

    fn n_clusters(&self) -> usize {
        self.n_clusters
    }
}
