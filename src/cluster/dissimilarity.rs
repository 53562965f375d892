//! Pairwise cluster dissimilarities, keyed by cluster id.
//!
//! Storage is a condensed (strictly upper-triangular) array over the original
//! observation indices. Cluster ids are always drawn from that index set: a merged
//! cluster takes the smaller of its children's ids and reuses that id's slots, so
//! the matrix never grows or reshuffles while the merge loop runs. Slots keyed by
//! an id that has been merged away are stale and must not be read.

use super::util;

/// Squared Ward dissimilarities between live clusters.
#[derive(Clone, Debug)]
pub(crate) struct DissimilarityMatrix {
    n: usize,
    values: Vec<f64>,
}

impl DissimilarityMatrix {
    /// Build the initial matrix: squared Euclidean distance for every pair of observations.
    pub(crate) fn from_observations(data: &[Vec<f32>]) -> Self {
        let n = data.len();
        let dists = util::pairwise_distances(data);
        let mut values = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = dists[i * n + j];
                values.push(d * d);
            }
        }
        Self { n, values }
    }

    /// Dissimilarity between clusters `a` and `b` (either order).
    #[inline]
    pub(crate) fn get(&self, a: usize, b: usize) -> f64 {
        self.values[self.slot(a, b)]
    }

    /// Overwrite the dissimilarity between clusters `a` and `b` (either order).
    #[inline]
    pub(crate) fn set(&mut self, a: usize, b: usize, value: f64) {
        let slot = self.slot(a, b);
        self.values[slot] = value;
    }

    #[inline]
    fn slot(&self, a: usize, b: usize) -> usize {
        debug_assert_ne!(a, b, "no self-dissimilarity slot");
        let (i, j) = if a < b { (a, b) } else { (b, a) };
        debug_assert!(j < self.n);
        // Rows before `i` hold (n-1) + (n-2) + ... + (n-i) entries.
        i * self.n - i * (i + 1) / 2 + (j - i - 1)
    }
}
