//! Global closest-pair selection over the live clusters of one level.

use super::dissimilarity::DissimilarityMatrix;
use crate::error::{Error, Result};

/// The pair of clusters chosen for the next merge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct MergePair {
    /// Position (within the live list) of the cluster with the smaller id.
    pub(crate) first_pos: usize,
    /// Position (within the live list) of the cluster with the larger id.
    pub(crate) second_pos: usize,
    /// Smaller cluster id; becomes the merged cluster's id.
    pub(crate) first_id: usize,
    /// Larger cluster id; retired by the merge.
    pub(crate) second_id: usize,
    /// Squared Ward dissimilarity between the two clusters.
    pub(crate) dissimilarity: f64,
}

/// Find the live pair with minimal dissimilarity.
///
/// Pairs are scanned by position `(p, q)`, `p < q`, in ascending order. The first
/// pair reaching the minimum wins, and an exact zero ends the scan early. The
/// returned pair is ordered by id, not by position.
pub(crate) fn select_pair(
    matrix: &DissimilarityMatrix,
    live_ids: &[usize],
) -> Result<MergePair> {
    let k = live_ids.len();
    if k < 2 {
        return Err(Error::DegenerateMerge { live: k });
    }

    let mut best = (0, 1);
    let mut best_val = f64::INFINITY;

    'scan: for p in 0..k {
        for q in (p + 1)..k {
            let d = matrix.get(live_ids[p], live_ids[q]);
            if d < best_val {
                best_val = d;
                best = (p, q);
                if d == 0.0 {
                    break 'scan;
                }
            }
        }
    }

    let (p, q) = best;
    let (first_pos, second_pos) = if live_ids[p] < live_ids[q] {
        (p, q)
    } else {
        (q, p)
    };

    Ok(MergePair {
        first_pos,
        second_pos,
        first_id: live_ids[first_pos],
        second_id: live_ids[second_pos],
        dissimilarity: best_val,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(points: &[f32]) -> DissimilarityMatrix {
        let data: Vec<Vec<f32>> = points.iter().map(|&x| vec![x]).collect();
        DissimilarityMatrix::from_observations(&data)
    }

    #[test]
    fn picks_global_minimum() {
        let m = matrix(&[0.0, 5.0, 5.5, 20.0]);
        let pair = select_pair(&m, &[0, 1, 2, 3]).unwrap();
        assert_eq!((pair.first_id, pair.second_id), (1, 2));
        assert!((pair.dissimilarity - 0.25).abs() < 1e-12);
    }

    #[test]
    fn ties_go_to_first_pair_in_scan_order() {
        // (0,1) and (2,3) both at squared distance 1.
        let m = matrix(&[0.0, 1.0, 9.0, 10.0]);
        let pair = select_pair(&m, &[0, 1, 2, 3]).unwrap();
        assert_eq!((pair.first_id, pair.second_id), (0, 1));

        // Scan order is positional, so listing the far pair first flips the winner.
        let pair = select_pair(&m, &[2, 3, 0, 1]).unwrap();
        assert_eq!((pair.first_id, pair.second_id), (2, 3));
    }

    #[test]
    fn output_is_ordered_by_id() {
        let m = matrix(&[0.0, 100.0, 3.0, 3.5]);
        // Positions: id 3 at 0, id 2 at 1.
        let pair = select_pair(&m, &[3, 2, 0, 1]).unwrap();
        assert_eq!(pair.first_id, 2);
        assert_eq!(pair.second_id, 3);
        assert_eq!(pair.first_pos, 1);
        assert_eq!(pair.second_pos, 0);
    }

    #[test]
    fn zero_dissimilarity_returns_first_zero() {
        let m = matrix(&[4.0, 1.0, 4.0, 1.0]);
        let pair = select_pair(&m, &[0, 1, 2, 3]).unwrap();
        assert_eq!((pair.first_id, pair.second_id), (0, 2));
        assert_eq!(pair.dissimilarity, 0.0);
    }

    #[test]
    fn fewer_than_two_clusters_is_degenerate() {
        let m = matrix(&[0.0, 1.0]);
        assert!(matches!(
            select_pair(&m, &[0]),
            Err(Error::DegenerateMerge { live: 1 })
        ));
        assert!(matches!(
            select_pair(&m, &[]),
            Err(Error::DegenerateMerge { live: 0 })
        ));
    }
}
