//! Lance-Williams recurrence for Ward's method on squared dissimilarities.
//!
//! After clusters `A` and `B` merge, the dissimilarity from the merged cluster to
//! any survivor `C` follows from the pre-merge values alone:
//!
//! ```text
//! d(AB, C) = [ (|A|+|C|)·d(A,C) + (|B|+|C|)·d(B,C) − |C|·d(A,B) ] / (|A|+|B|+|C|)
//! ```
//!
//! With squared Euclidean inputs this equals `2·|AB||C|/(|AB|+|C|)·‖μ_AB − μ_C‖²`,
//! i.e. twice the increase in error sum of squares from merging `AB` with `C`.

use log::warn;

use super::dissimilarity::DissimilarityMatrix;
use super::selector::MergePair;

/// Ward update for one survivor. May return a tiny negative value under cancellation.
#[inline]
pub(crate) fn ward_update(
    size_a: usize,
    size_b: usize,
    size_c: usize,
    d_ac: f64,
    d_bc: f64,
    d_ab: f64,
) -> f64 {
    let (na, nb, nc) = (size_a as f64, size_b as f64, size_c as f64);
    ((na + nc) * d_ac + (nb + nc) * d_bc - nc * d_ab) / (na + nb + nc)
}

/// Rewrite the merged cluster's row for every survivor.
///
/// `pair` is the merge just selected, with `size_first`/`size_second` the observation
/// counts of its two clusters. `survivors` yields `(id, size)` for every other live
/// cluster. Results land in the slot of `pair.first_id`, which the merged cluster
/// inherits. Negative results are clamped to zero; the number of clamps is returned.
pub(crate) fn update<I>(
    matrix: &mut DissimilarityMatrix,
    pair: &MergePair,
    size_first: usize,
    size_second: usize,
    survivors: I,
) -> usize
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let merged_id = pair.first_id;
    let mut clamped = 0;

    for (id_c, size_c) in survivors {
        debug_assert!(id_c != pair.first_id && id_c != pair.second_id);
        let d_ac = matrix.get(pair.first_id, id_c);
        let d_bc = matrix.get(pair.second_id, id_c);
        let mut d = ward_update(
            size_first,
            size_second,
            size_c,
            d_ac,
            d_bc,
            pair.dissimilarity,
        );
        if d < 0.0 {
            warn!(
                "negative Ward dissimilarity {d:e} between clusters {merged_id} and {id_c}; clamping to 0"
            );
            d = 0.0;
            clamped += 1;
        }
        matrix.set(merged_id, id_c, d);
    }

    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_update_matches_centroid_form() {
        // A = {0}, B = {1}, C = {10}. AB centroid 0.5, 2·2·1/3·9.5² = 120.333..
        let d = ward_update(1, 1, 1, 100.0, 81.0, 1.0);
        assert!((d - 2.0 * 2.0 / 3.0 * 9.5 * 9.5).abs() < 1e-9);
    }

    #[test]
    fn pair_update_for_four_points() {
        // Points {0, 1, 9, 10}. After {0},{1} merge: d({0,1},{9}) and d({0,1},{10}).
        // Merging {9},{10} against {0,1} then gives 2·ΔESS = 2·(82 − 0.5 − 0.5).
        let d_01_9 = ward_update(1, 1, 1, 81.0, 64.0, 1.0);
        let d_01_10 = ward_update(1, 1, 1, 100.0, 81.0, 1.0);
        assert!((d_01_9 - 289.0 / 3.0).abs() < 1e-9);
        assert!((d_01_10 - 361.0 / 3.0).abs() < 1e-9);
        let d = ward_update(1, 1, 2, d_01_9, d_01_10, 1.0);
        assert!((d - 162.0).abs() < 1e-9);
    }

    #[test]
    fn update_writes_into_smaller_id_and_leaves_others() {
        let data = vec![vec![0.0], vec![1.0], vec![9.0], vec![10.0]];
        let mut m = DissimilarityMatrix::from_observations(&data);
        let pair = MergePair {
            first_pos: 2,
            second_pos: 3,
            first_id: 2,
            second_id: 3,
            dissimilarity: 1.0,
        };
        let clamped = update(&mut m, &pair, 1, 1, [(0, 1), (1, 1)]);
        assert_eq!(clamped, 0);
        assert!((m.get(0, 2) - ward_update(1, 1, 1, 81.0, 100.0, 1.0)).abs() < 1e-9);
        assert!((m.get(1, 2) - ward_update(1, 1, 1, 64.0, 81.0, 1.0)).abs() < 1e-9);
        assert_eq!(m.get(0, 1), 1.0);
    }

    #[test]
    fn negative_results_are_clamped() {
        let data = vec![vec![0.0], vec![0.0], vec![0.0]];
        let mut m = DissimilarityMatrix::from_observations(&data);
        // Inconsistent merge height forces a negative recurrence value.
        let pair = MergePair {
            first_pos: 0,
            second_pos: 1,
            first_id: 0,
            second_id: 1,
            dissimilarity: 1.0,
        };
        let clamped = update(&mut m, &pair, 1, 1, [(2, 1)]);
        assert_eq!(clamped, 1);
        assert_eq!(m.get(0, 2), 0.0);
    }
}
