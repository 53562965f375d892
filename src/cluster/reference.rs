//! Brute-force Ward clustering straight from the error sum of squares.
//!
//! Every step evaluates each pair of live clusters by gathering their raw
//! observations and computing `ESS(A ∪ B) − ESS(A) − ESS(B)`, the increase in
//! within-cluster sum of squares that merging them would cause. Nothing is carried
//! between steps except the partition itself, so this shares no state with the
//! Lance-Williams path and serves as an independent check of it.
//!
//! Heights are reported as `√(2·ΔESS)`, the scale the incremental algorithm uses.

use log::debug;

use super::dendrogram::Dendrogram;
use super::util;
use crate::error::{Error, Result};

/// Fit Ward clustering by direct ESS evaluation. O(n⁴·d) overall.
pub fn fit_reference(data: &[Vec<f32>]) -> Result<Dendrogram> {
    let d = util::validate(data)?;
    let n = data.len();
    debug!("ward reference fit: {n} observations, {d} dimensions");

    let mut tree = Dendrogram::with_leaves(n);

    while tree.current().len() > 1 {
        let members: Vec<Vec<usize>> = tree
            .current()
            .node_indices()
            .iter()
            .map(|&idx| tree.nodes()[idx].instances.clone())
            .collect();
        let own_ess: Vec<f64> = members
            .iter()
            .map(|m| util::error_sum_of_squares(&util::gather(data, m)))
            .collect();

        let k = members.len();
        let mut best: Option<(usize, usize, f64)> = None;
        for p in 0..k {
            for q in (p + 1)..k {
                let mut combined = Vec::with_capacity(members[p].len() + members[q].len());
                combined.extend_from_slice(&members[p]);
                combined.extend_from_slice(&members[q]);
                let ess = util::error_sum_of_squares(&util::gather(data, &combined));
                let increase = (ess - own_ess[p] - own_ess[q]).max(0.0);
                let better = match best {
                    None => true,
                    Some((_, _, b)) => increase < b,
                };
                if better {
                    best = Some((p, q, increase));
                }
            }
        }

        let (p, q, increase) = best.ok_or(Error::DegenerateMerge { live: k })?;
        let ids = tree.current_ids();
        let (first_pos, second_pos) = if ids[p] < ids[q] { (p, q) } else { (q, p) };
        tree.merge(first_pos, second_pos, (2.0 * increase).sqrt());
    }

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_points() {
        let data = vec![vec![0.0], vec![1.0], vec![9.0], vec![10.0]];
        let tree = fit_reference(&data).unwrap();
        let merges = tree.merges();
        assert_eq!(merges.len(), 3);
        assert_eq!((merges[0].left, merges[0].right), (0, 1));
        assert_eq!((merges[1].left, merges[1].right), (2, 3));
        assert_eq!((merges[2].left, merges[2].right), (0, 2));
        assert!((merges[0].height - 1.0).abs() < 1e-9);
        assert!((merges[2].height - 162f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn two_points_height_is_distance() {
        let tree = fit_reference(&[vec![1.0, 1.0], vec![4.0, 5.0]]).unwrap();
        assert!((tree.heights()[0] - 5.0).abs() < 1e-9);
    }

    #[test]
    fn single_point_and_errors() {
        let tree = fit_reference(&[vec![2.0]]).unwrap();
        assert_eq!(tree.num_levels(), 1);

        let empty: Vec<Vec<f32>> = vec![];
        assert!(matches!(fit_reference(&empty), Err(Error::EmptyInput)));
    }
}
