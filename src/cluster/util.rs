//! Numeric helpers shared by the incremental and reference formulations.

use crate::error::{Error, Result};

/// Check that `data` is a non-empty, rectangular, finite matrix.
///
/// Returns the dimensionality on success.
pub(crate) fn validate(data: &[Vec<f32>]) -> Result<usize> {
    let first = data.first().ok_or(Error::EmptyInput)?;
    let d = first.len();
    if d == 0 {
        return Err(Error::InvalidParameter {
            name: "dimension",
            message: "must be at least 1",
        });
    }
    for (row, point) in data.iter().enumerate() {
        if point.len() != d {
            return Err(Error::DimensionMismatch {
                expected: d,
                found: point.len(),
            });
        }
        if let Some(col) = point.iter().position(|x| !x.is_finite()) {
            return Err(Error::NonFiniteValue { row, col });
        }
    }
    Ok(d)
}

#[inline]
pub(crate) fn squared_euclidean(a: &[f32], b: &[f32]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = f64::from(x) - f64::from(y);
            d * d
        })
        .sum()
}

/// Dense symmetric `n x n` matrix of Euclidean distances, row-major.
pub(crate) fn pairwise_distances(data: &[Vec<f32>]) -> Vec<f64> {
    let n = data.len();
    let mut dists = vec![0.0f64; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = squared_euclidean(&data[i], &data[j]).sqrt();
            dists[i * n + j] = d;
            dists[j * n + i] = d;
        }
    }
    dists
}

/// Borrow the rows of `data` selected by `indices`, in the given order.
pub(crate) fn gather<'a>(data: &'a [Vec<f32>], indices: &[usize]) -> Vec<&'a [f32]> {
    indices.iter().map(|&i| data[i].as_slice()).collect()
}

/// Sum of squared deviations of `rows` from their centroid.
///
/// Zero for an empty set or a single row.
pub(crate) fn error_sum_of_squares(rows: &[&[f32]]) -> f64 {
    let Some(first) = rows.first() else {
        return 0.0;
    };
    let d = first.len();
    let count = rows.len() as f64;

    let mut centroid = vec![0.0f64; d];
    for row in rows {
        for (c, &x) in centroid.iter_mut().zip(row.iter()) {
            *c += f64::from(x);
        }
    }
    for c in &mut centroid {
        *c /= count;
    }

    rows.iter()
        .map(|row| {
            row.iter()
                .zip(centroid.iter())
                .map(|(&x, &c)| {
                    let dev = f64::from(x) - c;
                    dev * dev
                })
                .sum::<f64>()
        })
        .sum()
}
