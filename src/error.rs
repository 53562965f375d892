use thiserror::Error;

/// Errors returned by the clustering routines in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Input dataset has no observations.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Observations in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// An observation contains NaN or an infinity.
    #[error("non-finite value at row {row}, column {col}")]
    NonFiniteValue {
        /// Observation index.
        row: usize,
        /// Coordinate index within the observation.
        col: usize,
    },

    /// Requested cluster count is incompatible with the dataset.
    #[error("invalid cluster count: requested {requested}, but dataset has {n_items} items")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of items in the dataset.
        n_items: usize,
    },

    /// A merge was requested with fewer than two live clusters.
    ///
    /// The merge loop never does this; seeing it means an internal invariant broke.
    #[error("degenerate merge: {live} live cluster(s), need at least 2")]
    DegenerateMerge {
        /// Number of live clusters supplied to the selector.
        live: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
