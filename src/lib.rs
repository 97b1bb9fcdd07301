//! Pairwise distance matrices for KNN imputation under missing data
//!
//! Given a sample matrix and a parallel missingness mask, this crate produces the two inputs a k-nearest-neighbors imputation pass needs: a row-major copy of the matrix with every missing entry marked by a NaN sentinel, and a dense all-pairs distance matrix where each distance is normalized over the features both samples observed. Self-distances are replaced by a large finite sentinel so a sample never picks itself as a neighbor, zero distances are raised to a configurable floor, and infinite distances (pairs sharing no observed feature) are lowered to the finite ceiling, so the result is finite everywhere and safe to feed into neighbor selection.
//!
//! The distance computation itself sits behind the [`PairwiseDistance`] trait; [`NormalizedEuclidean`] is the provided implementation, and callers with their own missing-aware metric can swap it in.

use ndarray::ArrayView2;

pub mod core;
pub mod distance;

pub use crate::core::{Config, DistanceMatrixPreparer, PrepareError, Prepared, Result};
pub use crate::distance::{NormalizedEuclidean, PairwiseDistance};

/// Prepares neighbor-search inputs with the default thresholds and the
/// built-in normalized Euclidean metric.
pub fn prepare(x: ArrayView2<f64>, missing_mask: ArrayView2<bool>) -> Result<Prepared> {
    prepare_with_config(x, missing_mask, Config::default())
}

/// Same as [`prepare`] but with caller-supplied clamping thresholds.
pub fn prepare_with_config(
    x: ArrayView2<f64>,
    missing_mask: ArrayView2<bool>,
    config: Config,
) -> Result<Prepared> {
    DistanceMatrixPreparer::new(config, NormalizedEuclidean)?.prepare(x, missing_mask)
}
