use log::{debug, info};
use ndarray::{Array2, ArrayView2, Zip};

use crate::core::{Config, PrepareError, Result};
use crate::distance::PairwiseDistance;

/// Output of [`DistanceMatrixPreparer::prepare`].
pub struct Prepared {
    /// Row-major copy of the sample matrix with every masked entry set to NaN
    pub filled: Array2<f64>,

    /// Symmetric `(n_samples, n_samples)` distance matrix, finite everywhere,
    /// with every entry in `[min_dist, max_dist]`
    pub distances: Array2<f64>,

    /// Ceiling and self-distance sentinel used while finalizing `distances`
    pub max_dist: f64,
}

/// Builds the neighbor-search inputs for a KNN imputation pass: a NaN-filled
/// copy of the sample matrix and a clamped all-pairs distance matrix.
pub struct DistanceMatrixPreparer<M: PairwiseDistance> {
    config: Config,
    metric: M,
}

impl<M: PairwiseDistance> DistanceMatrixPreparer<M> {
    /// Creates a new preparer.
    ///
    /// # Parameters
    /// - `config`: the two clamping thresholds, see [`Config`].
    /// - `metric`: the missing-aware all-pairs distance implementation.
    ///
    /// # Errors
    /// Returns a `PrepareError::ConfigError` if the configuration is invalid.
    pub fn new(config: Config, metric: M) -> Result<Self> {
        config.validate().map_err(PrepareError::ConfigError)?;

        Ok(DistanceMatrixPreparer { config, metric })
    }

    /// Computes the distance matrix for `x` under `missing_mask`.
    ///
    /// Entries where `missing_mask` is true are treated as missing regardless
    /// of the value stored in `x`. Callers that pre-filled missing entries
    /// with zero (or any other placeholder) are supported: whenever the mask
    /// disagrees with the NaN placement in `x`, every masked position is
    /// rewritten to NaN before distances are computed. Callers passing a
    /// consistent NaN convention get a plain copy.
    ///
    /// The returned distance matrix has its diagonal set to `max_dist` so a
    /// sample is never selected as its own neighbor, and every entry clamped
    /// into `[min_dist, max_dist]`. Clamping also maps infinite distances
    /// (pairs with no jointly observed feature) to the finite ceiling.
    ///
    /// # Errors
    /// Returns a `PrepareError::ShapeMismatch` if mask and data dimensions
    /// differ. Neither input is mutated.
    pub fn prepare(&self, x: ArrayView2<f64>, missing_mask: ArrayView2<bool>) -> Result<Prepared> {
        let (n_samples, n_features) = x.dim();
        if missing_mask.dim() != (n_samples, n_features) {
            let (mask_rows, mask_cols) = missing_mask.dim();
            return Err(PrepareError::ShapeMismatch(
                n_samples, n_features, mask_rows, mask_cols,
            ));
        }

        info!(
            "Preparing distance matrix for {} samples with {} features",
            n_samples, n_features
        );

        let mut filled = x.as_standard_layout().to_owned();

        let masked = missing_mask.iter().filter(|&&m| m).count();
        let already_nan = filled.iter().filter(|v| v.is_nan()).count();
        if masked != already_nan {
            // the missing values have been filled with some placeholder,
            // NaNs must be restored before the distance function sees them
            debug!(
                "mask marks {} entries but {} are NaN, rewriting masked positions",
                masked, already_nan
            );
            Zip::from(&mut filled)
                .and(&missing_mask)
                .for_each(|value, &is_missing| {
                    if is_missing {
                        *value = f64::NAN;
                    }
                });
        }

        let mut distances = self.metric.all_pairs(filled.view());

        let max_finite = distances
            .iter()
            .copied()
            .filter(|d| d.is_finite())
            .fold(f64::NEG_INFINITY, f64::max);
        // max(1, ..) keeps the sentinel meaningful when every finite
        // distance is below 1 (or when there is none at all); the cap keeps
        // it finite when the largest distance approaches f64::MAX
        let max_dist = (self.config.max_dist_multiplier * max_finite.max(1.0)).min(f64::MAX);

        // a sample must never pick itself as nearest neighbor
        distances.diag_mut().fill(max_dist);

        let min_dist = self.config.min_dist;
        distances.mapv_inplace(|d| {
            if d < min_dist {
                min_dist
            } else if d > max_dist || d.is_nan() {
                max_dist
            } else {
                d
            }
        });

        debug!("max_dist sentinel set to {:e}", max_dist);

        Ok(Prepared {
            filled,
            distances,
            max_dist,
        })
    }
}
