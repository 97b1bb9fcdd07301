pub mod normalized;

use ndarray::{Array2, ArrayView2};

/// Dense all-pairs distance over the rows of a sample matrix.
///
/// Missing entries in `data` are marked with NaN. Implementations must
/// return an `(n_samples, n_samples)` matrix where entry `(i, j)` is a
/// distance normalized over the features observed in both rows, and
/// non-finite (infinite) when the two rows share no observed feature.
pub trait PairwiseDistance {
    fn all_pairs(&self, data: ArrayView2<f64>) -> Array2<f64>;
}

pub use self::normalized::NormalizedEuclidean;
