use ndarray::{Array2, ArrayView2};

use crate::distance::PairwiseDistance;

/// Squared Euclidean distance computed only over jointly observed features,
/// rescaled by `n_features / n_overlap` so that pairs with different amounts
/// of overlap remain comparable.
pub struct NormalizedEuclidean;

impl PairwiseDistance for NormalizedEuclidean {
    fn all_pairs(&self, data: ArrayView2<f64>) -> Array2<f64> {
        let (n_samples, n_features) = data.dim();
        let mut dist = Array2::<f64>::zeros((n_samples, n_samples));

        for i in 0..n_samples {
            let row_i = data.row(i);
            for j in (i + 1)..n_samples {
                let row_j = data.row(j);

                let mut ssd = 0.0;
                let mut overlap = 0usize;
                for (a, b) in row_i.iter().zip(row_j.iter()) {
                    if a.is_nan() || b.is_nan() {
                        continue;
                    }
                    let diff = a - b;
                    ssd += diff * diff;
                    overlap += 1;
                }

                let value = if overlap == 0 {
                    // no feature observed in both rows, distance is undefined
                    f64::INFINITY
                } else {
                    ssd * n_features as f64 / overlap as f64
                };

                dist[[i, j]] = value;
                dist[[j, i]] = value;
            }
        }

        dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_fully_observed_rows() {
        let data = array![[0.0, 0.0], [3.0, 4.0]];
        let dist = NormalizedEuclidean.all_pairs(data.view());

        // full overlap, no rescaling: 3^2 + 4^2
        assert_eq!(dist[[0, 1]], 25.0);
        assert_eq!(dist[[1, 0]], 25.0);
        assert_eq!(dist[[0, 0]], 0.0);
        assert_eq!(dist[[1, 1]], 0.0);
    }

    #[test]
    fn test_partial_overlap_rescaled() {
        let data = array![[1.0, f64::NAN], [3.0, 5.0]];
        let dist = NormalizedEuclidean.all_pairs(data.view());

        // one of two features observed in both rows: (3-1)^2 * 2/1
        assert_eq!(dist[[0, 1]], 8.0);
    }

    #[test]
    fn test_disjoint_observations_are_infinite() {
        let data = array![[1.0, f64::NAN], [f64::NAN, 5.0]];
        let dist = NormalizedEuclidean.all_pairs(data.view());

        assert!(dist[[0, 1]].is_infinite());
        assert!(dist[[1, 0]].is_infinite());
    }

    #[test]
    fn test_symmetry() {
        let data = array![
            [1.0, 2.0, f64::NAN],
            [4.0, f64::NAN, 6.0],
            [7.0, 8.0, 9.0]
        ];
        let dist = NormalizedEuclidean.all_pairs(data.view());

        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(dist[[i, j]], dist[[j, i]]);
            }
        }
    }
}
