//! Ordinary least-squares linear regression.
//!
//! Fits `y = intercept + coefficients · x` in closed form. Features and
//! targets are centred, the Gram matrix `XcᵀXc` goes through faer's
//! self-adjoint eigendecomposition, and the coefficients are taken from its
//! pseudo-inverse.
//! Rank-deficient data (collinear columns, a single row) therefore resolves
//! to the minimum-norm solution rather than failing.

use faer::{Faer, Mat, Side};
use serde::{Deserialize, Serialize};

use crate::error::{FitError, PredictionError};
use crate::traits::Regressor;

/// Eigenvalues below `RANK_TOLERANCE * largest eigenvalue` count as zero.
const RANK_TOLERANCE: f64 = 1e-10;

/// A fitted linear model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// One coefficient per feature.
    pub coefficients: Vec<f64>,
    /// Constant term.
    pub intercept: f64,
}

impl LinearModel {
    /// Fit a model on `rows` (one feature vector per sample) against `targets`.
    pub fn fit(rows: &[Vec<f64>], targets: &[f64]) -> Result<Self, FitError> {
        if rows.is_empty() {
            return Err(FitError::EmptyDataset);
        }
        if rows.len() != targets.len() {
            return Err(FitError::LengthMismatch {
                rows: rows.len(),
                targets: targets.len(),
            });
        }

        let width = rows[0].len();
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(FitError::RaggedRows {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
        }
        let all_finite = rows.iter().flatten().chain(targets).all(|v| v.is_finite());
        if !all_finite {
            return Err(FitError::NonFinite);
        }

        let n = rows.len() as f64;
        let x_mean: Vec<f64> = (0..width)
            .map(|j| rows.iter().map(|r| r[j]).sum::<f64>() / n)
            .collect();
        let y_mean = targets.iter().sum::<f64>() / n;

        let centred: Vec<Vec<f64>> = rows
            .iter()
            .map(|row| row.iter().zip(&x_mean).map(|(x, m)| x - m).collect())
            .collect();
        let moment: Vec<f64> = (0..width)
            .map(|a| {
                centred
                    .iter()
                    .zip(targets)
                    .map(|(c, y)| c[a] * (y - y_mean))
                    .sum()
            })
            .collect();
        let gram = Mat::from_fn(width, width, |a, b| {
            centred.iter().map(|c| c[a] * c[b]).sum::<f64>()
        });

        let coefficients = pseudo_inverse_solve(&gram, &moment);
        let intercept = y_mean
            - coefficients
                .iter()
                .zip(&x_mean)
                .map(|(c, m)| c * m)
                .sum::<f64>();

        Ok(Self {
            coefficients,
            intercept,
        })
    }
}

impl Regressor for LinearModel {
    fn input_len(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, input: &[f64]) -> Result<f64, PredictionError> {
        if input.len() != self.coefficients.len() {
            return Err(PredictionError::DimensionMismatch {
                expected: self.coefficients.len(),
                actual: input.len(),
            });
        }
        let value = self.intercept
            + self
                .coefficients
                .iter()
                .zip(input)
                .map(|(c, x)| c * x)
                .sum::<f64>();
        if value.is_finite() {
            Ok(value)
        } else {
            Err(PredictionError::NonFinite)
        }
    }
}

/// Solve `gram · beta = moment` with the pseudo-inverse of the symmetric `gram`.
fn pseudo_inverse_solve(gram: &Mat<f64>, moment: &[f64]) -> Vec<f64> {
    let width = moment.len();
    let mut beta = vec![0.0; width];
    if width == 0 {
        return beta;
    }

    let eigen = gram.selfadjoint_eigendecomposition(Side::Lower);
    let u = eigen.u();

    // Eigenvalue k as the Rayleigh quotient of column k of `u`.
    let eigenvalues: Vec<f64> = (0..width)
        .map(|k| {
            (0..width)
                .map(|i| {
                    let row: f64 = (0..width).map(|j| gram.read(i, j) * u.read(j, k)).sum();
                    u.read(i, k) * row
                })
                .sum()
        })
        .collect();

    let largest = eigenvalues.iter().fold(0.0f64, |acc, &l| acc.max(l));
    if largest <= 0.0 {
        return beta;
    }
    let cutoff = largest * RANK_TOLERANCE;

    for (k, &lambda) in eigenvalues.iter().enumerate() {
        if lambda <= cutoff {
            continue;
        }
        let projection: f64 = (0..width).map(|m| u.read(m, k) * moment[m]).sum();
        let scale = projection / lambda;
        for (j, b) in beta.iter_mut().enumerate() {
            *b += scale * u.read(j, k);
        }
    }
    beta
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn fits_exact_line() {
        // y = 2x + 1
        let rows = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
        let targets = vec![1.0, 3.0, 5.0, 7.0];
        let model = LinearModel::fit(&rows, &targets).unwrap();
        assert!(close(model.coefficients[0], 2.0), "{model:?}");
        assert!(close(model.intercept, 1.0), "{model:?}");
        assert!(close(model.predict(&[10.0]).unwrap(), 21.0));
    }

    #[test]
    fn fits_plane_with_two_features() {
        // y = 0.5a - 0.25b + 4
        let rows = vec![
            vec![10.0, 20.0],
            vec![30.0, 10.0],
            vec![50.0, 70.0],
            vec![80.0, 40.0],
            vec![60.0, 90.0],
        ];
        let targets: Vec<f64> = rows.iter().map(|r| 0.5 * r[0] - 0.25 * r[1] + 4.0).collect();
        let model = LinearModel::fit(&rows, &targets).unwrap();
        assert!(close(model.coefficients[0], 0.5), "{model:?}");
        assert!(close(model.coefficients[1], -0.25), "{model:?}");
        assert!(close(model.intercept, 4.0), "{model:?}");
    }

    #[test]
    fn least_squares_on_noisy_points() {
        // Closed form for simple regression: slope = cov(x, y) / var(x).
        let rows = vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]];
        let targets = vec![2.0, 2.0, 4.0, 4.0];
        let model = LinearModel::fit(&rows, &targets).unwrap();
        assert!(close(model.coefficients[0], 0.8), "{model:?}");
        assert!(close(model.intercept, 1.0), "{model:?}");
    }

    #[test]
    fn collinear_features_use_minimum_norm_solution() {
        let rows: Vec<Vec<f64>> = [50.0, 60.0, 70.0, 80.0]
            .iter()
            .map(|&v| vec![v, v])
            .collect();
        let targets = vec![50.0, 60.0, 70.0, 80.0];
        let model = LinearModel::fit(&rows, &targets).unwrap();
        assert!(close(model.coefficients[0], 0.5), "{model:?}");
        assert!(close(model.coefficients[1], 0.5), "{model:?}");
        assert!(close(model.intercept, 0.0), "{model:?}");
    }

    #[test]
    fn single_row_predicts_its_target() {
        let model = LinearModel::fit(&[vec![75.0, 65.0]], &[88.0]).unwrap();
        assert_eq!(model.coefficients, vec![0.0, 0.0]);
        assert!(close(model.predict(&[10.0, 20.0]).unwrap(), 88.0));
    }

    #[test]
    fn zero_features_predicts_the_mean() {
        let model = LinearModel::fit(&[vec![], vec![]], &[60.0, 80.0]).unwrap();
        assert_eq!(model.input_len(), 0);
        assert!(close(model.predict(&[]).unwrap(), 70.0));
    }

    #[test]
    fn fit_rejects_bad_input() {
        assert_eq!(LinearModel::fit(&[], &[]), Err(FitError::EmptyDataset));
        assert_eq!(
            LinearModel::fit(&[vec![1.0]], &[1.0, 2.0]),
            Err(FitError::LengthMismatch {
                rows: 1,
                targets: 2
            })
        );
        assert_eq!(
            LinearModel::fit(&[vec![1.0], vec![1.0, 2.0]], &[1.0, 2.0]),
            Err(FitError::RaggedRows {
                row: 1,
                expected: 1,
                actual: 2
            })
        );
        assert_eq!(
            LinearModel::fit(&[vec![f64::NAN]], &[1.0]),
            Err(FitError::NonFinite)
        );
    }

    #[test]
    fn predict_rejects_wrong_dimension() {
        let model = LinearModel::fit(&[vec![1.0], vec![2.0]], &[1.0, 2.0]).unwrap();
        assert_eq!(
            model.predict(&[1.0, 2.0]),
            Err(PredictionError::DimensionMismatch {
                expected: 1,
                actual: 2
            })
        );
        assert_eq!(model.predict(&[f64::INFINITY]), Err(PredictionError::NonFinite));
    }

    #[test]
    fn fit_is_deterministic() {
        let rows = vec![vec![80.0, 75.0], vec![90.0, 88.0], vec![60.0, 70.0]];
        let targets = vec![70.0, 85.0, 65.0];
        let a = LinearModel::fit(&rows, &targets).unwrap();
        let b = LinearModel::fit(&rows, &targets).unwrap();
        assert_eq!(a, b);
    }
}
