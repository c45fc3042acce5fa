//! Closed-form 1D least-squares fitting and evaluation.
//!
//! This module fits `y ≈ coef*x + intercept` by ordinary least squares
//! using the covariance/variance closed form, so no iterative
//! optimization is involved, and computes train/test metrics in one
//! pass. Fitting is stateless: there is no model object, only an
//! immutable [`FitResult`].

use crate::error::{Result, SynthFitError};
use crate::types::SampleSet;
use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

/// The outcome of a single fit-and-evaluate call.
///
/// `test_mse` and `test_r2` are `None` when no test data was supplied.
/// `None` means "not computed", never zero; this crate does not emit
/// NaN metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Estimated slope.
    pub coef: f64,
    /// Estimated intercept. Exactly 0.0 when fitting without intercept.
    pub intercept: f64,
    /// Mean squared error over the training set.
    pub train_mse: f64,
    /// Mean squared error over the test set, if one was supplied.
    pub test_mse: Option<f64>,
    /// Coefficient of determination over the test set, if one was supplied.
    pub test_r2: Option<f64>,
}

/// Fit a 1D linear model on `train` and evaluate it.
///
/// Solves ordinary least squares for `y ≈ coef*x + intercept` in closed
/// form: `coef = cov(x, y) / var(x)` with the intercept chosen so the
/// fit passes through the sample means. With `fit_intercept == false`
/// the intercept is fixed at 0 and `coef = sum(x*y) / sum(x*x)`.
///
/// When `test` is non-empty, predictions over it yield `test_mse` and
/// `test_r2 = 1 - ss_res / ss_tot`. When `test` is empty both test
/// metrics are `None` while coef, intercept and `train_mse` are still
/// computed. Neither input is mutated.
///
/// # Errors
///
/// * `InsufficientData` - `train` is empty.
/// * `DegenerateInput` - all training x values are identical (the
///   intercept-fitting slope is undefined), all training x are zero
///   when fitting without intercept, or the test y values are constant
///   (R² is undefined).
pub fn fit_and_evaluate(
    train: &SampleSet,
    test: &SampleSet,
    fit_intercept: bool,
) -> Result<FitResult> {
    if train.is_empty() {
        return Err(SynthFitError::InsufficientData(
            "training set is empty".to_string(),
        ));
    }

    let x = train.x();
    let y = train.y();
    let n = train.len() as f64;

    let (coef, intercept) = if fit_intercept {
        let x0 = x[0];
        if x.iter().all(|&v| v == x0) {
            return Err(SynthFitError::DegenerateInput(
                "training x values are all identical, slope is undefined".to_string(),
            ));
        }
        let mean_x = x.sum() / n;
        let mean_y = y.sum() / n;
        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (xi, yi) in train.iter() {
            let dx = xi - mean_x;
            sxx += dx * dx;
            sxy += dx * (yi - mean_y);
        }
        if sxx == 0.0 {
            return Err(SynthFitError::DegenerateInput(
                "training x values have zero variance".to_string(),
            ));
        }
        let coef = sxy / sxx;
        (coef, mean_y - coef * mean_x)
    } else {
        let sxx: f64 = x.iter().map(|&xi| xi * xi).sum();
        if sxx == 0.0 {
            return Err(SynthFitError::DegenerateInput(
                "training x values are all zero, slope is undefined without intercept"
                    .to_string(),
            ));
        }
        let sxy: f64 = train.iter().map(|(xi, yi)| xi * yi).sum();
        (sxy / sxx, 0.0)
    };

    let train_mse = mean_squared_error(&x, &y, coef, intercept);

    let (test_mse, test_r2) = if test.is_empty() {
        (None, None)
    } else {
        let ty = test.y();
        let m = test.len() as f64;

        let ss_res: f64 = test
            .iter()
            .map(|(xi, yi)| {
                let r = yi - (coef * xi + intercept);
                r * r
            })
            .sum();

        let mean_ty = ty.sum() / m;
        let ss_tot: f64 = ty.iter().map(|&yi| (yi - mean_ty).powi(2)).sum();
        if ss_tot == 0.0 {
            return Err(SynthFitError::DegenerateInput(
                "test y values are constant, R^2 is undefined".to_string(),
            ));
        }

        (Some(ss_res / m), Some(1.0 - ss_res / ss_tot))
    };

    Ok(FitResult {
        coef,
        intercept,
        train_mse,
        test_mse,
        test_r2,
    })
}

fn mean_squared_error(
    x: &ArrayView1<'_, f64>,
    y: &ArrayView1<'_, f64>,
    coef: f64,
    intercept: f64,
) -> f64 {
    let n = x.len() as f64;
    x.iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| {
            let r = yi - (coef * xi + intercept);
            r * r
        })
        .sum::<f64>()
        / n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SynthFitError;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn set(x: Vec<f64>, y: Vec<f64>) -> SampleSet {
        SampleSet::new(x.into(), y.into()).unwrap()
    }

    #[test]
    fn test_exact_fit_on_noiseless_line() {
        // y = 2x + 1
        let train = set(vec![0.0, 1.0, 2.0, 3.0], vec![1.0, 3.0, 5.0, 7.0]);
        let result = fit_and_evaluate(&train, &SampleSet::empty(), true).unwrap();

        assert_relative_eq!(result.coef, 2.0, epsilon = 1e-12);
        assert_relative_eq!(result.intercept, 1.0, epsilon = 1e-12);
        assert_relative_eq!(result.train_mse, 0.0, epsilon = 1e-20);
    }

    #[test]
    fn test_empty_test_yields_none_metrics() {
        let train = set(vec![0.0, 1.0, 2.0], vec![1.0, 3.0, 5.0]);
        let result = fit_and_evaluate(&train, &SampleSet::empty(), true).unwrap();

        assert!(result.test_mse.is_none());
        assert!(result.test_r2.is_none());
        assert!(result.train_mse.is_finite());
    }

    #[test]
    fn test_test_metrics_on_perfect_prediction() {
        let train = set(vec![0.0, 1.0, 2.0, 3.0], vec![1.0, 3.0, 5.0, 7.0]);
        let test = set(vec![4.0, 5.0], vec![9.0, 11.0]);
        let result = fit_and_evaluate(&train, &test, true).unwrap();

        assert_relative_eq!(result.test_mse.unwrap(), 0.0, epsilon = 1e-20);
        assert_relative_eq!(result.test_r2.unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_r2_zero_for_mean_prediction() {
        // Training data with zero slope: the fit predicts the mean, so
        // R^2 over test data with the same mean is exactly 0.
        let train = set(vec![-1.0, 1.0], vec![2.0, 2.0]);
        let test = set(vec![0.0, 0.0], vec![1.0, 3.0]);
        let result = fit_and_evaluate(&train, &test, true).unwrap();

        assert_relative_eq!(result.coef, 0.0, epsilon = 1e-12);
        assert_relative_eq!(result.test_r2.unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_no_intercept_forces_zero() {
        let train = set(vec![1.0, 2.0, 3.0], vec![3.0, 5.0, 7.0]);
        let result = fit_and_evaluate(&train, &SampleSet::empty(), false).unwrap();

        assert_eq!(result.intercept, 0.0);
        // coef = sum(x*y) / sum(x*x) = (3 + 10 + 21) / (1 + 4 + 9)
        assert_relative_eq!(result.coef, 34.0 / 14.0, epsilon = 1e-12);
    }

    #[test]
    fn test_no_intercept_exact_through_origin() {
        // y = -1.5x passes through the origin; the constrained fit is exact.
        let train = set(vec![-2.0, 1.0, 4.0], vec![3.0, -1.5, -6.0]);
        let result = fit_and_evaluate(&train, &SampleSet::empty(), false).unwrap();

        assert_relative_eq!(result.coef, -1.5, epsilon = 1e-12);
        assert_relative_eq!(result.train_mse, 0.0, epsilon = 1e-20);
    }

    #[test]
    fn test_empty_train_rejected() {
        let result = fit_and_evaluate(&SampleSet::empty(), &SampleSet::empty(), true);
        assert!(matches!(result, Err(SynthFitError::InsufficientData(_))));
    }

    #[test]
    fn test_identical_x_rejected() {
        let train = set(vec![2.0, 2.0, 2.0], vec![1.0, 2.0, 3.0]);
        let result = fit_and_evaluate(&train, &SampleSet::empty(), true);
        assert!(matches!(result, Err(SynthFitError::DegenerateInput(_))));
    }

    #[test]
    fn test_identical_nonzero_x_allowed_without_intercept() {
        // Without an intercept, identical nonzero x still determines a slope.
        let train = set(vec![2.0, 2.0], vec![4.0, 4.0]);
        let result = fit_and_evaluate(&train, &SampleSet::empty(), false).unwrap();
        assert_relative_eq!(result.coef, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_all_zero_x_rejected_without_intercept() {
        let train = set(vec![0.0, 0.0], vec![1.0, 2.0]);
        let result = fit_and_evaluate(&train, &SampleSet::empty(), false);
        assert!(matches!(result, Err(SynthFitError::DegenerateInput(_))));
    }

    #[test]
    fn test_constant_test_y_rejected() {
        let train = set(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]);
        let test = set(vec![0.5, 1.5], vec![3.0, 3.0]);
        let result = fit_and_evaluate(&train, &test, true);
        assert!(matches!(result, Err(SynthFitError::DegenerateInput(_))));
    }

    #[test]
    fn test_single_training_sample() {
        // One sample cannot pin down a slope with an intercept, but the
        // no-intercept form is well defined.
        let train = set(vec![2.0], vec![6.0]);
        let with_intercept = fit_and_evaluate(&train, &SampleSet::empty(), true);
        assert!(matches!(
            with_intercept,
            Err(SynthFitError::DegenerateInput(_))
        ));

        let through_origin = fit_and_evaluate(&train, &SampleSet::empty(), false).unwrap();
        assert_relative_eq!(through_origin.coef, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_train_mse_matches_residuals() {
        let train = set(vec![0.0, 1.0, 2.0], vec![0.0, 0.0, 3.0]);
        let result = fit_and_evaluate(&train, &SampleSet::empty(), true).unwrap();

        let expected: f64 = train
            .iter()
            .map(|(x, y)| (y - (result.coef * x + result.intercept)).powi(2))
            .sum::<f64>()
            / 3.0;
        assert_relative_eq!(result.train_mse, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let train = set(vec![0.0, 1.0, 2.0], vec![1.0, 3.0, 5.0]);
        let test = set(vec![3.0, 4.0], vec![7.0, 9.5]);
        let train_before = train.clone();
        let test_before = test.clone();

        fit_and_evaluate(&train, &test, true).unwrap();
        assert_eq!(train, train_before);
        assert_eq!(test, test_before);
    }

    #[test]
    fn test_fit_result_serde_round_trip() {
        let result = FitResult {
            coef: 2.0,
            intercept: 1.0,
            train_mse: 0.25,
            test_mse: None,
            test_r2: None,
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: FitResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }

    #[test]
    fn test_sample_set_from_arrays() {
        let train = SampleSet::new(array![1.0, 2.0], array![2.0, 4.0]).unwrap();
        let result = fit_and_evaluate(&train, &SampleSet::empty(), true).unwrap();
        assert_relative_eq!(result.coef, 2.0, epsilon = 1e-12);
        assert_relative_eq!(result.intercept, 0.0, epsilon = 1e-12);
    }
}
