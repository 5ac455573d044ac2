//! Error metrics between actual and predicted values.
//!
//! ## Purpose
//!
//! This module provides the scalar error metrics used to score predictions:
//! root mean squared error, mean absolute error, and R^2.
//!
//! ## Invariants
//!
//! * RMSE and MAE are non-negative.
//! * R^2 <= 1 (R^2 = 1 is a perfect fit).
//!
//! ## Non-goals
//!
//! * This module does not compute weighted metrics.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;

/// Check that two sequences can be compared element-wise.
fn check_paired<T>(actual: &[T], predicted: &[T]) -> Result<(), RegressionError> {
    if actual.len() != predicted.len() {
        return Err(RegressionError::MismatchedInputs {
            x_len: actual.len(),
            y_len: predicted.len(),
        });
    }
    if actual.is_empty() {
        return Err(RegressionError::EmptyInput);
    }
    Ok(())
}

/// Residual sum of squares, `sum (predicted_i - actual_i)^2`.
pub fn sum_squared_error<T: Float>(actual: &[T], predicted: &[T]) -> Result<T, RegressionError> {
    check_paired(actual, predicted)?;

    Ok(actual
        .iter()
        .zip(predicted.iter())
        .fold(T::zero(), |acc, (&a, &p)| {
            let e = p - a;
            acc + e * e
        }))
}

/// Root mean squared error.
/// RMSE = sqrt((1/n) * sum (predicted_i - actual_i)^2).
pub fn rmse_metric<T: Float>(actual: &[T], predicted: &[T]) -> Result<T, RegressionError> {
    let sse = sum_squared_error(actual, predicted)?;
    let n = T::from(actual.len()).unwrap_or(T::one());
    Ok((sse / n).sqrt())
}

/// Mean absolute error.
/// MAE = (1/n) * sum |predicted_i - actual_i|.
pub fn mae_metric<T: Float>(actual: &[T], predicted: &[T]) -> Result<T, RegressionError> {
    check_paired(actual, predicted)?;

    let n = T::from(actual.len()).unwrap_or(T::one());
    let sum = actual
        .iter()
        .zip(predicted.iter())
        .fold(T::zero(), |acc, (&a, &p)| acc + (p - a).abs());

    Ok(sum / n)
}

/// Coefficient of determination.
/// R^2 = 1 - SS_res / SS_tot.
///
/// When every actual value is identical, a perfect prediction scores 1 and
/// anything else scores 0.
pub fn r_squared_metric<T: Float>(actual: &[T], predicted: &[T]) -> Result<T, RegressionError> {
    check_paired(actual, predicted)?;

    let n = T::from(actual.len()).unwrap_or(T::one());
    let mean = actual.iter().fold(T::zero(), |acc, &a| acc + a) / n;

    let (ss_tot, ss_res) = actual.iter().zip(predicted.iter()).fold(
        (T::zero(), T::zero()),
        |(tot, res), (&a, &p)| {
            let deviation = a - mean;
            let residual = a - p;
            (tot + deviation * deviation, res + residual * residual)
        },
    );

    if ss_tot == T::zero() {
        if ss_res == T::zero() {
            Ok(T::one())
        } else {
            Ok(T::zero())
        }
    } else {
        Ok(T::one() - ss_res / ss_tot)
    }
}
