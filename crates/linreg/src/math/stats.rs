//! Summary statistics over numeric sequences.
//!
//! ## Purpose
//!
//! This module provides the mean, the (unnormalised) variance, and the
//! covariance used by the least-squares estimator.
//!
//! ## Design notes
//!
//! * **Precomputed means**: `variance` and `covariance` take the mean as an
//!   argument so a single mean can be shared across several statistics.
//! * **Sums, not averages**: `variance` and `covariance` return sums of
//!   squared (or cross) deviations. Their ratio is the OLS slope, so the
//!   `1/n` factor cancels.
//! * **Fail-fast**: Empty and mismatched inputs return an error instead of NaN.
//!
//! ## Invariants
//!
//! * `variance(v, mean(v)) >= 0`.
//! * `covariance(v, m, v, m) == variance(v, m)`.
//!
//! ## Non-goals
//!
//! * This module does not check inputs for finiteness.
//! * This module does not compute sample (n - 1) or population (n) variance.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;

// ============================================================================
// Core Statistics
// ============================================================================

/// Arithmetic mean of a non-empty sequence.
pub fn mean<T: Float>(values: &[T]) -> Result<T, RegressionError> {
    if values.is_empty() {
        return Err(RegressionError::EmptyInput);
    }

    let n = T::from(values.len()).unwrap_or(T::one());
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);

    Ok(sum / n)
}

/// Sum of squared deviations from `mean`.
///
/// The caller must supply a mean consistent with `values`.
pub fn variance<T: Float>(values: &[T], mean: T) -> Result<T, RegressionError> {
    if values.is_empty() {
        return Err(RegressionError::EmptyInput);
    }

    Ok(values.iter().fold(T::zero(), |acc, &v| {
        let d = v - mean;
        acc + d * d
    }))
}

/// Sum of paired products of deviations from the respective means.
pub fn covariance<T: Float>(
    xs: &[T],
    mean_x: T,
    ys: &[T],
    mean_y: T,
) -> Result<T, RegressionError> {
    if xs.len() != ys.len() {
        return Err(RegressionError::MismatchedInputs {
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }
    if xs.is_empty() {
        return Err(RegressionError::EmptyInput);
    }

    Ok(xs
        .iter()
        .zip(ys.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + (x - mean_x) * (y - mean_y)))
}

// ============================================================================
// Column Summary
// ============================================================================

/// Mean and sum-of-squares variance of a single column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats<T> {
    /// Arithmetic mean.
    pub mean: T,

    /// Sum of squared deviations from the mean.
    pub variance: T,
}

impl<T: Float> SummaryStats<T> {
    /// Compute the summary of `values`.
    pub fn of(values: &[T]) -> Result<Self, RegressionError> {
        let mean = mean(values)?;
        let variance = variance(values, mean)?;
        Ok(Self { mean, variance })
    }
}

impl<T: Float + Display> Display for SummaryStats<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "mean={:.3} variance={:.3}", self.mean, self.variance)
    }
}
