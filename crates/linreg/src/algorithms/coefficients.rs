//! Ordinary least squares coefficient estimation.
//!
//! ## Purpose
//!
//! This module estimates the intercept and slope of the line `y = b0 + b1 * x`
//! that minimises the sum of squared residuals over a training dataset.
//!
//! ## Design notes
//!
//! * **Closed form**: `b1 = cov(x, y) / var(x)` and `b0 = mean_y - b1 * mean_x`.
//! * **Degeneracy**: A predictor column with no spread has no defined slope;
//!   this is reported as `ZeroVariance` instead of producing NaN or Inf.
//! * **Finiteness**: NaN or infinite inputs are rejected with
//!   `InvalidNumericValue` before any statistic is computed.
//!
//! ## Invariants
//!
//! * The fitted line always passes through `(mean_x, mean_y)`.
//!
//! ## Non-goals
//!
//! * This module does not support multiple predictors or weights.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::math::stats::{covariance, mean, variance};
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::RegressionError;
use crate::primitives::finite::check_finite;

// ============================================================================
// Coefficients
// ============================================================================

/// Intercept and slope of a fitted line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients<T> {
    /// Intercept (`b0`).
    pub intercept: T,

    /// Slope (`b1`).
    pub slope: T,
}

impl<T: Float> Coefficients<T> {
    /// Create coefficients from an intercept and a slope.
    pub fn new(intercept: T, slope: T) -> Self {
        Self { intercept, slope }
    }

    /// Estimate coefficients from a training dataset.
    pub fn estimate(train: &Dataset<T>) -> Result<Self, RegressionError> {
        estimate_coefficients(train.x(), train.y())
    }

    /// Predicted value at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }
}

impl<T: Float + Display> Display for Coefficients<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "B0={:.3}, B1={:.3}", self.intercept, self.slope)
    }
}

// ============================================================================
// Estimation
// ============================================================================

/// Estimate OLS coefficients from paired columns.
pub fn estimate_coefficients<T: Float>(x: &[T], y: &[T]) -> Result<Coefficients<T>, RegressionError> {
    check_finite("x", x)?;
    check_finite("y", y)?;

    let mean_x = mean(x)?;
    let mean_y = mean(y)?;

    let var_x = variance(x, mean_x)?;
    if is_degenerate(x, var_x) {
        return Err(RegressionError::ZeroVariance);
    }

    let cov_xy = covariance(x, mean_x, y, mean_y)?;

    let slope = cov_xy / var_x;
    let intercept = mean_y - slope * mean_x;

    Ok(Coefficients { intercept, slope })
}

/// Whether `x` has no spread.
///
/// Identical values whose mean is not exactly representable leave a variance
/// of rounding noise, so identity is tested on the values themselves. A zero
/// variance from distinct values means the deviations underflowed.
fn is_degenerate<T: Float>(x: &[T], var_x: T) -> bool {
    let first = x[0];
    x.iter().all(|&v| v == first) || var_x == T::zero()
}
