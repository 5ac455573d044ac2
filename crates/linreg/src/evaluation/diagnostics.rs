//! Diagnostic metrics for fit quality assessment.
//!
//! ## Purpose
//!
//! This module bundles the goodness-of-fit metrics of a fitted line into a
//! single `Diagnostics` value with a human-readable report.
//!
//! ## Design notes
//!
//! * **Residual-based**: Metrics are computed from residuals (y - ŷ).
//! * **Standard error of regression**: The residual SD divides the RSS by
//!   `n - 2`, the residual degrees of freedom of a two-parameter line.
//!
//! ## Invariants
//!
//! * RMSE, MAE and residual SD are non-negative.
//! * R^2 <= 1.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::metrics::{mae_metric, r_squared_metric, rmse_metric, sum_squared_error};
use crate::primitives::errors::RegressionError;

/// Diagnostic metrics for assessing a linear fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Root Mean Squared Error (RMSE).
    pub rmse: T,

    /// Mean Absolute Error (MAE).
    pub mae: T,

    /// Coefficient of determination (R^2).
    pub r_squared: T,

    /// Residual standard deviation, `sqrt(RSS / (n - 2))`.
    pub residual_sd: T,
}

impl<T: Float> Diagnostics<T> {
    /// Number of parameters in a simple linear regression (intercept + slope).
    const LINEAR_PARAMS: usize = 2;

    /// Compute diagnostic statistics from actual and fitted values.
    pub fn compute(y: &[T], fitted: &[T]) -> Result<Self, RegressionError> {
        let rmse = rmse_metric(y, fitted)?;
        let mae = mae_metric(y, fitted)?;
        let r_squared = r_squared_metric(y, fitted)?;
        let residual_sd = Self::calculate_residual_sd(y, fitted)?;

        Ok(Diagnostics {
            rmse,
            mae,
            r_squared,
            residual_sd,
        })
    }

    /// Standard error of the regression.
    ///
    /// Falls back to RMSE when there are no residual degrees of freedom.
    pub fn calculate_residual_sd(y: &[T], fitted: &[T]) -> Result<T, RegressionError> {
        let n = y.len();
        if n <= Self::LINEAR_PARAMS {
            return rmse_metric(y, fitted);
        }

        let rss = sum_squared_error(y, fitted)?;
        let dof = T::from(n - Self::LINEAR_PARAMS).unwrap_or(T::one());
        Ok((rss / dof).sqrt())
    }
}

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Regression Diagnostics:")?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        writeln!(f, "  R²:           {:.6}", self.r_squared)?;
        writeln!(f, "  Residual SD:  {:.6}", self.residual_sd)?;
        Ok(())
    }
}
