//! Output types and result structures for regression fits.
//!
//! ## Purpose
//!
//! This module defines the `RegressionResult` struct which encapsulates all
//! outputs of a fit: column summaries, coefficients, training RMSE, and
//! optional per-point values and diagnostics.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: All optional outputs use `Option<Vec<T>>`.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * All populated vectors have the same length and order as the input data.
//!
//! ## Non-goals
//!
//! * This module does not perform the fit; it only stores and reports it.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::coefficients::Coefficients;
use crate::algorithms::prediction::predict_values;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::stats::SummaryStats;

// ============================================================================
// Result Structure
// ============================================================================

/// Regression output containing the fitted line and its quality metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionResult<T> {
    /// Predictor values, in input order.
    pub x: Vec<T>,

    /// Summary of the predictor column.
    pub x_stats: SummaryStats<T>,

    /// Summary of the target column.
    pub y_stats: SummaryStats<T>,

    /// Fitted intercept and slope.
    pub coefficients: Coefficients<T>,

    /// RMSE of the fitted values against the training targets.
    pub rmse: T,

    /// Fitted values `ŷ_i` at each input point.
    pub fitted: Option<Vec<T>>,

    /// Residuals from the fit (y_i - ŷ_i).
    pub residuals: Option<Vec<T>>,

    /// Diagnostic metrics (RMSE, MAE, R^2, residual SD).
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float> RegressionResult<T> {
    /// Predict values at new predictor values.
    pub fn predict(&self, x: &[T]) -> Vec<T> {
        predict_values(&self.coefficients, x)
    }

    /// Check if diagnostics were computed.
    pub fn has_diagnostics(&self) -> bool {
        self.diagnostics.is_some()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for RegressionResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.x.len())?;
        writeln!(f, "  x stats: {}", self.x_stats)?;
        writeln!(f, "  y stats: {}", self.y_stats)?;
        writeln!(f, "  Coefficients: {}", self.coefficients)?;
        writeln!(f, "  RMSE: {:.3}", self.rmse)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f)?;
            write!(f, "{}", diag)?;
        }

        let has_fitted = self.fitted.is_some();
        let has_resid = self.residuals.is_some();
        if !has_fitted && !has_resid {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "Fitted Data:")?;

        write!(f, "{:>8}", "X")?;
        if has_fitted {
            write!(f, " {:>12}", "Y_fitted")?;
        }
        if has_resid {
            write!(f, " {:>12}", "Residual")?;
        }
        writeln!(f)?;

        let line_width = 8 + if has_fitted { 13 } else { 0 } + if has_resid { 13 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.x.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(f, "{:>8.2}", self.x[idx])?;
            if let Some(fitted) = &self.fitted {
                write!(f, " {:>12.6}", fitted[idx])?;
            }
            if let Some(resid) = &self.residuals {
                write!(f, " {:>12.6}", resid[idx])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
