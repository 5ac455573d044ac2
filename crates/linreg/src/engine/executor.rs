//! Execution engine for the regression pipeline.
//!
//! ## Purpose
//!
//! This module runs the pipeline stages in their data-dependency order:
//! summary statistics, coefficient estimation, prediction on the training
//! rows, and the RMSE of those predictions.
//!
//! ## Design notes
//!
//! * Coefficients are estimated exactly once per run.
//! * Optional outputs are only materialised when the configuration asks for them.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * `fitted` has the same length and order as the input.
//! * Running twice on the same input produces identical output.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not format results (handled by `output`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::coefficients::{estimate_coefficients, Coefficients};
use crate::algorithms::prediction::predict_values;
use crate::evaluation::diagnostics::Diagnostics;
use crate::evaluation::metrics::rmse_metric;
use crate::math::stats::SummaryStats;
use crate::primitives::errors::RegressionError;

// ============================================================================
// Configuration
// ============================================================================

/// Which optional outputs a run should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegressionConfig {
    /// Keep the fitted values in the output.
    pub return_fitted: bool,

    /// Compute residuals `y_i - ŷ_i`.
    pub return_residuals: bool,

    /// Compute the diagnostics bundle.
    pub return_diagnostics: bool,
}

/// Output from a pipeline run.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Summary of the predictor column.
    pub x_stats: SummaryStats<T>,

    /// Summary of the target column.
    pub y_stats: SummaryStats<T>,

    /// Fitted coefficients.
    pub coefficients: Coefficients<T>,

    /// RMSE of the predictions on the training rows.
    pub rmse: T,

    /// Predictions on the training rows.
    pub fitted: Option<Vec<T>>,

    /// Residuals `y_i - ŷ_i`.
    pub residuals: Option<Vec<T>>,

    /// Diagnostic metrics.
    pub diagnostics: Option<Diagnostics<T>>,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the regression pipeline over validated columns.
pub struct RegressionExecutor;

impl RegressionExecutor {
    /// Run every stage of the pipeline on `x` and `y`.
    pub fn run_with_config<T: Float>(
        x: &[T],
        y: &[T],
        config: RegressionConfig,
    ) -> Result<ExecutorOutput<T>, RegressionError> {
        let x_stats = SummaryStats::of(x)?;
        let y_stats = SummaryStats::of(y)?;
        log::trace!(
            "summary: mean_x={:?} var_x={:?} mean_y={:?} var_y={:?}",
            x_stats.mean.to_f64(),
            x_stats.variance.to_f64(),
            y_stats.mean.to_f64(),
            y_stats.variance.to_f64()
        );

        let coefficients = estimate_coefficients(x, y)?;
        log::debug!(
            "estimated coefficients from {} points: b0={:?} b1={:?}",
            x.len(),
            coefficients.intercept.to_f64(),
            coefficients.slope.to_f64()
        );

        let fitted = predict_values(&coefficients, x);
        let rmse = rmse_metric(y, &fitted)?;
        log::debug!("training rmse={:?}", rmse.to_f64());

        let residuals = if config.return_residuals {
            Some(
                y.iter()
                    .zip(fitted.iter())
                    .map(|(&yi, &fi)| yi - fi)
                    .collect(),
            )
        } else {
            None
        };

        let diagnostics = if config.return_diagnostics {
            Some(Diagnostics::compute(y, &fitted)?)
        } else {
            None
        };

        Ok(ExecutorOutput {
            x_stats,
            y_stats,
            coefficients,
            rmse,
            fitted: config.return_fitted.then_some(fitted),
            residuals,
            diagnostics,
        })
    }
}
