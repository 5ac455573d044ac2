//! High-level API for simple linear regression.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for choosing which optional outputs a fit produces, and a
//! model type that validates inputs and runs the execution engine.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder where every option defaults to off.
//! * **Validated**: Builder state is checked by `.build()`, data by `.fit()`.
//! * **Type-Safe**: Fitting is generic over `Float` types.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LinearRegressionBuilder`] via `LinearRegression::new()`.
//! 2. Chain configuration methods (`.return_diagnostics()`, etc.).
//! 3. Call `.build()` to get a [`LinearModel`], then `.fit(&x, &y)`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{RegressionConfig, RegressionExecutor};
use crate::engine::validator::Validator;
use crate::evaluation::evaluate::evaluate_algorithm;

// Publicly re-exported types
pub use crate::algorithms::coefficients::Coefficients;
pub use crate::algorithms::prediction::{simple_linear_regression, AlgorithmFn};
pub use crate::engine::output::RegressionResult;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::math::stats::SummaryStats;
pub use crate::primitives::dataset::{Dataset, Row};
pub use crate::primitives::errors::RegressionError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a linear regression fit.
#[derive(Debug, Clone, Default)]
pub struct LinearRegressionBuilder {
    /// Keep fitted values in the result.
    pub return_fitted: Option<bool>,

    /// Return residuals `y_i - ŷ_i`.
    pub return_residuals: Option<bool>,

    /// Compute fit diagnostics.
    pub return_diagnostics: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl LinearRegressionBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include fitted values in the result.
    pub fn return_fitted(mut self) -> Self {
        if self.return_fitted.is_some() {
            self.duplicate_param = Some("return_fitted");
        }
        self.return_fitted = Some(true);
        self
    }

    /// Include residuals in the result.
    pub fn return_residuals(mut self) -> Self {
        if self.return_residuals.is_some() {
            self.duplicate_param = Some("return_residuals");
        }
        self.return_residuals = Some(true);
        self
    }

    /// Include RMSE, MAE, R^2 and residual SD in the result.
    pub fn return_diagnostics(mut self) -> Self {
        if self.return_diagnostics.is_some() {
            self.duplicate_param = Some("return_diagnostics");
        }
        self.return_diagnostics = Some(true);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<LinearModel, RegressionError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(LinearModel {
            config: RegressionConfig {
                return_fitted: self.return_fitted.unwrap_or(false),
                return_residuals: self.return_residuals.unwrap_or(false),
                return_diagnostics: self.return_diagnostics.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// Configured simple linear regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearModel {
    config: RegressionConfig,
}

impl LinearModel {
    /// Fit a line through paired columns.
    pub fn fit<T: Float>(&self, x: &[T], y: &[T]) -> Result<RegressionResult<T>, RegressionError> {
        Validator::validate_inputs(x, y)?;

        let output = RegressionExecutor::run_with_config(x, y, self.config)?;

        Ok(RegressionResult {
            x: x.to_vec(),
            x_stats: output.x_stats,
            y_stats: output.y_stats,
            coefficients: output.coefficients,
            rmse: output.rmse,
            fitted: output.fitted,
            residuals: output.residuals,
            diagnostics: output.diagnostics,
        })
    }

    /// Fit a line through a dataset.
    pub fn fit_dataset<T: Float>(
        &self,
        dataset: &Dataset<T>,
    ) -> Result<RegressionResult<T>, RegressionError> {
        self.fit(dataset.x(), dataset.y())
    }

    /// RMSE of the default algorithm using `dataset` as its own test set.
    pub fn evaluate<T: Float>(&self, dataset: &Dataset<T>) -> Result<T, RegressionError> {
        Validator::validate_inputs(dataset.x(), dataset.y())?;
        evaluate_algorithm(dataset, simple_linear_regression)
    }
}
