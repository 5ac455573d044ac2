//! # linreg: Simple Linear Regression for Rust
//!
//! Ordinary least squares regression with a single predictor: estimate the
//! intercept and slope of `y = b0 + b1 * x` from paired observations,
//! predict new values, and score the fit with RMSE.
//!
//! ## How it works
//!
//! The fit is a short, strictly linear pipeline:
//!
//! 1. **Statistics**: mean of each column, the sum of squared deviations of
//!    `x` (called *variance* here; it is not divided by `n`), and the sum of
//!    cross deviations (*covariance*).
//! 2. **Coefficients**: `b1 = covariance / variance`, `b0 = mean_y - b1 * mean_x`.
//! 3. **Prediction**: `ŷ = b0 + b1 * x` for each test row.
//! 4. **Evaluation**: RMSE between predictions and the true targets.
//!
//! ## Quick Start
//!
//! ```rust
//! use linreg::prelude::*;
//!
//! let x: Vec<f64> = vec![1.0, 2.0, 4.0, 3.0, 5.0];
//! let y = vec![1.0, 3.0, 3.0, 2.0, 5.0];
//!
//! let model = LinearRegression::new().return_diagnostics().build()?;
//! let result = model.fit(&x, &y)?;
//!
//! assert!((result.coefficients.slope - 0.8).abs() < 1e-12);
//! assert!((result.rmse - 0.693).abs() < 1e-3);
//!
//! println!("{}", result);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 5
//!   x stats: mean=3.000 variance=10.000
//!   y stats: mean=2.800 variance=8.800
//!   Coefficients: B0=0.400, B1=0.800
//!   RMSE: 0.693
//!
//! Regression Diagnostics:
//!   RMSE:         0.692820
//!   MAE:          0.640000
//!   R²:           0.727273
//!   Residual SD:  0.894427
//! ```
//!
//! ### Evaluating an algorithm
//!
//! [`evaluate_algorithm`](prelude::evaluate_algorithm) withholds the targets of every
//! row, runs a regression algorithm, and scores it:
//!
//! ```rust
//! use linreg::prelude::*;
//!
//! let dataset = Dataset::from_rows(&[[1.0, 1.0], [2.0, 3.0], [4.0, 3.0], [3.0, 2.0], [5.0, 5.0]]);
//! let rmse: f64 = evaluate_algorithm(&dataset, simple_linear_regression)?;
//!
//! assert!((rmse - 0.693).abs() < 1e-3);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Degenerate inputs are reported as [`RegressionError`](prelude::RegressionError)
//! values instead of NaN:
//!
//! ```rust
//! use linreg::prelude::*;
//!
//! let model = LinearRegression::new().build()?;
//!
//! match model.fit(&[2.0, 2.0], &[1.0, 3.0]) {
//!     Err(RegressionError::ZeroVariance) => {}
//!     other => panic!("expected ZeroVariance, got {:?}", other),
//! }
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ## Logging
//!
//! Pipeline stages emit [`log`] records at `debug` and `trace` level. Nothing
//! is printed unless the application installs a logger.
//!
//! ## no_std
//!
//! Disable default features for `no_std + alloc` environments:
//!
//! ```toml
//! [dependencies]
//! linreg = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and error types.
mod primitives;

// Layer 2: Math - summary statistics.
mod math;

// Layer 3: Algorithms - estimation and prediction.
mod algorithms;

// Layer 4: Evaluation - metrics and algorithm scoring.
mod evaluation;

// Layer 5: Engine - validation and orchestration.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        simple_linear_regression, AlgorithmFn, Coefficients, Dataset, Diagnostics, LinearModel,
        LinearRegressionBuilder as LinearRegression, RegressionError, RegressionResult, Row,
        SummaryStats,
    };
    pub use crate::evaluation::evaluate::{evaluate_algorithm, evaluate_split};
    pub use crate::evaluation::metrics::{mae_metric, r_squared_metric, rmse_metric};
    pub use crate::math::stats::{covariance, mean, variance};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
