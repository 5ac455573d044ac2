//! Prediction from fitted coefficients.
//!
//! ## Purpose
//!
//! This module applies fitted coefficients to test rows and provides the
//! default train-then-predict regression algorithm.
//!
//! ## Invariants
//!
//! * Output length and order match the input rows.
//! * Target values of test rows are never read.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::coefficients::Coefficients;
use crate::primitives::dataset::{Dataset, Row};
use crate::primitives::errors::RegressionError;

/// Signature of a regression algorithm: train on a dataset, predict test rows.
pub type AlgorithmFn<T> = fn(&Dataset<T>, &[Row<T>]) -> Result<Vec<T>, RegressionError>;

/// Predict one value per test row.
pub fn predict<T: Float>(coefficients: &Coefficients<T>, test: &[Row<T>]) -> Vec<T> {
    test.iter().map(|row| coefficients.predict(row.x)).collect()
}

/// Predict one value per predictor value.
pub fn predict_values<T: Float>(coefficients: &Coefficients<T>, x: &[T]) -> Vec<T> {
    x.iter().map(|&xi| coefficients.predict(xi)).collect()
}

/// Fit a line on `train` and predict `test`.
pub fn simple_linear_regression<T: Float>(
    train: &Dataset<T>,
    test: &[Row<T>],
) -> Result<Vec<T>, RegressionError> {
    let coefficients = Coefficients::estimate(train)?;
    Ok(predict(&coefficients, test))
}
