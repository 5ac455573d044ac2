//! Layer 3: Algorithms
//!
//! This layer contains the least-squares estimator and the predictor.

/// Ordinary least squares coefficient estimation.
pub mod coefficients;

/// Prediction from fitted coefficients.
pub mod prediction;
