//! Scoring a regression algorithm against known targets.
//!
//! ## Purpose
//!
//! This module runs a regression algorithm on a test set whose targets are
//! withheld and scores its predictions against the true targets with RMSE.
//!
//! ## Key concepts
//!
//! * **Self-evaluation**: `evaluate_algorithm` uses the training set as its
//!   own test set, which measures fit rather than generalisation.
//! * **Held-out evaluation**: `evaluate_split` trains and tests on separate
//!   datasets.
//!
//! ## Invariants
//!
//! * The algorithm never sees the targets of the test rows.
//! * Non-finite test values are rejected before the algorithm runs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::prediction::AlgorithmFn;
use crate::evaluation::metrics::rmse_metric;
use crate::primitives::dataset::{Dataset, Row};
use crate::primitives::errors::RegressionError;
use crate::primitives::finite::check_finite;

/// Score `algorithm` using `dataset` as both training and test set.
pub fn evaluate_algorithm<T: Float>(
    dataset: &Dataset<T>,
    algorithm: AlgorithmFn<T>,
) -> Result<T, RegressionError> {
    evaluate_split(dataset, dataset, algorithm)
}

/// Train `algorithm` on `train` and score it on `test`.
pub fn evaluate_split<T: Float>(
    train: &Dataset<T>,
    test: &Dataset<T>,
    algorithm: AlgorithmFn<T>,
) -> Result<T, RegressionError> {
    check_finite("x", test.x())?;
    check_finite("y", test.y())?;

    let test_set: Vec<Row<T>> = test.without_targets();
    let predicted = algorithm(train, &test_set)?;

    if predicted.len() != test_set.len() {
        return Err(RegressionError::MismatchedInputs {
            x_len: test_set.len(),
            y_len: predicted.len(),
        });
    }

    let rmse = rmse_metric(test.y(), &predicted)?;
    log::debug!(
        "evaluated {} test rows against {} training rows: rmse={:?}",
        test.len(),
        train.len(),
        rmse.to_f64()
    );

    Ok(rmse)
}
