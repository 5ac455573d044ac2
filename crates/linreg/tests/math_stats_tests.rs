#![cfg(feature = "dev")]
//! Tests for summary statistics.
//!
//! These tests verify the statistics the estimator is built from:
//! - Arithmetic mean
//! - Sum-of-squares variance (not normalised by count)
//! - Covariance of paired columns
//!
//! ## Test Organization
//!
//! 1. **Mean** - Typical values and empty input
//! 2. **Variance** - Sum of squared deviations
//! 3. **Covariance** - Paired deviations and length mismatch
//! 4. **Summary** - Combined column summary and formatting

use approx::assert_relative_eq;

use linreg::internals::math::stats::{covariance, mean, variance, SummaryStats};
use linreg::internals::primitives::errors::RegressionError;

const X: [f64; 5] = [1.0, 2.0, 4.0, 3.0, 5.0];
const Y: [f64; 5] = [1.0, 3.0, 3.0, 2.0, 5.0];

// ============================================================================
// Mean Tests
// ============================================================================

/// Test mean of the reference predictor column.
#[test]
fn test_mean_typical() {
    assert_eq!(mean(&X).unwrap(), 3.0);
    assert_relative_eq!(mean(&Y).unwrap(), 2.8, epsilon = 1e-12);
}

/// Test mean of a single value.
#[test]
fn test_mean_single() {
    assert_eq!(mean(&[7.5f64]).unwrap(), 7.5);
}

/// Test mean works with f32.
#[test]
fn test_mean_f32() {
    let values = [1.0f32, 2.0, 3.0];
    assert_relative_eq!(mean(&values).unwrap(), 2.0f32, epsilon = 1e-6);
}

/// Test mean of an empty sequence fails instead of returning NaN.
#[test]
fn test_mean_empty() {
    let empty: [f64; 0] = [];
    assert_eq!(mean(&empty), Err(RegressionError::EmptyInput));
}

// ============================================================================
// Variance Tests
// ============================================================================

/// Test variance is the sum of squared deviations.
///
/// Deviations from 3: [-2, -1, 1, 0, 2] => 4 + 1 + 1 + 0 + 4 = 10.
#[test]
fn test_variance_sum_of_squares() {
    assert_eq!(variance(&X, 3.0).unwrap(), 10.0);
}

/// Test variance of the reference target column.
#[test]
fn test_variance_targets() {
    let m = mean(&Y).unwrap();
    assert_relative_eq!(variance(&Y, m).unwrap(), 8.8, epsilon = 1e-12);
}

/// Test variance uses the supplied mean rather than recomputing it.
#[test]
fn test_variance_uses_supplied_mean() {
    // Deviations from 0: squares are 1 + 4 + 16 + 9 + 25 = 55
    assert_eq!(variance(&X, 0.0).unwrap(), 55.0);
}

/// Test variance of constant values is zero.
#[test]
fn test_variance_constant() {
    let values = [4.0f64; 6];
    assert_eq!(variance(&values, 4.0).unwrap(), 0.0);
}

/// Test variance of an empty sequence fails.
#[test]
fn test_variance_empty() {
    let empty: [f64; 0] = [];
    assert_eq!(variance(&empty, 0.0), Err(RegressionError::EmptyInput));
}

// ============================================================================
// Covariance Tests
// ============================================================================

/// Test covariance of the reference dataset.
///
/// x deviations: [-2, -1, 1, 0, 2]
/// y deviations: [-1.8, 0.2, 0.2, -0.8, 2.2]
/// products:     [3.6, -0.2, 0.2, 0, 4.4] => 8.0
#[test]
fn test_covariance_typical() {
    let mx = mean(&X).unwrap();
    let my = mean(&Y).unwrap();
    assert_relative_eq!(covariance(&X, mx, &Y, my).unwrap(), 8.0, epsilon = 1e-12);
}

/// Test covariance of a column with itself equals its variance.
#[test]
fn test_covariance_self_is_variance() {
    let mx = mean(&X).unwrap();
    assert_relative_eq!(
        covariance(&X, mx, &X, mx).unwrap(),
        variance(&X, mx).unwrap(),
        epsilon = 1e-12
    );
}

/// Test covariance is negative for an inverse relationship.
#[test]
fn test_covariance_negative() {
    let xs = [1.0f64, 2.0, 3.0];
    let ys = [3.0f64, 2.0, 1.0];
    assert_relative_eq!(covariance(&xs, 2.0, &ys, 2.0).unwrap(), -2.0, epsilon = 1e-12);
}

/// Test covariance rejects columns of different length.
#[test]
fn test_covariance_mismatched() {
    let xs = [1.0f64, 2.0, 3.0];
    let ys = [1.0f64, 2.0];
    assert_eq!(
        covariance(&xs, 2.0, &ys, 1.5),
        Err(RegressionError::MismatchedInputs { x_len: 3, y_len: 2 })
    );
}

/// Test covariance of empty columns fails.
#[test]
fn test_covariance_empty() {
    let empty: [f64; 0] = [];
    assert_eq!(
        covariance(&empty, 0.0, &empty, 0.0),
        Err(RegressionError::EmptyInput)
    );
}

// ============================================================================
// Summary Tests
// ============================================================================

/// Test column summary combines mean and variance.
#[test]
fn test_summary_stats() {
    let stats = SummaryStats::of(&X).unwrap();
    assert_eq!(stats.mean, 3.0);
    assert_eq!(stats.variance, 10.0);
}

/// Test column summary formatting with three decimals.
#[test]
fn test_summary_stats_display() {
    let x_stats = SummaryStats::of(&X).unwrap();
    let y_stats = SummaryStats::of(&Y).unwrap();
    assert_eq!(format!("{}", x_stats), "mean=3.000 variance=10.000");
    assert_eq!(format!("{}", y_stats), "mean=2.800 variance=8.800");
}

/// Test column summary of an empty column fails.
#[test]
fn test_summary_stats_empty() {
    let empty: [f64; 0] = [];
    assert_eq!(SummaryStats::of(&empty), Err(RegressionError::EmptyInput));
}
