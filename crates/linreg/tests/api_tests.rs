//! Tests for the high-level fluent API.
//!
//! These tests exercise the public surface only:
//! - Builder configuration and duplicate detection
//! - Fitting from columns and datasets
//! - Result queries, prediction, and formatting
//!
//! ## Test Organization
//!
//! 1. **Builder** - Defaults, flags, duplicates
//! 2. **Fit** - Reference dataset, idempotence, invalid input
//! 3. **Result** - Prediction and display
//! 4. **Dataset** - Construction helpers

use approx::assert_relative_eq;

use linreg::prelude::*;

const X: [f64; 5] = [1.0, 2.0, 4.0, 3.0, 5.0];
const Y: [f64; 5] = [1.0, 3.0, 3.0, 2.0, 5.0];

// ============================================================================
// Builder Tests
// ============================================================================

/// Test the default builder produces only required outputs.
#[test]
fn test_builder_defaults() {
    let result = LinearRegression::new().build().unwrap().fit(&X, &Y).unwrap();

    assert!(result.fitted.is_none());
    assert!(result.residuals.is_none());
    assert!(!result.has_diagnostics());
}

/// Test every flag populates its output.
#[test]
fn test_builder_all_flags() {
    let model = LinearRegression::new()
        .return_fitted()
        .return_residuals()
        .return_diagnostics()
        .build()
        .unwrap();
    let result = model.fit(&X, &Y).unwrap();

    assert_eq!(result.fitted.as_ref().map(Vec::len), Some(5));
    assert_eq!(result.residuals.as_ref().map(Vec::len), Some(5));
    assert!(result.has_diagnostics());
}

/// Test setting a flag twice fails at build time.
#[test]
fn test_builder_duplicate_parameter() {
    let err = LinearRegression::new()
        .return_diagnostics()
        .return_diagnostics()
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        RegressionError::DuplicateParameter {
            parameter: "return_diagnostics"
        }
    );
}

// ============================================================================
// Fit Tests
// ============================================================================

/// Test the reference dataset end to end.
#[test]
fn test_fit_reference() {
    let result = LinearRegression::new().build().unwrap().fit(&X, &Y).unwrap();

    assert_eq!(result.x_stats.mean, 3.0);
    assert_eq!(result.x_stats.variance, 10.0);
    assert_relative_eq!(result.y_stats.mean, 2.8, epsilon = 1e-12);
    assert_relative_eq!(result.y_stats.variance, 8.8, epsilon = 1e-12);
    assert_relative_eq!(result.coefficients.slope, 0.8, epsilon = 1e-12);
    assert_relative_eq!(result.coefficients.intercept, 0.4, epsilon = 1e-12);
    assert_relative_eq!(result.rmse, 0.48f64.sqrt(), epsilon = 1e-12);
}

/// Test fitting a dataset matches fitting its columns.
#[test]
fn test_fit_dataset_matches_columns() {
    let model = LinearRegression::new().return_fitted().build().unwrap();
    let dataset = Dataset::from_columns(X.to_vec(), Y.to_vec()).unwrap();

    assert_eq!(
        model.fit_dataset(&dataset).unwrap(),
        model.fit(&X, &Y).unwrap()
    );
}

/// Test running the pipeline twice yields identical output.
#[test]
fn test_fit_idempotent() {
    let model = LinearRegression::new()
        .return_fitted()
        .return_residuals()
        .return_diagnostics()
        .build()
        .unwrap();

    let first = model.fit(&X, &Y).unwrap();
    let second = model.fit(&X, &Y).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

/// Test the model's self-evaluation agrees with the fit RMSE.
#[test]
fn test_evaluate_matches_fit_rmse() {
    let model = LinearRegression::new().build().unwrap();
    let dataset = Dataset::from_columns(X.to_vec(), Y.to_vec()).unwrap();

    let rmse = model.evaluate(&dataset).unwrap();
    assert_relative_eq!(rmse, model.fit(&X, &Y).unwrap().rmse, epsilon = 1e-15);
}

/// Test identical x-values fail with a zero-variance error.
#[test]
fn test_fit_zero_variance() {
    let model = LinearRegression::new().build().unwrap();
    assert_eq!(
        model.fit(&[2.0, 2.0], &[1.0, 3.0]).unwrap_err(),
        RegressionError::ZeroVariance
    );
}

/// Test invalid inputs are rejected before fitting.
#[test]
fn test_fit_invalid_inputs() {
    let model = LinearRegression::new().build().unwrap();

    assert_eq!(
        model.fit::<f64>(&[], &[]).unwrap_err(),
        RegressionError::EmptyInput
    );
    assert_eq!(
        model.fit(&[1.0, 2.0], &[1.0]).unwrap_err(),
        RegressionError::MismatchedInputs { x_len: 2, y_len: 1 }
    );
    assert!(matches!(
        model.fit(&[1.0, f64::NAN], &[1.0, 2.0]),
        Err(RegressionError::InvalidNumericValue(_))
    ));
}

/// Test fitting with f32.
#[test]
fn test_fit_f32() {
    let x: Vec<f32> = X.iter().map(|&v| v as f32).collect();
    let y: Vec<f32> = Y.iter().map(|&v| v as f32).collect();
    let result = LinearRegression::new().build().unwrap().fit(&x, &y).unwrap();

    assert_relative_eq!(result.coefficients.slope, 0.8f32, epsilon = 1e-5);
    assert_relative_eq!(result.rmse, 0.48f32.sqrt(), epsilon = 1e-5);
}

// ============================================================================
// Result Tests
// ============================================================================

/// Test prediction at new x-values.
#[test]
fn test_result_predict() {
    let result = LinearRegression::new().build().unwrap().fit(&X, &Y).unwrap();
    let predicted = result.predict(&[0.0, 6.0]);

    assert_relative_eq!(predicted[0], 0.4, epsilon = 1e-12);
    assert_relative_eq!(predicted[1], 5.2, epsilon = 1e-12);
}

/// Test the summary block formatting.
#[test]
fn test_result_display_summary() {
    let result = LinearRegression::new().build().unwrap().fit(&X, &Y).unwrap();
    let text = result.to_string();

    assert!(text.contains("  Data points: 5\n"));
    assert!(text.contains("  x stats: mean=3.000 variance=10.000\n"));
    assert!(text.contains("  y stats: mean=2.800 variance=8.800\n"));
    assert!(text.contains("  Coefficients: B0=0.400, B1=0.800\n"));
    assert!(text.contains("  RMSE: 0.693\n"));
    assert!(!text.contains("Fitted Data:"));
}

/// Test the per-point table is shown when fitted values are requested.
#[test]
fn test_result_display_table() {
    let result = LinearRegression::new()
        .return_fitted()
        .return_residuals()
        .build()
        .unwrap()
        .fit(&X, &Y)
        .unwrap();
    let text = result.to_string();

    assert!(text.contains("Fitted Data:"));
    assert!(text.contains("Y_fitted"));
    assert!(text.contains("Residual"));
    assert!(text.contains("    1.00     1.200000    -0.200000"));
}

/// Test long results are abbreviated.
#[test]
fn test_result_display_abbreviated() {
    let x: Vec<f64> = (0..30).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|&v| 2.0 * v + 1.0).collect();
    let result = LinearRegression::new()
        .return_fitted()
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let text = result.to_string();
    assert!(text.contains("     ..."));
    assert!(!text.contains("\n   15.00 "));
}

// ============================================================================
// Dataset Tests
// ============================================================================

/// Test dataset constructors agree.
#[test]
fn test_dataset_constructors() {
    let from_rows = Dataset::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    let from_pairs = Dataset::from_pairs(&[(1.0, 2.0), (3.0, 4.0)]);
    let from_columns = Dataset::from_columns(vec![1.0, 3.0], vec![2.0, 4.0]).unwrap();

    assert_eq!(from_rows, from_pairs);
    assert_eq!(from_rows, from_columns);
    assert_eq!(from_rows.len(), 2);
    assert!(!from_rows.is_empty());
}

/// Test column construction rejects mismatched lengths.
#[test]
fn test_dataset_from_columns_mismatched() {
    assert_eq!(
        Dataset::from_columns(vec![1.0, 2.0, 3.0], vec![1.0]),
        Err(RegressionError::MismatchedInputs { x_len: 3, y_len: 1 })
    );
}

/// Test withholding targets keeps predictor values and order.
#[test]
fn test_dataset_without_targets() {
    let dataset = Dataset::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);

    assert_eq!(dataset.rows(), vec![Row::new(1.0, 2.0), Row::new(3.0, 4.0)]);
    assert_eq!(
        dataset.without_targets(),
        vec![Row::unlabeled(1.0), Row::unlabeled(3.0)]
    );
}
