//! Input validation for regression configuration and data.
//!
//! ## Purpose
//!
//! This module checks input columns and builder state before the pipeline
//! runs, so the numeric code never sees data that would make it produce
//! NaN or infinities.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not detect zero spread in `x` (reported by the estimator).
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;
use crate::primitives::finite::check_finite;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for regression configuration and input data.
///
/// All methods return `Result<(), RegressionError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    /// Minimum number of points for a line fit.
    pub const MIN_POINTS: usize = 2;

    /// Validate paired input columns for fitting.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), RegressionError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(RegressionError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(RegressionError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: Sufficient points for a line
        if n < Self::MIN_POINTS {
            return Err(RegressionError::TooFewPoints {
                got: n,
                min: Self::MIN_POINTS,
            });
        }

        // Check 4: All values finite
        check_finite("x", x)?;
        check_finite("y", y)?;

        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RegressionError> {
        if let Some(param) = duplicate_param {
            return Err(RegressionError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
