//! Finiteness checks for numeric columns.
//!
//! ## Purpose
//!
//! NaN and infinities propagate silently through sums. This module rejects
//! them at the boundary of every operation that would otherwise return a
//! NaN coefficient or metric.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;

/// Fail on the first NaN or infinite entry of `values`.
///
/// The error message names the entry as `{column}[{index}]={value}`.
pub fn check_finite<T: Float>(column: &str, values: &[T]) -> Result<(), RegressionError> {
    match values.iter().position(|v| !v.is_finite()) {
        None => Ok(()),
        Some(i) => Err(RegressionError::InvalidNumericValue(format!(
            "{}[{}]={}",
            column,
            i,
            values[i].to_f64().unwrap_or(f64::NAN)
        ))),
    }
}
