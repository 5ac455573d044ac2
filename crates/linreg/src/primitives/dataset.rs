//! Paired observation containers.
//!
//! ## Purpose
//!
//! This module provides the `Dataset` type holding paired `(x, y)`
//! observations and the `Row` type used as input to prediction.
//!
//! ## Design notes
//!
//! * **Columnar**: Observations are stored as two parallel columns so that
//!   statistics can borrow each column as a slice.
//! * **Immutable**: A dataset is never modified after construction; derived
//!   test sets are fresh copies.
//! * **Generics**: All containers are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Withheld targets**: A `Row` with `y == None` carries an unknown target.
//!   Prediction never reads `y`, so withholding is purely illustrative.
//!
//! ## Invariants
//!
//! * Both columns of a `Dataset` have the same length.
//! * Row order is preserved by every conversion.
//!
//! ## Non-goals
//!
//! * This module does not check values for finiteness (handled by `finite`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;

// ============================================================================
// Row
// ============================================================================

/// A single test row: the predictor value and an optional known target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row<T> {
    /// Predictor value.
    pub x: T,

    /// Target value, or `None` when withheld.
    pub y: Option<T>,
}

impl<T: Float> Row<T> {
    /// Create a row with a known target.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y: Some(y) }
    }

    /// Create a row whose target is unknown.
    pub fn unlabeled(x: T) -> Self {
        Self { x, y: None }
    }
}

// ============================================================================
// Dataset
// ============================================================================

/// Ordered sequence of `(x, y)` observations.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<T> {
    x: Vec<T>,
    y: Vec<T>,
}

impl<T: Float> Dataset<T> {
    /// Build a dataset from two columns of equal length.
    pub fn from_columns(x: Vec<T>, y: Vec<T>) -> Result<Self, RegressionError> {
        if x.len() != y.len() {
            return Err(RegressionError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// Build a dataset from `(x, y)` tuples.
    pub fn from_pairs(pairs: &[(T, T)]) -> Self {
        let (x, y) = pairs.iter().copied().unzip();
        Self { x, y }
    }

    /// Build a dataset from `[x, y]` rows.
    pub fn from_rows(rows: &[[T; 2]]) -> Self {
        let (x, y) = rows.iter().map(|&[x, y]| (x, y)).unzip();
        Self { x, y }
    }

    /// Predictor column.
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// Target column.
    pub fn y(&self) -> &[T] {
        &self.y
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the dataset holds no observations.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Rows with their targets attached.
    pub fn rows(&self) -> Vec<Row<T>> {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| Row::new(x, y))
            .collect()
    }

    /// Copy of the rows with every target replaced by the unknown sentinel.
    pub fn without_targets(&self) -> Vec<Row<T>> {
        self.x.iter().map(|&x| Row::unlabeled(x)).collect()
    }
}
