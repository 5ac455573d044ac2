//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer scores predictions against known targets:
//! - Error metrics (RMSE, MAE, R^2)
//! - Diagnostic bundles for fit quality
//! - Algorithm evaluation with withheld targets
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Diagnostic metrics for fit quality assessment.
pub mod diagnostics;

/// Algorithm evaluation with withheld targets.
pub mod evaluate;

/// Scalar error metrics.
pub mod metrics;
