//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a fit by running statistics, estimation,
//! prediction and scoring in order, after validating the inputs.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pipeline execution engine.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for regression fits.
pub mod output;
