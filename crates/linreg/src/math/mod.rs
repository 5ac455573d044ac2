//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure summary statistics the estimator is built
//! from: mean, sum-of-squares variance, and covariance.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Mean, variance, and covariance.
pub mod stats;
