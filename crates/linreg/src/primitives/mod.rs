//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures and error types used
//! throughout the crate. It has zero internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Paired observation containers.
pub mod dataset;

/// Shared error types.
pub mod errors;

/// Finiteness checks.
pub mod finite;
