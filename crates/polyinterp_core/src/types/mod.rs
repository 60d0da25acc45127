//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for coefficient generation, evaluation and
//!   threshold configuration
//!
//! # Re-exports
//!
//! For convenience, [`InterpolationError`] is re-exported at this module level.

pub mod error;

pub use error::InterpolationError;
