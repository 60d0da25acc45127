//! Store error types.
//!
//! This module provides structured error handling for the shared store handle
//! and for configuration loading.

use crate::config::ConfigError;
use polyinterp_core::types::InterpolationError;
use thiserror::Error;

/// Point store operation errors.
///
/// # Variants
///
/// - `Interpolation`: Wrapped builder or evaluator error
/// - `Config`: Wrapped configuration error
/// - `LockPoisoned`: A thread panicked while holding the store lock
///
/// # Examples
///
/// ```
/// use polyinterp_store::StoreError;
/// use polyinterp_core::types::InterpolationError;
///
/// let err: StoreError = InterpolationError::EmptyInput.into();
/// assert!(format!("{}", err).contains("Empty input"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Interpolation error.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The store lock was poisoned by a panicking writer.
    #[error("Store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
