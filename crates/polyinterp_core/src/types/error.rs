//! Error types for interpolation operations.
//!
//! - `InterpolationError`: Errors from coefficient generation, evaluation and
//!   threshold configuration

use thiserror::Error;

/// Interpolation errors.
///
/// Provides structured error handling for the divided-difference builder,
/// the nested evaluator and the point store that orchestrates them.
///
/// # Variants
/// - `EmptyInput`: Builder or evaluator invoked with zero points
/// - `AbscissaeNotDistinct`: Two abscissae compare exactly equal
/// - `EmptyCoefficients`: No usable coefficients for a non-empty point set
/// - `InvalidThreshold`: Negative or NaN merge threshold
/// - `InvalidInput`: Mismatched slice lengths
///
/// # Examples
/// ```
/// use polyinterp_core::types::InterpolationError;
///
/// let err = InterpolationError::AbscissaeNotDistinct { first: 0, second: 2, x: 1.5 };
/// assert!(format!("{}", err).contains("not distinct"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// No interpolation points were supplied.
    #[error("Empty input: at least one interpolation point is required")]
    EmptyInput,

    /// Two abscissae are bit-exactly equal.
    #[error("Abscissae not distinct: x[{first}] == x[{second}] == {x}")]
    AbscissaeNotDistinct {
        /// Index of the earlier abscissa
        first: usize,
        /// Index of the later abscissa
        second: usize,
        /// The shared abscissa value
        x: f64,
    },

    /// Evaluation requested without coefficients for the stored points.
    #[error("Empty coefficients: interpolate() has not produced coefficients for the current points")]
    EmptyCoefficients,

    /// Merge threshold is negative or NaN.
    #[error("Invalid threshold {value}: must be non-negative")]
    InvalidThreshold {
        /// The rejected threshold
        value: f64,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_display() {
        let err = InterpolationError::EmptyInput;
        assert_eq!(
            format!("{}", err),
            "Empty input: at least one interpolation point is required"
        );
    }

    #[test]
    fn test_abscissae_not_distinct_display() {
        let err = InterpolationError::AbscissaeNotDistinct {
            first: 1,
            second: 3,
            x: 2.0,
        };
        assert_eq!(
            format!("{}", err),
            "Abscissae not distinct: x[1] == x[3] == 2"
        );
    }

    #[test]
    fn test_empty_coefficients_display() {
        let err = InterpolationError::EmptyCoefficients;
        assert!(format!("{}", err).contains("interpolate()"));
    }

    #[test]
    fn test_invalid_threshold_display() {
        let err = InterpolationError::InvalidThreshold { value: -0.5 };
        assert_eq!(
            format!("{}", err),
            "Invalid threshold -0.5: must be non-negative"
        );
    }

    #[test]
    fn test_invalid_input_display() {
        let err = InterpolationError::InvalidInput("xs and ys differ".to_string());
        assert_eq!(format!("{}", err), "Invalid input: xs and ys differ");
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&InterpolationError::EmptyInput);
    }

    #[test]
    fn test_error_clone_and_eq() {
        let err = InterpolationError::AbscissaeNotDistinct {
            first: 0,
            second: 1,
            x: 0.0,
        };
        assert_eq!(err.clone(), err);
        assert_ne!(err, InterpolationError::EmptyInput);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_error_serde_roundtrip() {
        let err = InterpolationError::InvalidThreshold { value: -1.0 };
        let json = serde_json::to_string(&err).unwrap();
        let back: InterpolationError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
