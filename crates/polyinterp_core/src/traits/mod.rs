//! Numeric traits shared by the interpolation kernels and the point store.
//!
//! - [`Float`]: re-export of `num_traits::Float`, the bound used by the
//!   stateless kernels in [`crate::math::newton`]
//! - [`Scalar`]: the sealed precision trait used by stateful callers that
//!   need to turn merge counts and configuration values into the working type
//!
//! Precision is fixed at compile time. A caller commits to one `Scalar` for
//! the lifetime of a store; there is no implicit conversion between
//! single- and double-precision instances.

use std::fmt::{Debug, Display};

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use polyinterp_core::traits::Float;
///
/// fn midpoint<T: Float>(a: T, b: T) -> T {
///     (a + b) / (T::one() + T::one())
/// }
///
/// assert_eq!(midpoint(1.0_f64, 2.0), 1.5);
/// ```
pub use num_traits::Float;

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Working precision of an interpolation session.
///
/// Implemented for `f32` and `f64` only. The trait is sealed so that the
/// set of supported widths matches the two instantiations the kernels are
/// validated against.
///
/// # Examples
/// ```
/// use polyinterp_core::traits::Scalar;
///
/// fn weight<T: Scalar>(count: usize) -> T {
///     T::from_count(count)
/// }
///
/// assert_eq!(weight::<f32>(3), 3.0_f32);
/// assert_eq!(weight::<f64>(3), 3.0_f64);
/// ```
pub trait Scalar: Float + Debug + Display + Default + Send + Sync + 'static + sealed::Sealed {
    /// Converts a merge count into the working precision.
    fn from_count(n: usize) -> Self;

    /// Converts a configuration value into the working precision.
    ///
    /// Values outside the `f32` range saturate to infinity when `Self` is `f32`.
    fn from_f64_lossy(v: f64) -> Self;

    /// Widens the value to `f64` for diagnostics and error payloads.
    fn to_f64_lossless(self) -> f64;
}

impl Scalar for f32 {
    #[inline]
    fn from_count(n: usize) -> Self {
        n as f32
    }

    #[inline]
    fn from_f64_lossy(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn to_f64_lossless(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_count(n: usize) -> Self {
        n as f64
    }

    #[inline]
    fn from_f64_lossy(v: f64) -> Self {
        v
    }

    #[inline]
    fn to_f64_lossless(self) -> f64 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_count_both_precisions() {
        assert_eq!(f32::from_count(0), 0.0);
        assert_eq!(f32::from_count(7), 7.0);
        assert_eq!(f64::from_count(1 << 20), 1_048_576.0);
    }

    #[test]
    fn test_from_f64_lossy_narrows_to_f32() {
        assert_eq!(f32::from_f64_lossy(0.25), 0.25_f32);
        assert!(f32::from_f64_lossy(1e300).is_infinite());
        assert_eq!(f64::from_f64_lossy(0.1), 0.1);
    }

    #[test]
    fn test_to_f64_lossless_round_trips() {
        assert_eq!(0.5_f32.to_f64_lossless(), 0.5);
        assert_eq!(f64::from_f64_lossy(2.5_f32.to_f64_lossless()), 2.5);
    }

    #[test]
    fn test_scalar_satisfies_float() {
        fn generic_sqrt<T: Scalar>(x: T) -> T {
            x.sqrt()
        }

        assert_eq!(generic_sqrt(4.0_f32), 2.0);
        assert_eq!(generic_sqrt(9.0_f64), 3.0);
    }
}
