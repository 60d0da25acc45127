//! Evaluation trait for built interpolants.

use crate::types::InterpolationError;
use num_traits::Float;

/// A built interpolant that can be evaluated at arbitrary query points.
///
/// Building (coefficient generation) is done by the implementing type's
/// constructor; this trait only covers evaluation.
///
/// # Example
///
/// ```
/// use polyinterp_core::math::newton::NewtonPolynomial;
/// use polyinterp_core::math::Interpolator;
///
/// let poly = NewtonPolynomial::new(&[0.0, 1.0], &[0.0, 2.0]).unwrap();
/// assert_eq!(poly.evaluate(0.5).unwrap(), 1.0);
/// assert_eq!(poly.domain(), (0.0, 1.0));
/// ```
pub trait Interpolator<T: Float> {
    /// Evaluates the interpolant at `x`.
    fn evaluate(&self, x: T) -> Result<T, InterpolationError>;

    /// Evaluates the interpolant at every point of `xs`, stopping at the first error.
    #[inline]
    fn evaluate_many(&self, xs: &[T]) -> Result<Vec<T>, InterpolationError> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Returns the `(min, max)` abscissa range spanned by the interpolation points.
    ///
    /// Evaluation outside this range is permitted (extrapolation is not
    /// flagged); the range is informational.
    fn domain(&self) -> (T, T);
}
