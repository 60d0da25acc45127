//! Immutable Newton-form polynomial.

use super::{divided_differences, nested_evaluate};
use crate::math::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// A Newton-form interpolating polynomial.
///
/// Holds the abscissae and the matching divided-difference coefficients.
/// Unlike a mutable point store, a `NewtonPolynomial` can never hold stale
/// coefficients: it is built once and never modified, so it can be shared
/// freely between threads for read-only evaluation.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f32`, `f64`)
///
/// # Example
///
/// ```
/// use polyinterp_core::math::newton::NewtonPolynomial;
/// use polyinterp_core::math::Interpolator;
///
/// let xs: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 8.0, 27.0];
///
/// let poly = NewtonPolynomial::new(&xs, &ys).unwrap();
/// assert_eq!(poly.degree(), 3);
/// assert!((poly.evaluate(1.5).unwrap() - 3.375).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewtonPolynomial<T: Float> {
    /// Interpolation nodes, in the order the coefficients were built
    abscissae: Vec<T>,
    /// Divided-difference coefficients
    coefficients: Vec<T>,
}

impl<T: Float> NewtonPolynomial<T> {
    /// Build the interpolating polynomial through `(xs[i], ys[i])`.
    ///
    /// The nodes are used in the given order; they do not need to be sorted.
    ///
    /// # Returns
    ///
    /// * `Ok(NewtonPolynomial)` - Successfully built polynomial
    /// * `Err(InterpolationError::EmptyInput)` - No data points
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched array lengths
    /// * `Err(InterpolationError::AbscissaeNotDistinct)` - Repeated abscissa
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        let mut coefficients = vec![T::zero(); xs.len()];
        divided_differences(xs, ys, &mut coefficients)?;
        Ok(Self {
            abscissae: xs.to_vec(),
            coefficients,
        })
    }

    /// Assemble a polynomial from previously computed parts.
    ///
    /// `coefficients` must come from [`divided_differences`] over the same
    /// `abscissae`; only the lengths are checked.
    pub fn from_parts(abscissae: Vec<T>, coefficients: Vec<T>) -> Result<Self, InterpolationError> {
        if abscissae.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if coefficients.is_empty() {
            return Err(InterpolationError::EmptyCoefficients);
        }
        if abscissae.len() != coefficients.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "abscissae and coefficients must have same length: got {} and {}",
                abscissae.len(),
                coefficients.len()
            )));
        }
        Ok(Self {
            abscissae,
            coefficients,
        })
    }

    /// Returns the interpolation nodes.
    #[inline]
    pub fn abscissae(&self) -> &[T] {
        &self.abscissae
    }

    /// Returns the Newton coefficients.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Returns the number of interpolation nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.abscissae.len()
    }

    /// Always false for a successfully constructed polynomial.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.abscissae.is_empty()
    }

    /// Returns the formal degree, `len() - 1`.
    #[inline]
    pub fn degree(&self) -> usize {
        self.abscissae.len().saturating_sub(1)
    }
}

impl<T: Float> Interpolator<T> for NewtonPolynomial<T> {
    #[inline]
    fn evaluate(&self, x: T) -> Result<T, InterpolationError> {
        nested_evaluate(x, &self.abscissae, &self.coefficients)
    }

    fn domain(&self) -> (T, T) {
        self.abscissae
            .iter()
            .fold((T::infinity(), T::neg_infinity()), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_single_point() {
        let poly = NewtonPolynomial::new(&[1.0], &[3.0]).unwrap();
        assert_eq!(poly.len(), 1);
        assert_eq!(poly.degree(), 0);
        assert_eq!(poly.evaluate(100.0).unwrap(), 3.0);
    }

    #[test]
    fn test_new_empty() {
        let xs: [f64; 0] = [];
        let result = NewtonPolynomial::new(&xs, &xs);
        assert_eq!(result, Err(InterpolationError::EmptyInput));
    }

    #[test]
    fn test_new_duplicate_abscissae() {
        let result = NewtonPolynomial::new(&[0.0, 0.0], &[1.0, 2.0]);
        assert!(matches!(
            result,
            Err(InterpolationError::AbscissaeNotDistinct { .. })
        ));
    }

    #[test]
    fn test_from_parts_round_trip() {
        let poly = NewtonPolynomial::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        let rebuilt =
            NewtonPolynomial::from_parts(poly.abscissae().to_vec(), poly.coefficients().to_vec())
                .unwrap();
        assert_eq!(rebuilt, poly);
    }

    #[test]
    fn test_from_parts_validation() {
        assert_eq!(
            NewtonPolynomial::<f64>::from_parts(vec![], vec![]),
            Err(InterpolationError::EmptyInput)
        );
        assert_eq!(
            NewtonPolynomial::from_parts(vec![0.0], vec![]),
            Err(InterpolationError::EmptyCoefficients)
        );
        assert!(matches!(
            NewtonPolynomial::from_parts(vec![0.0, 1.0], vec![1.0]),
            Err(InterpolationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_domain_unsorted_nodes() {
        let poly = NewtonPolynomial::new(&[2.0, -1.0, 0.5], &[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(poly.domain(), (-1.0, 2.0));
    }

    #[test]
    fn test_evaluate_many() {
        let poly = NewtonPolynomial::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        let ys = poly.evaluate_many(&[0.5, 1.5, 3.0]).unwrap();
        assert_relative_eq!(ys[0], 0.25);
        assert_relative_eq!(ys[1], 2.25);
        assert_relative_eq!(ys[2], 9.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let poly = NewtonPolynomial::new(&[0.0, 1.0], &[1.0, 3.0]).unwrap();
        let json = serde_json::to_string(&poly).unwrap();
        let back: NewtonPolynomial<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, poly);
    }
}
