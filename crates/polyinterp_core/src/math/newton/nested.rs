//! Nested-multiplication evaluation of Newton-form polynomials.

use crate::types::InterpolationError;
use num_traits::Float;

/// Evaluates a Newton-form polynomial at `xx`.
///
/// `c` must be the output of
/// [`divided_differences`](super::divided_differences) on the same `x`;
/// that pairing is the caller's obligation and is not checked.
///
/// The running product `(xx - x[0])...(xx - x[k-1])` is carried forward and
/// each term is added left to right, which is algebraically
///
/// ```text
/// P(xx) = c[0] + (xx - x[0]) [c[1] + (xx - x[1]) [c[2] + ...]]
/// ```
///
/// in O(n) time and O(1) extra space.
///
/// # Errors
///
/// * `InterpolationError::EmptyInput` - `x` is empty
/// * `InterpolationError::EmptyCoefficients` - `x` is non-empty but `c` is empty
/// * `InterpolationError::InvalidInput` - `c` and `x` differ in length
///
/// # Example
///
/// ```
/// use polyinterp_core::math::newton::nested_evaluate;
///
/// // P(t) = 0 + 1*t + 1*t(t - 1) = t^2
/// let y = nested_evaluate(1.5, &[0.0, 1.0, 2.0], &[0.0, 1.0, 1.0]).unwrap();
/// assert_eq!(y, 2.25);
/// ```
pub fn nested_evaluate<T: Float>(xx: T, x: &[T], c: &[T]) -> Result<T, InterpolationError> {
    let n = x.len();
    if n == 0 {
        return Err(InterpolationError::EmptyInput);
    }
    if c.is_empty() {
        return Err(InterpolationError::EmptyCoefficients);
    }
    if c.len() != n {
        return Err(InterpolationError::InvalidInput(format!(
            "x and c must have same length: got {} and {}",
            n,
            c.len()
        )));
    }

    let mut pione = T::one();
    let mut pone = c[0];
    if n == 1 {
        return Ok(pone);
    }

    let mut result = pone;
    for k in 1..n {
        let pitwo = (xx - x[k - 1]) * pione;
        pione = pitwo;
        result = pone + pitwo * c[k];
        pone = result;
    }

    Ok(result)
}
