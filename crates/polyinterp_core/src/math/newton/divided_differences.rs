//! Newton divided-difference coefficient generation.

use crate::types::InterpolationError;
use num_traits::Float;

/// Computes Newton divided-difference coefficients in place.
///
/// Writes `c` such that the Newton-form polynomial
///
/// ```text
/// P(t) = c[0] + c[1](t - x[0]) + c[2](t - x[0])(t - x[1]) + ...
/// ```
///
/// passes through every `(x[i], y[i])`. The abscissae need not be sorted.
///
/// The inner loop overwrites `c[k]` using the already-final `c[0..k)`, so the
/// iteration order (`k` ascending, then `i` ascending) is part of the numeric
/// contract and is identical for every precision. No extended-precision
/// accumulator is used.
///
/// # Arguments
///
/// * `x` - Abscissae, pairwise distinct
/// * `y` - Ordinates, same length as `x`
/// * `c` - Output coefficients, same length as `x`
///
/// # Errors
///
/// * `InterpolationError::EmptyInput` - `x` is empty
/// * `InterpolationError::InvalidInput` - `y` or `c` differ in length from `x`
/// * `InterpolationError::AbscissaeNotDistinct` - `x[i] - x[k] == 0` for some
///   `i < k` (exact comparison). `c` is left partially written.
///
/// # Example
///
/// ```
/// use polyinterp_core::math::newton::divided_differences;
///
/// let x = [0.0, 1.0, 2.0];
/// let y = [0.0, 1.0, 4.0];
/// let mut c = [0.0; 3];
///
/// divided_differences(&x, &y, &mut c).unwrap();
/// assert_eq!(c, [0.0, 1.0, 1.0]);
/// ```
pub fn divided_differences<T: Float>(x: &[T], y: &[T], c: &mut [T]) -> Result<(), InterpolationError> {
    let n = x.len();
    if n == 0 {
        return Err(InterpolationError::EmptyInput);
    }
    if y.len() != n || c.len() != n {
        return Err(InterpolationError::InvalidInput(format!(
            "x, y and c must have same length: got {}, {} and {}",
            n,
            y.len(),
            c.len()
        )));
    }

    c[0] = y[0];
    for k in 1..n {
        c[k] = y[k];
        for i in 0..k {
            let dif = x[i] - x[k];
            if dif == T::zero() {
                return Err(InterpolationError::AbscissaeNotDistinct {
                    first: i,
                    second: k,
                    x: x[k].to_f64().unwrap_or(f64::NAN),
                });
            }
            c[k] = (c[i] - c[k]) / dif;
        }
    }

    Ok(())
}

/// Computes Newton divided-difference coefficients into a fresh vector.
///
/// Allocating convenience wrapper around [`divided_differences`].
///
/// # Example
///
/// ```
/// use polyinterp_core::math::newton::newton_coefficients;
///
/// let c = newton_coefficients(&[2.0_f32, 4.0], &[5.0, 9.0]).unwrap();
/// assert_eq!(c, vec![5.0, 2.0]);
/// ```
pub fn newton_coefficients<T: Float>(x: &[T], y: &[T]) -> Result<Vec<T>, InterpolationError> {
    let mut c = vec![T::zero(); x.len()];
    divided_differences(x, y, &mut c)?;
    Ok(c)
}
