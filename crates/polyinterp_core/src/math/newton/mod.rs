//! Newton divided-difference interpolation.
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial):
//!
//! - [`divided_differences`]: in-place coefficient generation, O(n²)
//! - [`newton_coefficients`]: allocating wrapper
//! - [`nested_evaluate`]: nested-multiplication evaluation, O(n)
//! - [`NewtonPolynomial`]: immutable pairing of nodes and coefficients
//!
//! Both kernels follow the SLATEC `POLINT` / `POLYVL` operation order exactly,
//! for every floating-point width.

mod divided_differences;
mod nested;
mod polynomial;

pub use divided_differences::{divided_differences, newton_coefficients};
pub use nested::nested_evaluate;
pub use polynomial::NewtonPolynomial;
