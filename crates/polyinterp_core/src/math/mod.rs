//! Mathematical kernels for Newton-form polynomial interpolation.
//!
//! This module provides:
//! - Divided-difference coefficient generation (`newton::divided_differences`)
//! - Nested-multiplication evaluation (`newton::nested_evaluate`)
//! - The immutable [`NewtonPolynomial`](newton::NewtonPolynomial) value type
//! - The [`Interpolator`] trait for evaluating a built interpolant
//!
//! All kernels are generic over `T: num_traits::Float`, so the same operation
//! order is used for `f32` and `f64`.

pub mod newton;
mod traits;

pub use traits::Interpolator;
