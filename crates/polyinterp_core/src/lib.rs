//! # polyinterp_core: Numeric Foundation for Incremental Polynomial Interpolation
//!
//! ## Layer 1 (Foundation) Role
//!
//! polyinterp_core is the bottom layer of the workspace, providing:
//! - Newton divided-difference coefficient generation (`math::newton`)
//! - Nested-multiplication evaluation of Newton-form polynomials (`math::newton`)
//! - An immutable [`NewtonPolynomial`](math::newton::NewtonPolynomial) value type
//! - The [`Interpolator`](math::Interpolator) evaluation trait
//! - The sealed [`Scalar`](traits::Scalar) precision trait (`f32`, `f64`)
//! - Error types: `InterpolationError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other polyinterp_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use polyinterp_core::math::newton::{nested_evaluate, newton_coefficients};
//!
//! let xs = [0.0_f64, 1.0, 2.0];
//! let ys = [1.0_f64, 3.0, 7.0];
//!
//! let c = newton_coefficients(&xs, &ys).unwrap();
//! let y = nested_evaluate(1.5, &xs, &c).unwrap();
//! # assert!((y - 4.75).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `NewtonPolynomial` and `InterpolationError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
