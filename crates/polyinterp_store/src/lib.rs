//! # polyinterp_store: Incremental Point Store for Newton Interpolation
//!
//! ## Layer 2 Role
//!
//! polyinterp_store accumulates `(x, y)` samples into a sorted set of
//! interpolation points and orchestrates the layer 1 kernels:
//! - [`PointStore`]: single-owner store with insert-or-merge policy
//! - [`SharedPointStore`]: cloneable handle behind one read-write lock
//! - [`StoreConfig`]: threshold configuration from TOML, environment or defaults
//! - [`StoreError`]: error type for the shared handle and configuration
//!
//! ## Usage Examples
//!
//! ```rust
//! use polyinterp_store::PointStore;
//!
//! let mut store = PointStore::<f64>::new();
//! store.set_threshold(0.2);
//! store.add(1.0, 10.0);
//! store.add(1.1, 20.0); // merges into the first slot
//! store.add(3.0, 0.0);
//!
//! store.interpolate().unwrap();
//! assert_eq!(store.size(), 2);
//! let y = store.evaluate(1.05).unwrap();
//! # assert!((y - 15.0).abs() < 1e-9);
//! ```
//!
//! ## Logging
//!
//! Events are emitted through `tracing`; installing a subscriber is left to
//! the caller.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod shared;
pub mod store;

pub use config::{ConfigError, StoreConfig};
pub use error::{Result, StoreError};
pub use shared::SharedPointStore;
pub use store::{Insertion, PointStore};
