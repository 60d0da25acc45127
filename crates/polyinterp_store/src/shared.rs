//! Lock-wrapped point store for multi-threaded callers.
//!
//! [`SharedPointStore`] puts the whole [`PointStore`] behind a single
//! `RwLock`, so the four slot vectors are always observed together.
//! Mutating operations take the write lock; evaluation and size queries take
//! the read lock and may run in parallel.

use crate::error::{Result, StoreError};
use crate::store::{Insertion, PointStore};
use polyinterp_core::math::newton::NewtonPolynomial;
use polyinterp_core::traits::Scalar;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable, thread-safe handle to a [`PointStore`].
///
/// Clones share the same underlying store.
///
/// # Example
///
/// ```
/// use polyinterp_store::SharedPointStore;
///
/// let store = SharedPointStore::<f64>::new();
/// store.add(0.0, 1.0).unwrap();
/// store.add(1.0, 3.0).unwrap();
/// store.interpolate().unwrap();
///
/// let reader = store.clone();
/// let y = std::thread::spawn(move || reader.evaluate(0.5).unwrap())
///     .join()
///     .unwrap();
/// assert_eq!(y, 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct SharedPointStore<T: Scalar> {
    inner: Arc<RwLock<PointStore<T>>>,
}

impl<T: Scalar> Default for SharedPointStore<T> {
    fn default() -> Self {
        Self::from_store(PointStore::new())
    }
}

impl<T: Scalar> SharedPointStore<T> {
    /// Create a handle to a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing store.
    pub fn from_store(store: PointStore<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    fn read(&self, op: &'static str) -> Result<RwLockReadGuard<'_, PointStore<T>>> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned(op))
    }

    fn write(&self, op: &'static str) -> Result<RwLockWriteGuard<'_, PointStore<T>>> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned(op))
    }

    /// See [`PointStore::set_threshold`].
    pub fn set_threshold(&self, threshold: T) -> Result<()> {
        self.write("set_threshold")?.set_threshold(threshold);
        Ok(())
    }

    /// See [`PointStore::try_set_threshold`].
    pub fn try_set_threshold(&self, threshold: T) -> Result<()> {
        self.write("try_set_threshold")?.try_set_threshold(threshold)?;
        Ok(())
    }

    /// See [`PointStore::threshold`].
    pub fn threshold(&self) -> Result<T> {
        Ok(self.read("threshold")?.threshold())
    }

    /// See [`PointStore::add`].
    pub fn add(&self, x: T, y: T) -> Result<Insertion> {
        Ok(self.write("add")?.add(x, y))
    }

    /// Add a sample and recompute coefficients under one write lock.
    ///
    /// Readers never observe the new point with stale coefficients. If
    /// interpolation fails the point is kept and the error is returned.
    pub fn add_and_interpolate(&self, x: T, y: T) -> Result<Insertion> {
        let mut store = self.write("add_and_interpolate")?;
        let outcome = store.add(x, y);
        store.interpolate()?;
        Ok(outcome)
    }

    /// See [`PointStore::interpolate`].
    pub fn interpolate(&self) -> Result<()> {
        self.write("interpolate")?.interpolate()?;
        Ok(())
    }

    /// See [`PointStore::evaluate`].
    pub fn evaluate(&self, x: T) -> Result<T> {
        Ok(self.read("evaluate")?.evaluate(x)?)
    }

    /// See [`PointStore::evaluate_many`].
    pub fn evaluate_many(&self, xs: &[T]) -> Result<Vec<T>> {
        Ok(self.read("evaluate_many")?.evaluate_many(xs)?)
    }

    /// See [`PointStore::polynomial`].
    pub fn polynomial(&self) -> Result<NewtonPolynomial<T>> {
        Ok(self.read("polynomial")?.polynomial()?)
    }

    /// See [`PointStore::size`].
    pub fn size(&self) -> Result<usize> {
        Ok(self.read("size")?.size())
    }

    /// See [`PointStore::clear`].
    pub fn clear(&self) -> Result<()> {
        self.write("clear")?.clear();
        Ok(())
    }

    /// Run `f` against a consistent read-only view of the store.
    pub fn with_store<R>(&self, f: impl FnOnce(&PointStore<T>) -> R) -> Result<R> {
        Ok(f(&*self.read("with_store")?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use polyinterp_core::types::InterpolationError;

    #[test]
    fn test_clones_share_state() {
        let a = SharedPointStore::<f64>::new();
        let b = a.clone();
        a.add(1.0, 2.0).unwrap();
        assert_eq!(b.size().unwrap(), 1);
    }

    #[test]
    fn test_empty_pass_through() {
        let store = SharedPointStore::<f32>::new();
        assert_eq!(store.evaluate(3.0).unwrap(), 3.0);
    }

    #[test]
    fn test_add_and_interpolate() {
        let store = SharedPointStore::<f64>::new();
        store.add_and_interpolate(0.0, 0.0).unwrap();
        store.add_and_interpolate(2.0, 4.0).unwrap();
        store.add_and_interpolate(1.0, 1.0).unwrap();
        assert_relative_eq!(store.evaluate(1.5).unwrap(), 2.25, epsilon = 1e-12);
        assert!(store.with_store(|s| s.is_interpolated()).unwrap());
    }

    #[test]
    fn test_errors_are_wrapped() {
        let store = SharedPointStore::<f64>::new();
        assert_eq!(
            store.interpolate(),
            Err(StoreError::Interpolation(InterpolationError::EmptyInput))
        );
        assert!(matches!(
            store.try_set_threshold(-1.0),
            Err(StoreError::Interpolation(InterpolationError::InvalidThreshold { .. }))
        ));
    }

    #[test]
    fn test_threshold_and_clear() {
        let store = SharedPointStore::<f64>::from_store(PointStore::new().with_threshold(0.2));
        store.add(1.0, 10.0).unwrap();
        store.add(1.1, 20.0).unwrap();
        assert_eq!(store.size().unwrap(), 1);

        store.set_threshold(-3.0).unwrap();
        assert_eq!(store.threshold().unwrap(), 0.2);

        store.clear().unwrap();
        assert_eq!(store.size().unwrap(), 0);
        assert_eq!(store.threshold().unwrap(), 0.2);
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let store = SharedPointStore::<f64>::new();
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("poison the store lock");
        })
        .join();

        assert_eq!(store.add(0.0, 0.0), Err(StoreError::LockPoisoned("add")));
        assert_eq!(store.size(), Err(StoreError::LockPoisoned("size")));
    }
}
