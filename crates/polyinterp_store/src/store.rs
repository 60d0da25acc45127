//! Incremental point store with merge-on-proximity.
//!
//! [`PointStore`] keeps four index-aligned vectors (abscissae, ordinates,
//! merge counts, Newton coefficients) sorted by abscissa. Samples closer than
//! the merge threshold to an existing slot are folded into it as a running
//! arithmetic mean; all other samples open a new slot at their sorted
//! position.
//!
//! # Coefficient Staleness
//!
//! Coefficients are only valid after [`PointStore::interpolate`] has run
//! since the last [`PointStore::add`]. The store records whether that is the
//! case but does not refuse to evaluate stale coefficients: re-interpolating
//! is the caller's responsibility. Stale evaluation is logged at `warn`.
//!
//! # Known Limitation
//!
//! A merge moves the slot's abscissa to the new mean. With a threshold that
//! is large relative to the point spacing, rounding of that mean can land the
//! slot exactly on its neighbour. The store never reorders or re-merges slots
//! after a merge; [`PointStore::is_strictly_ordered`] reports whether ordering
//! still holds, and [`PointStore::interpolate`] fails with
//! `AbscissaeNotDistinct` on such a collision.

use crate::config::{ConfigError, StoreConfig};
use polyinterp_core::math::newton::{divided_differences, nested_evaluate, NewtonPolynomial};
use polyinterp_core::traits::Scalar;
use polyinterp_core::types::InterpolationError;
use tracing::{debug, trace, warn};

/// Outcome of [`PointStore::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// A new slot was opened at `index`.
    Inserted {
        /// Slot index of the new point
        index: usize,
    },
    /// The sample was merged into its left neighbour.
    MergedLeft {
        /// Slot index that absorbed the sample
        index: usize,
        /// Number of samples in the slot after the merge
        count: usize,
    },
    /// The sample was merged into its right neighbour.
    MergedRight {
        /// Slot index that absorbed the sample
        index: usize,
        /// Number of samples in the slot after the merge
        count: usize,
    },
}

impl Insertion {
    /// Slot index affected by the insertion.
    #[inline]
    pub fn index(&self) -> usize {
        match *self {
            Insertion::Inserted { index }
            | Insertion::MergedLeft { index, .. }
            | Insertion::MergedRight { index, .. } => index,
        }
    }

    /// True if the sample was folded into an existing slot.
    #[inline]
    pub fn is_merge(&self) -> bool {
        !matches!(self, Insertion::Inserted { .. })
    }
}

/// Sorted, deduplicated set of interpolation points.
///
/// # Type Parameters
///
/// * `T` - Working precision, `f32` or `f64`
///
/// # Concurrency
///
/// Single owner, no internal locking. [`PointStore::evaluate`] takes `&self`
/// and may run concurrently with other evaluations; mutation requires
/// `&mut self`. Use [`SharedPointStore`](crate::SharedPointStore) for a
/// lock-wrapped handle.
///
/// # Example
///
/// ```
/// use polyinterp_store::PointStore;
///
/// let mut store: PointStore<f64> = [(0.0, 0.0), (1.0, 1.0)].into_iter().collect();
/// store.interpolate().unwrap();
/// assert_eq!(store.evaluate(0.5).unwrap(), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct PointStore<T: Scalar> {
    /// Minimum abscissa separation; closer samples merge
    threshold: T,
    /// Slot abscissae, ascending
    abscissae: Vec<T>,
    /// Slot ordinates, index-aligned with `abscissae`
    ordinates: Vec<T>,
    /// Samples merged into each slot
    counts: Vec<usize>,
    /// Newton coefficients, valid only when `interpolated`
    coefficients: Vec<T>,
    interpolated: bool,
}

impl<T: Scalar> Default for PointStore<T> {
    fn default() -> Self {
        Self {
            threshold: T::zero(),
            abscissae: Vec::new(),
            ordinates: Vec::new(),
            counts: Vec::new(),
            coefficients: Vec::new(),
            interpolated: false,
        }
    }
}

impl<T: Scalar> PointStore<T> {
    /// Create an empty store with a zero merge threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`PointStore::set_threshold`].
    ///
    /// An invalid threshold is ignored exactly as by `set_threshold`.
    pub fn with_threshold(mut self, threshold: T) -> Self {
        self.set_threshold(threshold);
        self
    }

    /// Create an empty store from configuration.
    ///
    /// With `strict_threshold` an invalid configured threshold is returned as
    /// an error; otherwise it is logged and the store keeps threshold zero.
    pub fn from_config(config: &StoreConfig) -> Result<Self, ConfigError> {
        match config.validate() {
            Ok(()) => Ok(Self::new().with_threshold(T::from_f64_lossy(config.threshold))),
            Err(err) if config.strict_threshold => Err(err),
            Err(err) => {
                warn!(error = %err, "ignoring configured threshold");
                Ok(Self::new())
            }
        }
    }

    /// Returns the merge threshold.
    #[inline]
    pub fn threshold(&self) -> T {
        self.threshold
    }

    /// Set the merge threshold.
    ///
    /// Negative and NaN values are ignored and the previous threshold is
    /// kept; no error is reported. Use [`PointStore::try_set_threshold`] to
    /// have the rejection reported.
    pub fn set_threshold(&mut self, threshold: T) {
        if T::zero() <= threshold {
            self.threshold = threshold;
        } else {
            warn!(
                rejected = %threshold,
                kept = %self.threshold,
                "ignoring negative merge threshold"
            );
        }
    }

    /// Set the merge threshold, reporting invalid values.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::InvalidThreshold` - `threshold` is negative or
    ///   NaN; the previous threshold is kept.
    pub fn try_set_threshold(&mut self, threshold: T) -> Result<(), InterpolationError> {
        if T::zero() <= threshold {
            self.threshold = threshold;
            Ok(())
        } else {
            Err(InterpolationError::InvalidThreshold {
                value: threshold.to_f64_lossless(),
            })
        }
    }

    /// Add a sample, merging it into a neighbour within the threshold.
    ///
    /// 1. Find the first slot `i` with `abscissae[i] >= x`.
    /// 2. If `x - abscissae[i-1] <= threshold`, merge into slot `i-1`.
    /// 3. Otherwise, if `abscissae[i] - x <= threshold`, merge into slot `i`.
    /// 4. Otherwise open a new slot at `i`.
    ///
    /// A merge replaces the slot's abscissa and ordinate by the running mean
    /// over all samples it has absorbed. Coefficients become stale in every
    /// case.
    pub fn add(&mut self, x: T, y: T) -> Insertion {
        self.interpolated = false;

        let i = self.abscissae.iter().take_while(|&&xi| xi < x).count();

        if i > 0 && x - self.abscissae[i - 1] <= self.threshold {
            let count = self.merge_into(i - 1, x, y);
            debug!(index = i - 1, count, x = %x, "merged sample into left neighbour");
            return Insertion::MergedLeft {
                index: i - 1,
                count,
            };
        }

        if i < self.abscissae.len() && self.abscissae[i] - x <= self.threshold {
            let count = self.merge_into(i, x, y);
            debug!(index = i, count, x = %x, "merged sample into right neighbour");
            return Insertion::MergedRight { index: i, count };
        }

        // Reserve every vector before touching any, so the inserts below
        // cannot allocate and the four stay the same length.
        self.abscissae.reserve(1);
        self.ordinates.reserve(1);
        self.counts.reserve(1);
        self.coefficients.reserve(1);

        self.abscissae.insert(i, x);
        self.ordinates.insert(i, y);
        self.counts.insert(i, 1);
        self.coefficients.insert(i, T::zero());

        debug!(index = i, size = self.abscissae.len(), x = %x, "inserted new point");
        Insertion::Inserted { index: i }
    }

    fn merge_into(&mut self, index: usize, x: T, y: T) -> usize {
        let n = self.counts[index];
        let weight = T::from_count(n);
        let total = T::from_count(n + 1);

        let merged_x = (x + self.abscissae[index] * weight) / total;
        let merged_y = (y + self.ordinates[index] * weight) / total;

        self.abscissae[index] = merged_x;
        self.ordinates[index] = merged_y;
        self.counts[index] = n + 1;
        n + 1
    }

    /// Compute Newton coefficients for the current points.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::EmptyInput` - No points have been added
    /// * `InterpolationError::AbscissaeNotDistinct` - Two stored abscissae
    ///   are exactly equal
    ///
    /// On error the coefficients are partially written and stay marked
    /// stale; do not evaluate until a later call succeeds.
    pub fn interpolate(&mut self) -> Result<(), InterpolationError> {
        match divided_differences(&self.abscissae, &self.ordinates, &mut self.coefficients) {
            Ok(()) => {
                self.interpolated = true;
                debug!(points = self.abscissae.len(), "computed Newton coefficients");
                Ok(())
            }
            Err(err) => {
                self.interpolated = false;
                warn!(error = %err, points = self.abscissae.len(), "coefficient generation failed");
                Err(err)
            }
        }
    }

    /// Evaluate the interpolating polynomial at `x`.
    ///
    /// An empty store returns `x` unchanged.
    ///
    /// # Errors
    ///
    /// Propagates errors from
    /// [`nested_evaluate`](polyinterp_core::math::newton::nested_evaluate);
    /// with the store's aligned vectors this does not occur in practice.
    pub fn evaluate(&self, x: T) -> Result<T, InterpolationError> {
        if self.abscissae.is_empty() {
            return Ok(x);
        }
        if !self.interpolated {
            warn!(
                points = self.abscissae.len(),
                "evaluating with stale coefficients; call interpolate() after add()"
            );
        }

        let y = nested_evaluate(x, &self.abscissae, &self.coefficients)?;
        trace!(x = %x, y = %y, "evaluated");
        Ok(y)
    }

    /// Evaluate at every point of `xs`, stopping at the first error.
    pub fn evaluate_many(&self, xs: &[T]) -> Result<Vec<T>, InterpolationError> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Snapshot the current polynomial as an immutable value.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::EmptyInput` - The store is empty
    /// * `InterpolationError::EmptyCoefficients` - Coefficients are stale
    pub fn polynomial(&self) -> Result<NewtonPolynomial<T>, InterpolationError> {
        if self.abscissae.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if !self.interpolated {
            return Err(InterpolationError::EmptyCoefficients);
        }
        NewtonPolynomial::from_parts(self.abscissae.clone(), self.coefficients.clone())
    }

    /// Number of stored (possibly merged) points.
    #[inline]
    pub fn size(&self) -> usize {
        self.counts.len()
    }

    /// True if no points are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Remove every point. The threshold is kept.
    pub fn clear(&mut self) {
        self.abscissae.clear();
        self.ordinates.clear();
        self.counts.clear();
        self.coefficients.clear();
        self.interpolated = false;
        debug!("cleared point store");
    }

    /// Slot abscissae.
    #[inline]
    pub fn abscissae(&self) -> &[T] {
        &self.abscissae
    }

    /// Slot ordinates.
    #[inline]
    pub fn ordinates(&self) -> &[T] {
        &self.ordinates
    }

    /// Number of samples merged into each slot.
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Newton coefficients; meaningful only if [`PointStore::is_interpolated`].
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// True if coefficients match the current points.
    #[inline]
    pub fn is_interpolated(&self) -> bool {
        self.interpolated
    }

    /// True if the abscissae are strictly increasing.
    ///
    /// Only a rounded merge under a large threshold can make this false.
    pub fn is_strictly_ordered(&self) -> bool {
        self.abscissae.windows(2).all(|w| w[0] < w[1])
    }
}

impl<T: Scalar> Extend<(T, T)> for PointStore<T> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        for (x, y) in iter {
            self.add(x, y);
        }
    }
}

impl<T: Scalar> FromIterator<(T, T)> for PointStore<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
