//! Period module - finite unions of intervals in canonical form

use crate::algebra::union_all;
use crate::interval::Interval;

/// The totally ordered instant domain used by time periods
///
/// Instants are naive calendar timestamps: the caller decides what clock
/// and zone they came from before they enter the core.
pub type Instant = chrono::NaiveDateTime;

/// A period over instants, the instantiation every higher layer consumes
pub type TimePeriod = Period<Instant>;

/// A set of moments, stored as a canonical sequence of intervals
///
/// The canonical form is the invariant every public operation restores:
/// either the sequence is exactly `[Empty]` (the empty period), or it holds
/// pairwise-separated non-empty intervals sorted by the canonical interval
/// order. Two periods denote the same set exactly when they compare equal.
///
/// Intervals are immutable values; a period is the mutable container that
/// combines them. Mutation goes through the listed operations only, which
/// is what keeps the invariant unobservable in a broken state.
///
/// # Examples
///
/// ```
/// use pepys_domain::{Interval, Period};
///
/// let mut period = Period::empty();
/// period.add_interval(Interval::bounded(0, true, 5, false).unwrap());
/// period.add_interval(Interval::bounded(10, true, 12, true).unwrap());
/// assert_eq!(period.as_intervals().len(), 2);
///
/// period.complement();
/// period.complement();
/// assert_eq!(period.as_intervals().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period<T: Ord> {
    intervals: Vec<Interval<T>>,
}

impl<T: Ord + Clone> Period<T> {
    /// Create the empty period
    pub fn empty() -> Self {
        Self {
            intervals: vec![Interval::Empty],
        }
    }

    /// Create the period covering the whole domain
    pub fn full() -> Self {
        Self {
            intervals: vec![Interval::Full],
        }
    }

    /// Create a period holding a single interval
    pub fn from_interval(interval: Interval<T>) -> Self {
        if interval.is_empty() {
            Self::empty()
        } else {
            Self {
                intervals: vec![interval],
            }
        }
    }

    /// Create a period from arbitrarily many intervals, canonicalizing
    pub(crate) fn from_intervals<I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = Interval<T>>,
    {
        Self {
            intervals: union_all(intervals),
        }
    }

    /// Whether this period denotes the empty set
    pub fn is_empty(&self) -> bool {
        match self.intervals.as_slice() {
            [] => true,
            [only] => only.is_empty(),
            _ => false,
        }
    }

    /// Whether this period covers the whole domain
    pub fn is_full(&self) -> bool {
        matches!(self.intervals.as_slice(), [only] if only.is_full())
    }

    /// Add a single interval
    ///
    /// A no-op when the interval is empty or the period is already full.
    pub fn add_interval(&mut self, interval: Interval<T>) {
        if interval.is_empty() || self.is_full() {
            return;
        }
        let mut items = std::mem::take(&mut self.intervals);
        items.push(interval);
        self.intervals = union_all(items);
    }

    /// Add every moment of another period
    pub fn add(&mut self, other: &Period<T>) {
        if other.is_empty() || self.is_full() {
            return;
        }
        let mut items = std::mem::take(&mut self.intervals);
        items.extend(other.intervals.iter().cloned());
        self.intervals = union_all(items);
    }

    /// Keep only the moments shared with another period
    ///
    /// Every pair of elements intersects; the non-empty pieces are then
    /// re-canonicalized. Two non-empty operands with no overlap leave the
    /// canonical empty period.
    pub fn intersect(&mut self, other: &Period<T>) {
        let mut pieces = Vec::new();
        for a in &self.intervals {
            for b in &other.intervals {
                let piece = a.intersect(b);
                if !piece.is_empty() {
                    pieces.push(piece);
                }
            }
        }
        self.intervals = union_all(pieces);
    }

    /// Remove every moment of another period
    ///
    /// Subtracting a union distributes as the intersection of the
    /// differences, so each element folds through the subtrahends one at a
    /// time, splitting where holes appear.
    pub fn subtract(&mut self, other: &Period<T>) {
        if self.is_empty() || other.is_empty() {
            return;
        }
        let mut result = Vec::new();
        for element in &self.intervals {
            let mut remaining = vec![element.clone()];
            for subtrahend in &other.intervals {
                let mut next = Vec::new();
                for part in &remaining {
                    next.extend(part.difference(subtrahend));
                }
                remaining = next;
                if remaining.is_empty() {
                    break;
                }
            }
            result.extend(remaining);
        }
        self.intervals = union_all(result);
    }

    /// Replace this period with every moment it did not cover
    pub fn complement(&mut self) {
        let mut complemented = Period::full();
        complemented.subtract(self);
        *self = complemented;
    }

    /// The elements of this period, sorted by the canonical interval order
    ///
    /// The empty period yields the one-element list `[Empty]`.
    pub fn as_intervals(&self) -> Vec<Interval<T>> {
        self.intervals.clone()
    }

    /// The smallest single interval containing every element
    ///
    /// `Empty` for the empty period, `Full` for the full one.
    pub fn containing_interval(&self) -> Interval<T> {
        self.intervals
            .iter()
            .fold(Interval::Empty, |hull, element| hull.hull(element))
    }
}

impl<T: Ord + Clone> Default for Period<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Ord + Clone> From<Interval<T>> for Period<T> {
    fn from(interval: Interval<T>) -> Self {
        Self::from_interval(interval)
    }
}
