//! Interval module - immutable convex subsets of an ordered domain

use std::cmp::Ordering;
use std::fmt;

use crate::error::TemporalError;

/// An interval over a totally ordered domain `T`
///
/// Every interval is exactly one of five shapes: the empty set, the whole
/// domain, a half-line open to one side, or a bounded range. Values are
/// immutable once constructed and share freely.
///
/// `Empty` and `Full` are canonical: no `Bounded` or half-line value
/// denotes the empty set or the whole domain, because `bounded` rejects
/// degenerate endpoint pairs and half-lines always carry a finite endpoint.
///
/// # Examples
///
/// ```
/// use pepys_domain::Interval;
///
/// let iv = Interval::bounded(1, true, 5, false).unwrap();
/// assert!(iv.contains_point(&1));
/// assert!(!iv.contains_point(&5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Interval<T> {
    /// The empty set
    Empty,

    /// The whole domain `(-oo, +oo)`
    Full,

    /// `(-oo, hi]` when closed, `(-oo, hi)` when open
    LeftUnbounded {
        /// Finite upper endpoint
        hi: T,

        /// Whether `hi` itself belongs to the interval
        hi_closed: bool,
    },

    /// `[lo, +oo)` when closed, `(lo, +oo)` when open
    RightUnbounded {
        /// Finite lower endpoint
        lo: T,

        /// Whether `lo` itself belongs to the interval
        lo_closed: bool,
    },

    /// `[lo,hi]`, `[lo,hi)`, `(lo,hi]` or `(lo,hi)`
    Bounded {
        /// Finite lower endpoint
        lo: T,

        /// Whether `lo` itself belongs to the interval
        lo_closed: bool,

        /// Finite upper endpoint
        hi: T,

        /// Whether `hi` itself belongs to the interval
        hi_closed: bool,
    },
}

impl<T: Ord> Interval<T> {
    /// Create the empty interval
    pub fn empty() -> Self {
        Interval::Empty
    }

    /// Create the interval covering the whole domain
    pub fn full() -> Self {
        Interval::Full
    }

    /// Create `(-oo, hi]` or `(-oo, hi)`
    pub fn left_unbounded(hi: T, hi_closed: bool) -> Self {
        Interval::LeftUnbounded { hi, hi_closed }
    }

    /// Create `[lo, +oo)` or `(lo, +oo)`
    pub fn right_unbounded(lo: T, lo_closed: bool) -> Self {
        Interval::RightUnbounded { lo, lo_closed }
    }

    /// Create a bounded interval
    ///
    /// This is the only fallible constructor. The endpoints must satisfy
    /// `lo < hi`, or `lo == hi` with both ends closed (a singleton).
    ///
    /// # Errors
    ///
    /// Returns [`TemporalError::EmptyIntervalByConstruction`] for any other
    /// endpoint combination.
    ///
    /// # Examples
    ///
    /// ```
    /// use pepys_domain::Interval;
    ///
    /// assert!(Interval::bounded(1, true, 5, false).is_ok());
    /// assert!(Interval::bounded(1, true, 1, true).is_ok());
    /// assert!(Interval::bounded(5, true, 1, true).is_err());
    /// assert!(Interval::bounded(1, true, 1, false).is_err());
    /// ```
    pub fn bounded(lo: T, lo_closed: bool, hi: T, hi_closed: bool) -> Result<Self, TemporalError> {
        match lo.cmp(&hi) {
            Ordering::Less => Ok(Interval::Bounded {
                lo,
                lo_closed,
                hi,
                hi_closed,
            }),
            Ordering::Equal if lo_closed && hi_closed => Ok(Interval::Bounded {
                lo,
                lo_closed,
                hi,
                hi_closed,
            }),
            _ => Err(TemporalError::EmptyIntervalByConstruction),
        }
    }

    /// Create a bounded interval, substituting `Empty` for degenerate endpoints
    ///
    /// The set-theoretic operations are total; only the public `bounded`
    /// constructor reports degenerate endpoints as an error.
    pub(crate) fn bounded_or_empty(lo: T, lo_closed: bool, hi: T, hi_closed: bool) -> Self {
        Self::bounded(lo, lo_closed, hi, hi_closed).unwrap_or(Interval::Empty)
    }

    /// Create the compact singleton `[at, at]`
    pub fn singleton(at: T) -> Self
    where
        T: Clone,
    {
        Interval::Bounded {
            lo: at.clone(),
            lo_closed: true,
            hi: at,
            hi_closed: true,
        }
    }

    /// Whether this interval denotes the empty set
    pub fn is_empty(&self) -> bool {
        matches!(self, Interval::Empty)
    }

    /// Whether this interval covers the whole domain
    pub fn is_full(&self) -> bool {
        matches!(self, Interval::Full)
    }

    /// Whether this interval is compact: bounded with both endpoints included
    ///
    /// A singleton `[x, x]` is compact and non-empty.
    pub fn is_compact(&self) -> bool {
        matches!(
            self,
            Interval::Bounded {
                lo_closed: true,
                hi_closed: true,
                ..
            }
        )
    }

    /// Whether `value` belongs to the interval
    pub fn contains_point(&self, value: &T) -> bool {
        match self {
            Interval::Empty => false,
            Interval::Full => true,
            Interval::LeftUnbounded { hi, hi_closed } => {
                value < hi || (value == hi && *hi_closed)
            }
            Interval::RightUnbounded { lo, lo_closed } => {
                value > lo || (value == lo && *lo_closed)
            }
            Interval::Bounded {
                lo,
                lo_closed,
                hi,
                hi_closed,
            } => {
                (value > lo || (value == lo && *lo_closed))
                    && (value < hi || (value == hi && *hi_closed))
            }
        }
    }

    /// The finite lower endpoint, if any
    ///
    /// `None` stands for an unbounded left side. Meaningless for `Empty`
    /// and `Full`, which the algebra dispatches on before reading bounds.
    pub(crate) fn lower_bound(&self) -> Option<(&T, bool)> {
        match self {
            Interval::Empty | Interval::Full | Interval::LeftUnbounded { .. } => None,
            Interval::RightUnbounded { lo, lo_closed } => Some((lo, *lo_closed)),
            Interval::Bounded { lo, lo_closed, .. } => Some((lo, *lo_closed)),
        }
    }

    /// The finite upper endpoint, if any
    ///
    /// `None` stands for an unbounded right side.
    pub(crate) fn upper_bound(&self) -> Option<(&T, bool)> {
        match self {
            Interval::Empty | Interval::Full | Interval::RightUnbounded { .. } => None,
            Interval::LeftUnbounded { hi, hi_closed } => Some((hi, *hi_closed)),
            Interval::Bounded { hi, hi_closed, .. } => Some((hi, *hi_closed)),
        }
    }

    /// Rebuild an interval from optional bounds
    ///
    /// `None` on either side stands for the unbounded half-line; degenerate
    /// finite bounds collapse to `Empty`.
    pub(crate) fn from_bounds(lo: Option<(T, bool)>, hi: Option<(T, bool)>) -> Self {
        match (lo, hi) {
            (None, None) => Interval::Full,
            (None, Some((hi, hi_closed))) => Interval::LeftUnbounded { hi, hi_closed },
            (Some((lo, lo_closed)), None) => Interval::RightUnbounded { lo, lo_closed },
            (Some((lo, lo_closed)), Some((hi, hi_closed))) => {
                Interval::bounded_or_empty(lo, lo_closed, hi, hi_closed)
            }
        }
    }
}

/// Left endpoints under the canonical interval order: unbounded first, then
/// by value with the closed bound above the open one.
fn cmp_left<T: Ord>(a: Option<(&T, bool)>, b: Option<(&T, bool)>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some((av, ac)), Some((bv, bc))) => av.cmp(bv).then(ac.cmp(&bc)),
    }
}

/// Right endpoints under the canonical interval order: unbounded last, then
/// by value with the closed bound above the open one.
fn cmp_right<T: Ord>(a: Option<(&T, bool)>, b: Option<(&T, bool)>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some((av, ac)), Some((bv, bc))) => av.cmp(bv).then(ac.cmp(&bc)),
    }
}

impl<T: Ord> Ord for Interval<T> {
    /// The canonical total order used for sorted period storage
    ///
    /// `Empty` sorts above everything, `Full` above every remaining shape;
    /// other intervals compare lexicographically by left endpoint then
    /// right endpoint. Two intervals compare equal exactly when they denote
    /// the same set.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Interval::Empty, Interval::Empty) => Ordering::Equal,
            (Interval::Empty, _) => Ordering::Greater,
            (_, Interval::Empty) => Ordering::Less,
            (Interval::Full, Interval::Full) => Ordering::Equal,
            (Interval::Full, _) => Ordering::Greater,
            (_, Interval::Full) => Ordering::Less,
            _ => cmp_left(self.lower_bound(), other.lower_bound())
                .then_with(|| cmp_right(self.upper_bound(), other.upper_bound())),
        }
    }
}

impl<T: Ord> PartialOrd for Interval<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interval::Empty => write!(f, "];["),
            Interval::Full => write!(f, "]-oo;+oo["),
            Interval::LeftUnbounded { hi, hi_closed } => {
                write!(f, "]-oo;{}{}", hi, if *hi_closed { ']' } else { '[' })
            }
            Interval::RightUnbounded { lo, lo_closed } => {
                write!(f, "{}{};+oo[", if *lo_closed { '[' } else { ']' }, lo)
            }
            Interval::Bounded {
                lo,
                lo_closed,
                hi,
                hi_closed,
            } => write!(
                f,
                "{}{};{}{}",
                if *lo_closed { '[' } else { ']' },
                lo,
                hi,
                if *hi_closed { ']' } else { '[' }
            ),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Small domain so that endpoint collisions actually happen
    fn interval_strategy() -> impl Strategy<Value = Interval<i32>> {
        prop_oneof![
            Just(Interval::Empty),
            Just(Interval::Full),
            (-8..8i32, any::<bool>()).prop_map(|(hi, c)| Interval::left_unbounded(hi, c)),
            (-8..8i32, any::<bool>()).prop_map(|(lo, c)| Interval::right_unbounded(lo, c)),
            (-8..8i32, any::<bool>(), -8..8i32, any::<bool>())
                .prop_map(|(a, ac, b, bc)| Interval::bounded_or_empty(a, ac, b, bc)),
        ]
    }

    proptest! {
        /// Property: comparison is reflexive and antisymmetric
        #[test]
        fn test_cmp_reflexive_antisymmetric(a in interval_strategy(), b in interval_strategy()) {
            prop_assert_eq!(a.cmp(&a), std::cmp::Ordering::Equal);
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }

        /// Property: comparison is transitive
        #[test]
        fn test_cmp_transitive(
            a in interval_strategy(),
            b in interval_strategy(),
            c in interval_strategy(),
        ) {
            if a <= b && b <= c {
                prop_assert!(a <= c);
            }
        }

        /// Property: comparing equal means the same set, point by point
        #[test]
        fn test_cmp_equal_is_same_set(
            a in interval_strategy(),
            b in interval_strategy(),
            point in -10..10i32,
        ) {
            if a.cmp(&b) == std::cmp::Ordering::Equal {
                prop_assert_eq!(a.contains_point(&point), b.contains_point(&point));
            }
        }

        /// Property: a singleton contains exactly its endpoint
        #[test]
        fn test_singleton_membership(at in -8..8i32, point in -10..10i32) {
            let iv = Interval::singleton(at);
            prop_assert!(iv.is_compact());
            prop_assert_eq!(iv.contains_point(&point), point == at);
        }
    }
}
