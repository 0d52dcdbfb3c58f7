//! Set-theoretic operations on intervals
//!
//! All operations here are total: degenerate results collapse to
//! [`Interval::Empty`] instead of failing. Operations that can split an
//! interval return at most two pieces, so they hand back a two-slot
//! `SmallVec` and never touch the heap on the common path.

use std::cmp::Ordering;

use smallvec::{smallvec, SmallVec};

use crate::interval::Interval;

/// One or two disjoint intervals, as produced by complement and difference
pub type IntervalPair<T> = SmallVec<[Interval<T>; 2]>;

/// Lower bounds ordered by where the covered range begins
///
/// Unbounded starts earliest; on a value tie the closed bound starts
/// earlier than the open one, because it covers the endpoint itself.
fn cmp_lower_cover<T: Ord>(a: Option<(&T, bool)>, b: Option<(&T, bool)>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some((av, ac)), Some((bv, bc))) => av.cmp(bv).then(bc.cmp(&ac)),
    }
}

/// Upper bounds ordered by where the covered range ends
///
/// Unbounded ends latest; on a value tie the open bound ends earlier than
/// the closed one.
fn cmp_upper_cover<T: Ord>(a: Option<(&T, bool)>, b: Option<(&T, bool)>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some((av, ac)), Some((bv, bc))) => av.cmp(bv).then(ac.cmp(&bc)),
    }
}

fn clone_bound<T: Clone>(bound: Option<(&T, bool)>) -> Option<(T, bool)> {
    bound.map(|(value, closed)| (value.clone(), closed))
}

impl<T: Ord + Clone> Interval<T> {
    /// The complement of this interval, as one or two disjoint intervals
    ///
    /// Closedness toggles at every finite endpoint. `Empty` and `Full`
    /// complement to each other.
    ///
    /// # Examples
    ///
    /// ```
    /// use pepys_domain::Interval;
    ///
    /// let iv = Interval::bounded(1, true, 5, false).unwrap();
    /// let parts = iv.complement();
    /// assert_eq!(parts[0], Interval::left_unbounded(1, false));
    /// assert_eq!(parts[1], Interval::right_unbounded(5, true));
    /// ```
    pub fn complement(&self) -> IntervalPair<T> {
        match self {
            Interval::Empty => smallvec![Interval::Full],
            Interval::Full => smallvec![Interval::Empty],
            Interval::LeftUnbounded { hi, hi_closed } => smallvec![Interval::RightUnbounded {
                lo: hi.clone(),
                lo_closed: !hi_closed,
            }],
            Interval::RightUnbounded { lo, lo_closed } => smallvec![Interval::LeftUnbounded {
                hi: lo.clone(),
                hi_closed: !lo_closed,
            }],
            Interval::Bounded {
                lo,
                lo_closed,
                hi,
                hi_closed,
            } => smallvec![
                Interval::LeftUnbounded {
                    hi: lo.clone(),
                    hi_closed: !lo_closed,
                },
                Interval::RightUnbounded {
                    lo: hi.clone(),
                    lo_closed: !hi_closed,
                },
            ],
        }
    }

    /// The intersection of two intervals
    ///
    /// The result takes the later lower bound and the earlier upper bound;
    /// on endpoint ties the open side wins. Degenerate results collapse to
    /// `Empty`.
    pub fn intersect(&self, other: &Self) -> Interval<T> {
        if self.is_empty() || other.is_empty() {
            return Interval::Empty;
        }
        if self.is_full() {
            return other.clone();
        }
        if other.is_full() {
            return self.clone();
        }

        let lo = match cmp_lower_cover(self.lower_bound(), other.lower_bound()) {
            Ordering::Less => other.lower_bound(),
            _ => self.lower_bound(),
        };
        let hi = match cmp_upper_cover(self.upper_bound(), other.upper_bound()) {
            Ordering::Greater => other.upper_bound(),
            _ => self.upper_bound(),
        };
        Interval::from_bounds(clone_bound(lo), clone_bound(hi))
    }

    /// Whether the union of two intervals cannot be a single interval
    ///
    /// Two non-empty intervals are separated when a gap lies between them,
    /// or when they meet at exactly one boundary value that neither side
    /// includes. Touching with at least one closed end is mergeable, not
    /// separated. An empty interval is separated from nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use pepys_domain::Interval;
    ///
    /// let a = Interval::left_unbounded(0, false);
    /// let b = Interval::right_unbounded(0, false);
    /// assert!(a.separated_from(&b));
    ///
    /// let c = Interval::right_unbounded(0, true);
    /// assert!(!a.separated_from(&c));
    /// ```
    pub fn separated_from(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if !self.intersect(other).is_empty() {
            return false;
        }
        !touches(self, other) && !touches(other, self)
    }

    /// The set difference `self \ other`, as zero, one or two intervals
    ///
    /// Computed as the intersection with each complement piece of `other`.
    /// Empty pieces are dropped, so the result may itself be empty.
    pub fn difference(&self, other: &Self) -> IntervalPair<T> {
        let mut pieces = IntervalPair::new();
        for part in other.complement() {
            let piece = self.intersect(&part);
            if !piece.is_empty() {
                pieces.push(piece);
            }
        }
        pieces
    }

    /// The smallest single interval containing both operands
    ///
    /// Empty operands contribute nothing.
    pub fn hull(&self, other: &Self) -> Interval<T> {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        if self.is_full() || other.is_full() {
            return Interval::Full;
        }

        let lo = match cmp_lower_cover(self.lower_bound(), other.lower_bound()) {
            Ordering::Greater => other.lower_bound(),
            _ => self.lower_bound(),
        };
        let hi = match cmp_upper_cover(self.upper_bound(), other.upper_bound()) {
            Ordering::Less => other.upper_bound(),
            _ => self.upper_bound(),
        };
        Interval::from_bounds(clone_bound(lo), clone_bound(hi))
    }
}

/// Whether `a` ends exactly where `b` begins, with at least one side closed
fn touches<T: Ord>(a: &Interval<T>, b: &Interval<T>) -> bool {
    match (a.upper_bound(), b.lower_bound()) {
        (Some((x, x_closed)), Some((y, y_closed))) => x == y && (x_closed || y_closed),
        _ => false,
    }
}

/// The union of arbitrarily many intervals, as a canonical separated list
///
/// The result is the minimal pairwise-separated set of non-empty intervals
/// covering the inputs, sorted by the canonical interval order. All-empty
/// input collapses to `[Empty]`; any `Full` input short-circuits to
/// `[Full]`.
///
/// # Examples
///
/// ```
/// use pepys_domain::{union_all, Interval};
///
/// let merged = union_all(vec![
///     Interval::bounded(0, true, 2, true).unwrap(),
///     Interval::bounded(2, true, 5, false).unwrap(),
///     Interval::bounded(7, true, 9, true).unwrap(),
/// ]);
/// assert_eq!(merged.len(), 2);
/// ```
pub fn union_all<T, I>(intervals: I) -> Vec<Interval<T>>
where
    T: Ord + Clone,
    I: IntoIterator<Item = Interval<T>>,
{
    let mut acc: Vec<Interval<T>> = Vec::new();
    for interval in intervals {
        if interval.is_empty() {
            continue;
        }
        if interval.is_full() {
            return vec![Interval::Full];
        }

        // Fold the newcomer into everything it can merge with; the rest of
        // the accumulator stays pairwise separated by the loop invariant.
        let mut merged = interval;
        let mut kept = Vec::with_capacity(acc.len() + 1);
        for existing in acc {
            if existing.separated_from(&merged) {
                kept.push(existing);
            } else {
                merged = merged.hull(&existing);
            }
        }
        kept.push(merged);
        acc = kept;
    }

    if acc.is_empty() {
        return vec![Interval::Empty];
    }
    acc.sort();
    acc
}

/// The intersection of arbitrarily many intervals
///
/// Folds pairwise from `Full`; an empty input list therefore yields `Full`.
pub fn intersect_all<T, I>(intervals: I) -> Interval<T>
where
    T: Ord + Clone,
    I: IntoIterator<Item = Interval<T>>,
{
    let mut result = Interval::Full;
    for interval in intervals {
        result = result.intersect(&interval);
        if result.is_empty() {
            break;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounded(lo: i32, lo_closed: bool, hi: i32, hi_closed: bool) -> Interval<i32> {
        Interval::bounded(lo, lo_closed, hi, hi_closed).unwrap()
    }

    #[test]
    fn test_complement_empty_and_full() {
        assert_eq!(
            Interval::<i32>::empty().complement().as_slice(),
            &[Interval::Full]
        );
        assert_eq!(
            Interval::<i32>::full().complement().as_slice(),
            &[Interval::Empty]
        );
    }

    #[test]
    fn test_complement_half_lines_toggle_closedness() {
        let left = Interval::left_unbounded(3, true);
        assert_eq!(
            left.complement().as_slice(),
            &[Interval::right_unbounded(3, false)]
        );

        let right = Interval::right_unbounded(3, false);
        assert_eq!(
            right.complement().as_slice(),
            &[Interval::left_unbounded(3, true)]
        );
    }

    #[test]
    fn test_complement_bounded_splits_in_two() {
        let parts = bounded(1, false, 5, true).complement();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], Interval::left_unbounded(1, true));
        assert_eq!(parts[1], Interval::right_unbounded(5, false));
    }

    #[test]
    fn test_intersect_overlap() {
        let a = bounded(0, true, 10, false);
        let b = bounded(5, true, 15, true);
        assert_eq!(a.intersect(&b), bounded(5, true, 10, false));
    }

    #[test]
    fn test_intersect_closedness_ands_on_ties() {
        let a = bounded(0, true, 10, true);
        let b = bounded(0, false, 10, false);
        assert_eq!(a.intersect(&b), bounded(0, false, 10, false));
    }

    #[test]
    fn test_intersect_shared_closed_endpoint_is_singleton() {
        let a = Interval::left_unbounded(0, true);
        let b = Interval::right_unbounded(0, true);
        assert_eq!(a.intersect(&b), Interval::singleton(0));
    }

    #[test]
    fn test_intersect_shared_open_endpoint_is_empty() {
        let a = Interval::left_unbounded(0, false);
        let b = Interval::right_unbounded(0, true);
        assert!(a.intersect(&b).is_empty());
    }

    #[test]
    fn test_intersect_disjoint_is_empty() {
        let a = bounded(0, true, 1, true);
        let b = bounded(5, true, 6, true);
        assert!(a.intersect(&b).is_empty());
    }

    #[test]
    fn test_intersect_full_is_identity() {
        let a = bounded(0, false, 10, true);
        assert_eq!(a.intersect(&Interval::full()), a);
        assert_eq!(Interval::full().intersect(&a), a);
    }

    #[test]
    fn test_separated_by_gap() {
        let a = bounded(0, true, 1, true);
        let b = bounded(5, true, 6, true);
        assert!(a.separated_from(&b));
        assert!(b.separated_from(&a));
    }

    #[test]
    fn test_adjacent_with_closed_end_not_separated() {
        let a = bounded(0, true, 1, true);
        let b = bounded(1, false, 2, true);
        assert!(!a.separated_from(&b));

        let c = bounded(0, true, 1, false);
        let d = bounded(1, true, 2, true);
        assert!(!c.separated_from(&d));
    }

    #[test]
    fn test_adjacent_both_open_separated() {
        let a = bounded(0, true, 1, false);
        let b = bounded(1, false, 2, true);
        assert!(a.separated_from(&b));
    }

    #[test]
    fn test_overlapping_not_separated() {
        let a = bounded(0, true, 5, true);
        let b = bounded(3, true, 8, true);
        assert!(!a.separated_from(&b));
    }

    #[test]
    fn test_difference_hole_splits() {
        let base = bounded(0, true, 10, true);
        let hole = bounded(4, true, 6, true);
        let parts = base.difference(&hole);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], bounded(0, true, 4, false));
        assert_eq!(parts[1], bounded(6, false, 10, true));
    }

    #[test]
    fn test_difference_covered_is_empty() {
        let base = bounded(2, true, 3, true);
        let cover = bounded(0, true, 10, true);
        assert!(base.difference(&cover).is_empty());
    }

    #[test]
    fn test_difference_disjoint_is_identity() {
        let base = bounded(0, true, 1, true);
        let other = bounded(5, true, 6, true);
        assert_eq!(base.difference(&other).as_slice(), &[base]);
    }

    #[test]
    fn test_difference_singleton_leaves_open_point() {
        let base = bounded(0, true, 2, true);
        let parts = base.difference(&Interval::singleton(1));
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], bounded(0, true, 1, false));
        assert_eq!(parts[1], bounded(1, false, 2, true));
    }

    #[test]
    fn test_hull_prefers_closed_bounds_on_ties() {
        let a = bounded(0, false, 5, true);
        let b = bounded(0, true, 5, false);
        assert_eq!(a.hull(&b), bounded(0, true, 5, true));
    }

    #[test]
    fn test_hull_spans_gaps() {
        let a = bounded(0, true, 1, true);
        let b = bounded(5, true, 6, false);
        assert_eq!(a.hull(&b), bounded(0, true, 6, false));
    }

    #[test]
    fn test_union_all_merges_adjacent() {
        let merged = union_all(vec![
            bounded(0, true, 2, true),
            bounded(2, true, 5, false),
            bounded(7, true, 9, true),
        ]);
        assert_eq!(
            merged,
            vec![bounded(0, true, 5, false), bounded(7, true, 9, true)]
        );
    }

    #[test]
    fn test_union_all_bridging_input_collapses_everything() {
        let merged = union_all(vec![
            bounded(0, true, 1, true),
            bounded(2, true, 3, true),
            bounded(1, false, 2, false),
        ]);
        assert_eq!(merged, vec![bounded(0, true, 3, true)]);
    }

    #[test]
    fn test_union_all_empty_inputs_collapse() {
        assert_eq!(
            union_all(vec![Interval::<i32>::empty(), Interval::empty()]),
            vec![Interval::Empty]
        );
        assert_eq!(union_all(Vec::<Interval<i32>>::new()), vec![Interval::Empty]);
    }

    #[test]
    fn test_union_all_full_short_circuits() {
        let merged = union_all(vec![bounded(0, true, 1, true), Interval::full()]);
        assert_eq!(merged, vec![Interval::Full]);
    }

    #[test]
    fn test_union_all_half_lines_meeting_at_closed_point_make_full() {
        let merged = union_all(vec![
            Interval::left_unbounded(0, true),
            Interval::right_unbounded(0, false),
        ]);
        assert_eq!(merged, vec![Interval::Full]);
    }

    #[test]
    fn test_intersect_all_folds() {
        let result = intersect_all(vec![
            bounded(0, true, 10, true),
            bounded(5, false, 20, true),
            Interval::left_unbounded(8, true),
        ]);
        assert_eq!(result, bounded(5, false, 8, true));
    }

    #[test]
    fn test_intersect_all_empty_input_is_full() {
        assert_eq!(intersect_all(Vec::<Interval<i32>>::new()), Interval::Full);
    }
}
