//! Textual period serialization
//!
//! A period serializes to one token per interval in canonical order. Each
//! token is `<brace><endpoint>;<endpoint><brace>`, where `[` on the left or
//! `]` on the right means the endpoint is included, the mirrored brace
//! means it is not, and the endpoints are `-oo`, `+oo` or a formatted
//! value. The empty period is the single token `];[`, the full period
//! `]-oo;+oo[`.
//!
//! The codec is written once against an arbitrary value injection
//! (`serialize_with` / `parse_with`); instants get the chrono-pattern
//! convenience API on top.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::TemporalError;
use crate::interval::Interval;
use crate::period::{Instant, Period};

const NEG_INFINITY: &str = "-oo";
const POS_INFINITY: &str = "+oo";

impl<T: Ord + Clone> Period<T> {
    /// Serialize this period with a caller-supplied value formatter
    ///
    /// Emits one token per canonical element, so the output order is the
    /// canonical interval order.
    pub fn serialize_with<F>(&self, mut format_value: F) -> Vec<String>
    where
        F: FnMut(&T) -> String,
    {
        self.as_intervals()
            .iter()
            .map(|interval| interval_token(interval, &mut format_value))
            .collect()
    }

    /// Parse a token list with a caller-supplied value parser
    ///
    /// The inverse of [`serialize_with`](Self::serialize_with): parsing the
    /// serialized form of a period yields an equal period. Empty-interval
    /// tokens dissolve during canonicalization, so stray `];[` tokens in a
    /// longer list are harmless.
    ///
    /// # Errors
    ///
    /// [`TemporalError::MalformedIntervalText`] for an unrecognized brace,
    /// a misplaced or included infinity, a missing separator, or endpoint
    /// text the value parser rejects;
    /// [`TemporalError::UnorderableEndpoints`] when both endpoints parse
    /// but do not form a non-empty interval.
    pub fn parse_with<S, P>(tokens: &[S], mut parse_value: P) -> Result<Self, TemporalError>
    where
        S: AsRef<str>,
        P: FnMut(&str) -> Option<T>,
    {
        let mut intervals = Vec::with_capacity(tokens.len());
        for (index, token) in tokens.iter().enumerate() {
            intervals.push(parse_token(token.as_ref(), index, &mut parse_value)?);
        }
        Ok(Self::from_intervals(intervals))
    }
}

impl Period<Instant> {
    /// Serialize this period, formatting instants with a chrono pattern
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use pepys_domain::{Interval, TimePeriod};
    ///
    /// let day = |y, m, d| {
    ///     NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    /// };
    /// let period = TimePeriod::from_interval(
    ///     Interval::bounded(day(2022, 6, 1), true, day(2023, 6, 1), true).unwrap(),
    /// );
    /// assert_eq!(period.serialize("%Y-%m-%d"), vec!["[2022-06-01;2023-06-01]"]);
    /// ```
    pub fn serialize(&self, pattern: &str) -> Vec<String> {
        self.serialize_with(|instant| instant.format(pattern).to_string())
    }

    /// Parse a token list, reading instants with a chrono pattern
    ///
    /// A date-only pattern is read as the instant at midnight, so date
    /// granular data round-trips.
    ///
    /// # Errors
    ///
    /// As for [`parse_with`](Self::parse_with).
    pub fn parse<S: AsRef<str>>(tokens: &[S], pattern: &str) -> Result<Self, TemporalError> {
        Self::parse_with(tokens, |text| parse_instant(text, pattern))
    }
}

fn parse_instant(text: &str, pattern: &str) -> Option<Instant> {
    NaiveDateTime::parse_from_str(text, pattern).ok().or_else(|| {
        NaiveDate::parse_from_str(text, pattern)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })
}

fn interval_token<T, F>(interval: &Interval<T>, format_value: &mut F) -> String
where
    T: Ord,
    F: FnMut(&T) -> String,
{
    match interval {
        Interval::Empty => "];[".to_string(),
        Interval::Full => format!("]{NEG_INFINITY};{POS_INFINITY}["),
        Interval::LeftUnbounded { hi, hi_closed } => format!(
            "]{NEG_INFINITY};{}{}",
            format_value(hi),
            if *hi_closed { ']' } else { '[' }
        ),
        Interval::RightUnbounded { lo, lo_closed } => format!(
            "{}{};{POS_INFINITY}[",
            if *lo_closed { '[' } else { ']' },
            format_value(lo)
        ),
        Interval::Bounded {
            lo,
            lo_closed,
            hi,
            hi_closed,
        } => format!(
            "{}{};{}{}",
            if *lo_closed { '[' } else { ']' },
            format_value(lo),
            format_value(hi),
            if *hi_closed { ']' } else { '[' }
        ),
    }
}

fn parse_token<T, P>(text: &str, index: usize, parse_value: &mut P) -> Result<Interval<T>, TemporalError>
where
    T: Ord,
    P: FnMut(&str) -> Option<T>,
{
    let malformed = || TemporalError::MalformedIntervalText {
        index,
        token: text.to_string(),
    };

    // Shortest well-formed token is the empty marker `];[`.
    if text.len() < 3 {
        return Err(malformed());
    }
    let open = text.chars().next().ok_or_else(malformed)?;
    let close = text.chars().last().ok_or_else(malformed)?;
    if !matches!(open, '[' | ']') || !matches!(close, '[' | ']') {
        return Err(malformed());
    }

    // Braces are one-byte ASCII, so slicing them off is safe.
    let inner = &text[1..text.len() - 1];
    let (lo_text, hi_text) = inner.split_once(';').ok_or_else(malformed)?;

    if lo_text.is_empty() && hi_text.is_empty() {
        return if open == ']' && close == '[' {
            Ok(Interval::Empty)
        } else {
            Err(malformed())
        };
    }

    // Infinities are never included and never switch sides.
    if lo_text == POS_INFINITY || hi_text == NEG_INFINITY {
        return Err(malformed());
    }
    let lo_unbounded = lo_text == NEG_INFINITY;
    let hi_unbounded = hi_text == POS_INFINITY;
    if (lo_unbounded && open != ']') || (hi_unbounded && close != '[') {
        return Err(malformed());
    }

    match (lo_unbounded, hi_unbounded) {
        (true, true) => Ok(Interval::Full),
        (true, false) => {
            let hi = parse_value(hi_text).ok_or_else(malformed)?;
            Ok(Interval::left_unbounded(hi, close == ']'))
        }
        (false, true) => {
            let lo = parse_value(lo_text).ok_or_else(malformed)?;
            Ok(Interval::right_unbounded(lo, open == '['))
        }
        (false, false) => {
            let lo = parse_value(lo_text).ok_or_else(malformed)?;
            let hi = parse_value(hi_text).ok_or_else(malformed)?;
            Interval::bounded(lo, open == '[', hi, close == ']')
                .map_err(|_| TemporalError::UnorderableEndpoints { index })
        }
    }
}
