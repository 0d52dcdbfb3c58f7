//! Domain error types

use thiserror::Error;

/// Errors reported by the interval and period engines
///
/// Emptiness is a value in this crate, never an error: operations that
/// collapse to the empty set simply return it. The only failures are the
/// fallible bounded constructor and the textual parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemporalError {
    /// `Interval::bounded` was given endpoints that denote the empty set
    #[error("empty interval by construction: lo must precede hi, or equal it with both ends closed")]
    EmptyIntervalByConstruction,

    /// A serialized interval token could not be understood
    #[error("malformed interval text at token {index}: {token:?}")]
    MalformedIntervalText {
        /// Position of the offending token in the input list
        index: usize,

        /// The offending token, verbatim
        token: String,
    },

    /// Both endpoints of a token parsed, but do not form a non-empty interval
    #[error("unorderable endpoints at token {index}")]
    UnorderableEndpoints {
        /// Position of the offending token in the input list
        index: usize,
    },
}
