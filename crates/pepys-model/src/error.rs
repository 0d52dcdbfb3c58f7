//! Model error types

use thiserror::Error;

/// Errors reported by the knowledge model layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A trait name was used before being defined
    #[error("unknown trait: {name}")]
    UnknownTrait {
        /// The undefined trait name
        name: String,
    },

    /// A sub-trait link would make the hierarchy cyclic
    #[error("cyclic trait link: {sub} is already above {sup}")]
    CyclicTraitLink {
        /// The would-be sub-trait
        sub: String,

        /// The would-be super-trait
        sup: String,
    },
}
