use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PseudoError {
    /// The value handed to the engine is not text.
    #[error("text to pseudo-localize must be a string, found {found}")]
    InvalidInputType { found: String },

    /// Entry `key` of a `strings` request is not text.
    #[error("strings entry '{key}' must be a string, found {found}")]
    InvalidStringsEntry { key: String, found: String },

    /// A transform name that is not part of the catalog.
    #[error("unknown transform: {name}")]
    UnknownTransform { name: String },
}

pub type Result<T> = std::result::Result<T, PseudoError>;
