//! Error types for wordlist generation

use thiserror::Error;

/// Library result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while collecting facts or generating candidates
#[derive(Debug, Error)]
pub enum Error {
    /// Length or arity bounds that the generator cannot work with
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),

    /// A fact about the target failed validation
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
}

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
