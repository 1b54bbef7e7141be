//! Error types for rs-readable.
//!
//! Only hard failures are errors. A page that yields little or no article
//! content still produces an [`ArticleResult`](crate::ArticleResult) with
//! `degraded` set.

/// Error type for extraction operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The caller supplied input the engine refuses to process
    /// (empty or non-textual HTML, malformed batch items).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An unexpected failure inside the engine. In batch mode this is
    /// reported for the offending item only.
    #[error("internal fault: {0}")]
    InternalFault(String),
}

impl Error {
    /// Message without the category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput(msg) | Self::InternalFault(msg) => msg,
        }
    }

    /// Whether the error was caused by the caller's input.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
