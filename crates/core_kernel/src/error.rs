//! Store error taxonomy shared by every repository adapter
//!
//! All adapters (file store, SQLite, remote HTTP) surface failures through the
//! same three categories so callers never branch on which backend is wired in:
//!
//! - `Validation` - malformed or missing required input; nothing was persisted
//! - `Retrieval` - the read path failed; no partial or stale data is substituted
//! - `Persistence` - the write path failed; prior state is left unchanged

use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Error type for repository operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The supplied record is malformed or incomplete
    #[error("validation error: {message}")]
    Validation { message: String },

    /// The store could not be read or returned malformed data
    #[error("retrieval error: {message}")]
    Retrieval {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// A write failed; the operation was rolled back
    #[error("persistence error: {message}")]
    Persistence {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl StoreError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::Validation {
            message: message.into(),
        }
    }

    /// Creates a Retrieval error
    pub fn retrieval(message: impl Into<String>) -> Self {
        StoreError::Retrieval {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Retrieval error wrapping an underlying cause
    pub fn retrieval_with(message: impl Into<String>, source: impl Into<BoxedSource>) -> Self {
        StoreError::Retrieval {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Creates a Persistence error
    pub fn persistence(message: impl Into<String>) -> Self {
        StoreError::Persistence {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Persistence error wrapping an underlying cause
    pub fn persistence_with(message: impl Into<String>, source: impl Into<BoxedSource>) -> Self {
        StoreError::Persistence {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Returns the human-readable message without the category prefix
    pub fn message(&self) -> &str {
        match self {
            StoreError::Validation { message }
            | StoreError::Retrieval { message, .. }
            | StoreError::Persistence { message, .. } => message,
        }
    }

    /// Returns true if this error was caused by bad input
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation { .. })
    }

    /// Returns true if this error came from the read path
    pub fn is_retrieval(&self) -> bool {
        matches!(self, StoreError::Retrieval { .. })
    }

    /// Returns true if this error came from the write path
    pub fn is_persistence(&self) -> bool {
        matches!(self, StoreError::Persistence { .. })
    }
}
