//! Error types for Quill core operations.
//!
//! Expected outcomes (wrong password, missing note, a single corrupt blob)
//! are *not* errors; they surface as `Option`/`bool` results so one bad
//! note or one failed attempt never destabilizes the session. Errors are
//! reserved for caller mistakes and genuine system failures.

use thiserror::Error;

/// Result type alias for Quill operations.
pub type Result<T> = std::result::Result<T, QuillError>;

/// Core error type for Quill operations.
#[derive(Debug, Error)]
pub enum QuillError {
    /// Invalid caller input (empty password, malformed salt)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A key-requiring operation was invoked on a locked session
    #[error("No key available: session is locked")]
    NoKey,

    /// Key derivation or encryption failure
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// OS secret store read/write failure
    #[error("Secret store error: {0}")]
    SecretStore(String),

    /// Note storage failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}
