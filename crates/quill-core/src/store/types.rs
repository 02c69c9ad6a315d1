//! Core data types for the note store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A decrypted note held in memory.
///
/// Content exists only transiently here and inside an encrypted blob on
/// disk; it is never persisted unencrypted, so this type deliberately
/// does not implement `Serialize`.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    /// Opaque unique identifier; doubles as the storage key
    pub id: String,

    /// Plaintext note body
    pub content: String,

    /// Last modification timestamp, stamped on save
    pub last_modified: DateTime<Utc>,
}

impl Note {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            last_modified: Utc::now(),
        }
    }
}

/// Plaintext index entry enabling listing without decryption.
///
/// One entry per note, kept id-synchronized with the blob files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteIndexEntry {
    pub id: String,
    pub last_modified: DateTime<Utc>,
}
