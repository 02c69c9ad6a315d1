//! Encrypted note storage.
//!
//! One authenticated-encryption blob per note on disk, plus a plaintext
//! index of `{id, last_modified}` pairs so listing never needs the key.
//!
//! ## Consistency
//!
//! The blob files are authoritative; the index is a projection of them.
//! Saves write the blob first, then the index, and the index is
//! reconciled against the blob directory every time a repository is
//! opened, so an interrupted save cannot leave the two permanently
//! diverged.

pub mod notes;
pub mod types;

pub use notes::NoteRepository;
pub use types::{Note, NoteIndexEntry};
