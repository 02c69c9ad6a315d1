//! The UI-facing session handle.
//!
//! A `Session` owns the derived key as explicit state rather than ambient
//! global state: set by [`Session::set_password`] or [`Session::unlock`],
//! required by the content operations, and dropped (key material
//! zeroized) by [`Session::lock`]. UI layers hold one session and drive
//! every operation through it.

use crate::crypto::key::DerivedKey;
use crate::error::{QuillError, Result};
use crate::secret_store::SecretStore;
use crate::store::types::{Note, NoteIndexEntry};
use crate::store::NoteRepository;
use crate::verifier::PasswordVerifier;

/// One logical user session over the verifier and note repository.
pub struct Session<S: SecretStore> {
    verifier: PasswordVerifier<S>,
    notes: NoteRepository,
    key: Option<DerivedKey>,
}

impl<S: SecretStore> Session<S> {
    /// Create a locked session from its collaborators.
    pub fn new(verifier: PasswordVerifier<S>, notes: NoteRepository) -> Self {
        Self {
            verifier,
            notes,
            key: None,
        }
    }

    /// Whether a master password has been established.
    pub fn has_password(&self) -> Result<bool> {
        self.verifier.has_password()
    }

    /// Establish the master password and unlock the session.
    pub fn set_password(&mut self, password: &str) -> Result<()> {
        let key = self.verifier.set_password(password)?;
        self.key = Some(key);
        Ok(())
    }

    /// Check `password` against the stored probe, unlocking on success.
    ///
    /// Returns `Ok(false)` for a wrong password; that is an expected
    /// outcome, not an error, and leaves the session locked.
    pub fn unlock(&mut self, password: &str) -> Result<bool> {
        match self.verifier.verify_password(password)? {
            Some(key) => {
                self.key = Some(key);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Discard the session key. Key material is zeroized as it drops;
    /// every key-requiring operation fails with `NoKey` until the next
    /// unlock.
    pub fn lock(&mut self) {
        self.key = None;
    }

    pub fn is_unlocked(&self) -> bool {
        self.key.is_some()
    }

    /// Delete the salt and probe and lock the session.
    ///
    /// The designed wipe: note blobs stay on disk but are permanently
    /// undecryptable once the salt is gone.
    pub fn erase_all(&mut self) -> Result<()> {
        self.key = None;
        self.verifier.erase()
    }

    /// List note metadata, most recent first. Reads only the plaintext
    /// index; works on a locked session.
    pub fn list_notes(&self) -> Vec<NoteIndexEntry> {
        self.notes.list_all()
    }

    /// Load one note's plaintext. `Ok(None)` if the note does not exist
    /// or its blob cannot be decrypted.
    pub fn open_note(&self, id: &str) -> Result<Option<String>> {
        let key = self.key()?;
        self.notes.load_content(id, key)
    }

    /// Save `content` under `id`, or under a fresh id when none is given.
    /// Returns the stored note with its stamped modification time.
    pub fn save_note(&self, id: Option<String>, content: impl Into<String>) -> Result<Note> {
        let key = self.key()?;
        let id = id.unwrap_or_else(|| self.notes.new_id());
        self.notes.save(Note::new(id, content), key)
    }

    /// Delete a note. Idempotent; requires an unlocked session like every
    /// non-listing operation.
    pub fn delete_note(&self, id: &str) -> Result<()> {
        self.key()?;
        self.notes.delete(id)
    }

    fn key(&self) -> Result<&DerivedKey> {
        self.key.as_ref().ok_or(QuillError::NoKey)
    }
}
