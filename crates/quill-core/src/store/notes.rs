//! File-backed encrypted note repository.
//!
//! Layout under the repository root:
//! - `<id>.encrypted` — one authenticated-encryption blob per note
//! - `index.json` — plaintext JSON array of [`NoteIndexEntry`]
//!
//! All writes go through a temp-file-and-rename so a crash never leaves a
//! truncated blob or index.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::crypto::cipher;
use crate::crypto::key::DerivedKey;
use crate::error::{QuillError, Result};
use crate::fs::write_atomic;
use crate::store::types::{Note, NoteIndexEntry};

/// File extension for encrypted note blobs.
const BLOB_EXTENSION: &str = "encrypted";

/// Name of the plaintext index file.
const INDEX_FILE: &str = "index.json";

/// Repository of encrypted notes rooted at one directory.
pub struct NoteRepository {
    root: PathBuf,
}

impl NoteRepository {
    /// Open a repository, creating the root directory if needed.
    ///
    /// Opening reconciles the index against the blob files actually
    /// present: entries whose blob is gone are dropped, and blobs missing
    /// from the index are adopted with their file modification time. The
    /// blob files are authoritative; the index is only a listing aid.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        let repo = Self { root };
        repo.reconcile()?;
        Ok(repo)
    }

    /// Generate a fresh note identifier.
    ///
    /// Microsecond-resolution UTC timestamp: unique at interactive rates,
    /// and ids sort roughly by creation time.
    pub fn new_id(&self) -> String {
        Utc::now().timestamp_micros().to_string()
    }

    /// Encrypt and persist a note, then update the index entry.
    ///
    /// The note's `last_modified` is stamped here. The blob write comes
    /// first; if the index write fails afterwards, the next `open` repairs
    /// the index from the surviving blob.
    pub fn save(&self, note: Note, key: &DerivedKey) -> Result<Note> {
        validate_id(&note.id)?;

        let note = Note {
            last_modified: Utc::now(),
            ..note
        };

        let blob = cipher::encrypt(&note.content, key)?;
        write_atomic(&self.blob_path(&note.id), blob.as_bytes())
            .map_err(|e| QuillError::Storage(format!("Failed to write note {}: {}", note.id, e)))?;

        let mut entries = self.read_index();
        entries.retain(|entry| entry.id != note.id);
        entries.push(NoteIndexEntry {
            id: note.id.clone(),
            last_modified: note.last_modified,
        });
        self.write_index(&entries)?;

        Ok(note)
    }

    /// Load and decrypt one note's content.
    ///
    /// Returns `Ok(None)` if no blob exists for the id or if decryption
    /// fails (wrong key or corrupt blob). A single unreadable note must
    /// not block access to the rest of the store, so neither case is an
    /// error.
    pub fn load_content(&self, id: &str, key: &DerivedKey) -> Result<Option<String>> {
        if validate_id(id).is_err() {
            return Ok(None);
        }

        let blob = match fs::read_to_string(self.blob_path(id)) {
            Ok(blob) => blob,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        Ok(cipher::decrypt(blob.trim_end(), key))
    }

    /// List all notes from the plaintext index, most recently modified
    /// first. No key required. A missing or unparseable index yields an
    /// empty list rather than an error.
    pub fn list_all(&self) -> Vec<NoteIndexEntry> {
        let mut entries = self.read_index();
        entries.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
        entries
    }

    /// Remove a note's blob and index entry. Idempotent: deleting an id
    /// that does not exist succeeds silently.
    pub fn delete(&self, id: &str) -> Result<()> {
        if validate_id(id).is_err() {
            return Ok(());
        }

        match fs::remove_file(self.blob_path(id)) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }

        let mut entries = self.read_index();
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() != before {
            self.write_index(&entries)?;
        }

        Ok(())
    }

    fn blob_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.{}", id, BLOB_EXTENSION))
    }

    /// Rebuild the index from the blob directory where they disagree.
    fn reconcile(&self) -> Result<()> {
        let mut blobs: Vec<(String, DateTime<Utc>)> = Vec::new();
        for dir_entry in fs::read_dir(&self.root)? {
            let dir_entry = dir_entry?;
            let path = dir_entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BLOB_EXTENSION) {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let modified = dir_entry
                .metadata()
                .and_then(|meta| meta.modified())
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now());
            blobs.push((id.to_string(), modified));
        }

        let blob_ids: HashSet<&str> = blobs.iter().map(|(id, _)| id.as_str()).collect();

        let mut entries = self.read_index();
        let before = entries.len();
        entries.retain(|entry| blob_ids.contains(entry.id.as_str()));
        let mut changed = entries.len() != before;

        let indexed: HashSet<String> = entries.iter().map(|entry| entry.id.clone()).collect();
        for (id, modified) in blobs {
            if !indexed.contains(&id) {
                entries.push(NoteIndexEntry {
                    id,
                    last_modified: modified,
                });
                changed = true;
            }
        }

        if changed {
            self.write_index(&entries)?;
        }
        Ok(())
    }

    fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    /// Defensive read: a missing or corrupt index is an empty one.
    fn read_index(&self) -> Vec<NoteIndexEntry> {
        let Ok(contents) = fs::read_to_string(self.index_path()) else {
            return Vec::new();
        };
        serde_json::from_str(&contents).unwrap_or_default()
    }

    fn write_index(&self, entries: &[NoteIndexEntry]) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        write_atomic(&self.index_path(), json.as_bytes())
            .map_err(|e| QuillError::Storage(format!("Failed to write index: {}", e)))?;
        Ok(())
    }
}

/// Ids become file names; reject anything that could escape the root.
fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() || id.contains(['/', '\\']) || id.contains("..") {
        return Err(QuillError::InvalidInput(format!("Invalid note id: {:?}", id)));
    }
    Ok(())
}
