//! Secret storage for the installation salt and verification probe.
//!
//! Two whole-value slots live in an OS-level protected store rather than
//! plain application storage: together the salt and probe are the sole
//! gate to every note. Erasing the salt is the designed wipe mechanism —
//! the note blobs stay on disk but become permanently undecryptable.
//!
//! The [`SecretStore`] trait keeps the backend swappable. The default is
//! the platform keyring; an in-memory store is provided for tests and for
//! headless environments without a secret service.

use std::collections::HashMap;
use std::sync::Mutex;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::crypto::kdf::SALT_LENGTH;
use crate::error::{QuillError, Result};

/// Slot holding the base64-encoded installation salt.
pub const SLOT_SALT: &str = "salt";

/// Slot holding the encrypted verification probe blob.
pub const SLOT_PROBE: &str = "verification-probe";

/// Whole-value key-value storage for the two secret slots.
///
/// Values are read and written as complete strings, never partially.
/// `delete` of an absent slot succeeds silently.
pub trait SecretStore {
    /// Read a slot. Returns `Ok(None)` if the slot has never been written.
    fn get(&self, slot: &str) -> Result<Option<String>>;

    /// Write a slot, replacing any previous value.
    fn set(&self, slot: &str, value: &str) -> Result<()>;

    /// Remove a slot. Idempotent.
    fn delete(&self, slot: &str) -> Result<()>;
}

/// Generate a fresh cryptographically random salt.
pub fn generate_salt() -> Result<[u8; SALT_LENGTH]> {
    let mut salt = [0u8; SALT_LENGTH];
    getrandom::getrandom(&mut salt)
        .map_err(|e| QuillError::Crypto(format!("Failed to generate salt: {}", e)))?;
    Ok(salt)
}

/// Encode a salt for the `salt` slot.
pub fn encode_salt(salt: &[u8; SALT_LENGTH]) -> String {
    STANDARD.encode(salt)
}

/// Decode a stored salt, rejecting corrupt values.
pub fn decode_salt(value: &str) -> Result<[u8; SALT_LENGTH]> {
    let bytes = STANDARD.decode(value).map_err(|e| {
        QuillError::SecretStore(format!("Stored salt is not valid base64: {}", e))
    })?;
    bytes.try_into().map_err(|_| {
        QuillError::SecretStore(format!("Stored salt must be {} bytes", SALT_LENGTH))
    })
}

/// Secret store backed by the platform keyring service.
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, slot: &str) -> Result<keyring::Entry> {
        keyring::Entry::new(&self.service, slot)
            .map_err(|e| QuillError::SecretStore(format!("Keyring entry failed: {}", e)))
    }
}

impl SecretStore for KeyringStore {
    fn get(&self, slot: &str) -> Result<Option<String>> {
        match self.entry(slot)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(QuillError::SecretStore(format!(
                "Keyring read failed: {}",
                err
            ))),
        }
    }

    fn set(&self, slot: &str, value: &str) -> Result<()> {
        self.entry(slot)?
            .set_password(value)
            .map_err(|e| QuillError::SecretStore(format!("Keyring write failed: {}", e)))
    }

    fn delete(&self, slot: &str) -> Result<()> {
        match self.entry(slot)?.delete_password() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(QuillError::SecretStore(format!(
                "Keyring delete failed: {}",
                err
            ))),
        }
    }
}

/// In-memory secret store for tests and keyring-less environments.
///
/// Offers none of the at-rest protection of the platform keyring; values
/// vanish with the process.
#[derive(Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SecretStore for MemoryStore {
    fn get(&self, slot: &str) -> Result<Option<String>> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| QuillError::SecretStore("Secret store lock poisoned".to_string()))?;
        Ok(slots.get(slot).cloned())
    }

    fn set(&self, slot: &str, value: &str) -> Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| QuillError::SecretStore("Secret store lock poisoned".to_string()))?;
        slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, slot: &str) -> Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| QuillError::SecretStore("Secret store lock poisoned".to_string()))?;
        slots.remove(slot);
        Ok(())
    }
}
