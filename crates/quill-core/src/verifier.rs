//! Master password establishment and verification.
//!
//! The password itself is never stored. The verifier persists a random
//! salt and a known plaintext encrypted under the derived key (the
//! "probe"); an entered password is correct exactly when its derived key
//! decrypts the probe back to that plaintext.
//!
//! Two states, keyed off the salt slot:
//! - **Unset**: no salt persisted, no password established
//! - **Set**: salt and probe persisted
//!
//! A wrong password is an expected outcome, not a fault: verification
//! returns `Ok(None)`, never an error, for anything short of a secret
//! store failure.

use crate::crypto::cipher;
use crate::crypto::kdf::{derive_key, PBKDF2_ITERATIONS};
use crate::crypto::key::DerivedKey;
use crate::error::{QuillError, Result};
use crate::secret_store::{
    decode_salt, encode_salt, generate_salt, SecretStore, SLOT_PROBE, SLOT_SALT,
};

/// Known plaintext encrypted under the current key to test password
/// correctness. The value is arbitrary but must never change: existing
/// installations have it encrypted in their probe slot.
const PROBE_PLAINTEXT: &str = "quill-verification-probe-v1";

/// Password verifier bound to a secret store backend.
pub struct PasswordVerifier<S: SecretStore> {
    store: S,
    iterations: u32,
}

impl<S: SecretStore> PasswordVerifier<S> {
    /// Create a verifier using the production iteration count.
    pub fn new(store: S) -> Self {
        Self {
            store,
            iterations: PBKDF2_ITERATIONS,
        }
    }

    /// Create a verifier with an explicit iteration count.
    ///
    /// Intended for tests, where full-strength derivation is too slow. The
    /// count must stay constant for the lifetime of an installation or
    /// previously derived keys stop matching.
    pub fn with_iterations(store: S, iterations: u32) -> Self {
        Self { store, iterations }
    }

    /// Whether a master password has been established (salt present).
    pub fn has_password(&self) -> Result<bool> {
        Ok(self.store.get(SLOT_SALT)?.is_some())
    }

    /// Establish the master password and return the derived key.
    ///
    /// Only valid while no password is set. Writes the salt, then the
    /// probe; if the probe write fails the salt is rolled back so no
    /// partial salt-without-probe state survives.
    ///
    /// # Errors
    ///
    /// `QuillError::InvalidInput` for an empty password or when a password
    /// is already set; `QuillError::SecretStore` if persistence fails.
    pub fn set_password(&self, password: &str) -> Result<DerivedKey> {
        if password.is_empty() {
            return Err(QuillError::InvalidInput(
                "Password cannot be empty".to_string(),
            ));
        }
        if self.has_password()? {
            return Err(QuillError::InvalidInput(
                "A master password is already set".to_string(),
            ));
        }

        let salt = generate_salt()?;
        let key = derive_key(password, &salt, self.iterations)?;
        let probe = cipher::encrypt(PROBE_PLAINTEXT, &key)?;

        self.store.set(SLOT_SALT, &encode_salt(&salt))?;
        if let Err(err) = self.store.set(SLOT_PROBE, &probe) {
            // Roll back: a salt without a probe would read as Set but
            // could never verify.
            let _ = self.store.delete(SLOT_SALT);
            return Err(err);
        }

        Ok(key)
    }

    /// Check an entered password against the stored probe.
    ///
    /// Returns `Ok(Some(key))` on an exact probe match, `Ok(None)` for a
    /// wrong or empty password, a missing or corrupt salt or probe, or a
    /// failed decryption. Errors are reserved for secret store failures.
    pub fn verify_password(&self, password: &str) -> Result<Option<DerivedKey>> {
        if password.is_empty() {
            return Ok(None);
        }

        let Some(encoded_salt) = self.store.get(SLOT_SALT)? else {
            return Ok(None);
        };
        let Ok(salt) = decode_salt(&encoded_salt) else {
            return Ok(None);
        };

        let key = derive_key(password, &salt, self.iterations)?;

        let Some(probe) = self.store.get(SLOT_PROBE)? else {
            return Ok(None);
        };
        match cipher::decrypt(&probe, &key) {
            Some(plaintext) if plaintext == PROBE_PLAINTEXT => Ok(Some(key)),
            _ => Ok(None),
        }
    }

    /// Delete the salt and probe, returning to the Unset state.
    ///
    /// Irreversible. Note blobs are not touched; without the salt they
    /// remain on disk as permanently undecryptable ciphertext.
    pub fn erase(&self) -> Result<()> {
        self.store.delete(SLOT_SALT)?;
        self.store.delete(SLOT_PROBE)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret_store::MemoryStore;

    const TEST_ITERATIONS: u32 = 1_000;

    fn verifier() -> PasswordVerifier<MemoryStore> {
        PasswordVerifier::with_iterations(MemoryStore::new(), TEST_ITERATIONS)
    }

    #[test]
    fn test_has_password_false_until_set() {
        let verifier = verifier();
        assert!(!verifier.has_password().unwrap());

        verifier.set_password("master-password").unwrap();
        assert!(verifier.has_password().unwrap());
    }

    #[test]
    fn test_set_then_verify_round_trip() {
        let verifier = verifier();
        let set_key = verifier.set_password("master-password").unwrap();

        let verified_key = verifier
            .verify_password("master-password")
            .unwrap()
            .expect("correct password should verify");
        assert_eq!(set_key.as_bytes(), verified_key.as_bytes());
    }

    #[test]
    fn test_wrong_password_returns_none() {
        let verifier = verifier();
        verifier.set_password("master-password").unwrap();

        assert!(verifier.verify_password("wrong-password").unwrap().is_none());
    }

    #[test]
    fn test_empty_password_verify_returns_none() {
        let verifier = verifier();
        verifier.set_password("master-password").unwrap();

        assert!(verifier.verify_password("").unwrap().is_none());
    }

    #[test]
    fn test_empty_password_set_rejected() {
        let verifier = verifier();
        assert!(matches!(
            verifier.set_password(""),
            Err(QuillError::InvalidInput(_))
        ));
        assert!(!verifier.has_password().unwrap());
    }

    #[test]
    fn test_set_twice_rejected() {
        let verifier = verifier();
        verifier.set_password("master-password").unwrap();

        assert!(matches!(
            verifier.set_password("another-password"),
            Err(QuillError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_verify_without_set_returns_none() {
        let verifier = verifier();
        assert!(verifier.verify_password("anything").unwrap().is_none());
    }

    #[test]
    fn test_corrupt_probe_returns_none() {
        let verifier = verifier();
        verifier.set_password("master-password").unwrap();

        verifier.store.set(SLOT_PROBE, "not a valid blob").unwrap();
        assert!(verifier.verify_password("master-password").unwrap().is_none());
    }

    #[test]
    fn test_corrupt_salt_returns_none() {
        let verifier = verifier();
        verifier.set_password("master-password").unwrap();

        verifier.store.set(SLOT_SALT, "###").unwrap();
        assert!(verifier.verify_password("master-password").unwrap().is_none());
    }

    #[test]
    fn test_erase_returns_to_unset() {
        let verifier = verifier();
        verifier.set_password("master-password").unwrap();

        verifier.erase().unwrap();
        assert!(!verifier.has_password().unwrap());
        assert!(verifier.verify_password("master-password").unwrap().is_none());

        // Idempotent
        verifier.erase().unwrap();
    }

    #[test]
    fn test_reset_after_erase_derives_fresh_key() {
        let verifier = verifier();
        let key1 = verifier.set_password("master-password").unwrap();

        verifier.erase().unwrap();
        let key2 = verifier.set_password("master-password").unwrap();

        // New salt, same password: different key.
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    /// Store whose probe-slot writes fail, for rollback testing.
    struct ProbeWriteFails {
        inner: MemoryStore,
    }

    impl SecretStore for ProbeWriteFails {
        fn get(&self, slot: &str) -> Result<Option<String>> {
            self.inner.get(slot)
        }

        fn set(&self, slot: &str, value: &str) -> Result<()> {
            if slot == SLOT_PROBE {
                return Err(QuillError::SecretStore("probe write refused".to_string()));
            }
            self.inner.set(slot, value)
        }

        fn delete(&self, slot: &str) -> Result<()> {
            self.inner.delete(slot)
        }
    }

    #[test]
    fn test_failed_probe_write_rolls_back_salt() {
        let verifier = PasswordVerifier::with_iterations(
            ProbeWriteFails {
                inner: MemoryStore::new(),
            },
            TEST_ITERATIONS,
        );

        assert!(matches!(
            verifier.set_password("master-password"),
            Err(QuillError::SecretStore(_))
        ));
        // State must remain Unset: no orphaned salt.
        assert!(!verifier.has_password().unwrap());
    }
}
