//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! This module turns the master password and the installation salt into
//! the symmetric note-encryption key. PBKDF2 with a large iteration count
//! makes each password guess deliberately expensive.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use crate::crypto::key::{DerivedKey, KEY_LENGTH};
use crate::error::{QuillError, Result};

/// Fixed PBKDF2 iteration count.
///
/// This is a tuning constant, not user configuration: a different count
/// derives a different key, so changing it would make every previously
/// encrypted note unreadable.
pub const PBKDF2_ITERATIONS: u32 = 600_000;

/// Required salt length in bytes.
pub const SALT_LENGTH: usize = 16;

/// Derive an encryption key from a password and salt.
///
/// Deterministic: the same (password, salt, iterations) always yields the
/// same key, which is what lets a freshly entered password re-derive the
/// key that encrypted existing notes.
///
/// # Errors
///
/// Returns `QuillError::InvalidInput` if the password is empty, the salt
/// is not exactly [`SALT_LENGTH`] bytes, or `iterations` is zero.
pub fn derive_key(password: &str, salt: &[u8], iterations: u32) -> Result<DerivedKey> {
    if password.is_empty() {
        return Err(QuillError::InvalidInput(
            "Password cannot be empty".to_string(),
        ));
    }

    if salt.len() != SALT_LENGTH {
        return Err(QuillError::InvalidInput(format!(
            "Salt must be exactly {} bytes (got {})",
            SALT_LENGTH,
            salt.len()
        )));
    }

    if iterations == 0 {
        return Err(QuillError::InvalidInput(
            "Iteration count must be positive".to_string(),
        ));
    }

    let mut key_bytes = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key_bytes);

    Ok(DerivedKey::from_bytes(key_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Full-strength derivation is deliberately slow; tests use a small
    // count since determinism does not depend on it.
    const TEST_ITERATIONS: u32 = 1_000;

    #[test]
    fn test_key_derivation_deterministic() {
        let salt = [1u8; SALT_LENGTH];

        let key1 = derive_key("master-password", &salt, TEST_ITERATIONS).unwrap();
        let key2 = derive_key("master-password", &salt, TEST_ITERATIONS).unwrap();

        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let key1 = derive_key("master-password", &[1u8; SALT_LENGTH], TEST_ITERATIONS).unwrap();
        let key2 = derive_key("master-password", &[2u8; SALT_LENGTH], TEST_ITERATIONS).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_password_different_key() {
        let salt = [3u8; SALT_LENGTH];

        let key1 = derive_key("password-one", &salt, TEST_ITERATIONS).unwrap();
        let key2 = derive_key("password-two", &salt, TEST_ITERATIONS).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_iterations_different_key() {
        let salt = [4u8; SALT_LENGTH];

        let key1 = derive_key("master-password", &salt, TEST_ITERATIONS).unwrap();
        let key2 = derive_key("master-password", &salt, TEST_ITERATIONS + 1).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_empty_password_rejected() {
        let result = derive_key("", &[0u8; SALT_LENGTH], TEST_ITERATIONS);
        assert!(matches!(result, Err(QuillError::InvalidInput(_))));
    }

    #[test]
    fn test_wrong_salt_length_rejected() {
        let result = derive_key("master-password", &[0u8; 8], TEST_ITERATIONS);
        assert!(matches!(result, Err(QuillError::InvalidInput(_))));

        let result = derive_key("master-password", &[0u8; 32], TEST_ITERATIONS);
        assert!(matches!(result, Err(QuillError::InvalidInput(_))));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let result = derive_key("master-password", &[0u8; SALT_LENGTH], 0);
        assert!(matches!(result, Err(QuillError::InvalidInput(_))));
    }

    #[test]
    fn test_key_length() {
        let key = derive_key("master-password", &[5u8; SALT_LENGTH], TEST_ITERATIONS).unwrap();
        assert_eq!(key.as_bytes().len(), KEY_LENGTH);
    }

    #[test]
    fn test_iteration_floor() {
        // Brute-force resistance depends on the production count staying large.
        assert!(PBKDF2_ITERATIONS >= 10_000);
    }
}
