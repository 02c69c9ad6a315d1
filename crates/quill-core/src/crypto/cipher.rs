//! Authenticated encryption for note content.
//!
//! Uses XChaCha20-Poly1305. Key size: 32 bytes. Nonce: 24 bytes, random
//! per call. Tag: 16 bytes, appended to the ciphertext.
//!
//! Blob wire format (a single self-delimiting string):
//!
//! ```text
//! <base64 nonce> ":" <base64 ciphertext || tag>
//! ```
//!
//! Base64 never emits `:`, so the first delimiter splits the blob
//! unambiguously.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chacha20poly1305::{
    aead::{Aead, AeadCore, KeyInit, OsRng},
    XChaCha20Poly1305, XNonce,
};

use crate::crypto::key::DerivedKey;
use crate::error::{QuillError, Result};

/// Nonce length required by XChaCha20-Poly1305.
const NONCE_LENGTH: usize = 24;

/// Delimiter between the encoded nonce and the encoded ciphertext.
const BLOB_DELIMITER: char = ':';

/// Encrypt `plaintext` under `key` with a fresh random nonce.
///
/// Two calls with identical inputs produce different blobs (different
/// nonces); both decrypt back to the same plaintext.
///
/// # Errors
///
/// Returns `QuillError::InvalidInput` for empty plaintext (an empty
/// decryption result is indistinguishable from failure, so it is rejected
/// on the way in) and `QuillError::Crypto` if encryption itself fails.
pub fn encrypt(plaintext: &str, key: &DerivedKey) -> Result<String> {
    if plaintext.is_empty() {
        return Err(QuillError::InvalidInput(
            "Plaintext cannot be empty".to_string(),
        ));
    }

    let cipher = XChaCha20Poly1305::new_from_slice(key.as_bytes())
        .map_err(|e| QuillError::Crypto(format!("Cipher init failed: {}", e)))?;

    let nonce = XChaCha20Poly1305::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext.as_bytes())
        .map_err(|_| QuillError::Crypto("Encryption failed".to_string()))?;

    Ok(format!(
        "{}{}{}",
        STANDARD.encode(nonce.as_slice()),
        BLOB_DELIMITER,
        STANDARD.encode(&ciphertext)
    ))
}

/// Decrypt a blob produced by [`encrypt`].
///
/// Returns `None` for every failure mode: missing delimiter, undecodable
/// halves, wrong-length nonce, failed authentication (wrong key or
/// tampered ciphertext), non-UTF-8 or empty plaintext. A failed integrity
/// check is treated identically to a wrong key; garbled output is never
/// returned as if valid.
pub fn decrypt(blob: &str, key: &DerivedKey) -> Option<String> {
    let (nonce_part, ciphertext_part) = blob.split_once(BLOB_DELIMITER)?;

    let nonce_bytes = STANDARD.decode(nonce_part).ok()?;
    if nonce_bytes.len() != NONCE_LENGTH {
        return None;
    }
    let ciphertext = STANDARD.decode(ciphertext_part).ok()?;

    let cipher = XChaCha20Poly1305::new_from_slice(key.as_bytes()).ok()?;
    let nonce = XNonce::from_slice(&nonce_bytes);
    let plaintext_bytes = cipher.decrypt(nonce, ciphertext.as_slice()).ok()?;

    let plaintext = String::from_utf8(plaintext_bytes).ok()?;
    if plaintext.is_empty() {
        return None;
    }

    Some(plaintext)
}
