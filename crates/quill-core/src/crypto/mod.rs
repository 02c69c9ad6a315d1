//! Cryptographic operations for Quill.
//!
//! This module provides key derivation and authenticated encryption using
//! well-audited RustCrypto libraries:
//! - **PBKDF2-HMAC-SHA256**: deliberately slow key derivation
//! - **XChaCha20-Poly1305**: authenticated encryption with a random
//!   24-byte nonce per call
//!
//! Sensitive key material is zeroized from memory on drop, and the derived
//! key is never written to persistent storage.

pub mod cipher;
pub mod kdf;
pub mod key;
pub mod password;

pub use kdf::{derive_key, PBKDF2_ITERATIONS, SALT_LENGTH};
pub use key::DerivedKey;
pub use password::validate_password;
