//! # Quill Core
//!
//! Core library for Quill - a local, offline note store where every note
//! is encrypted with a key derived from a single master password.
//!
//! This crate provides the cryptographic protocol and storage layer
//! independent of any user interface.
//!
//! ## Architecture
//!
//! - **crypto**: key derivation (PBKDF2-HMAC-SHA256) and authenticated
//!   encryption (XChaCha20-Poly1305)
//! - **secret_store**: OS-keyring-backed slots for the salt and the
//!   password verification probe
//! - **verifier**: master password establishment and verification
//! - **store**: one encrypted blob per note plus a plaintext listing index
//! - **session**: the UI-facing handle that owns the key for its lifetime
//!
//! ## Security model
//!
//! We defend against:
//! - Theft of the note files at rest
//! - Offline brute-force attacks on the master password
//!
//! We do NOT defend against:
//! - A compromised OS / keylogger
//! - Access to an unlocked session or process memory
//!
//! Losing the master password is unrecoverable data loss by design; there
//! is no recovery path and no key escrow.

pub mod crypto;
pub mod error;
pub mod fs;
pub mod secret_store;
pub mod session;
pub mod store;
pub mod verifier;

pub use error::{QuillError, Result};
pub use session::Session;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
