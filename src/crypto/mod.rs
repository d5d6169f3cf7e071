//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - AES-256-EAX authenticated encryption with detached tag and nonce
//!   (`cipher`)
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//! - A zeroizing wrapper for derived keys (`keys`)

pub mod cipher;
pub mod kdf;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_key, ...};
pub use cipher::{decrypt, encrypt, EncryptedMessage};
pub use kdf::{derive_key, generate_salt};
pub use keys::DerivedKey;
