//! PassVault — a password-protected vault container.
//!
//! The on-disk format is a single self-contained record: the payload is
//! encrypted with AES-256-EAX under a PBKDF2-derived key, framed together
//! with its tag, nonce and salt, and wrapped in two deterministic
//! byte-permutation passes.  The permutation layers are format obfuscation
//! only — the sole security boundary is the authenticated cipher and the
//! password-derived key.

pub mod config;
pub mod crypto;
pub mod errors;
pub mod permute;
pub mod vault;
