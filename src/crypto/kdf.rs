//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The key material is the UTF-8 bytes of the password with the format
//! profile's pepper appended, stretched over the per-record random salt.
//! Iteration count and output size are fixed by the vault format: any
//! change produces keys that cannot open previously written files.

use hmac::Hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::config::FormatProfile;
use crate::crypto::keys::{DerivedKey, KEY_LEN};
use crate::errors::{Result, VaultError};

/// Length of the salt in bytes (256 bits).
pub const SALT_LEN: usize = 32;

/// PBKDF2 iteration count fixed by the vault format.
const PBKDF2_ROUNDS: u32 = 100_000;

/// Derive a 32-byte key from a password and salt.
///
/// The same password + salt always produce the same key.  There is no
/// caching: the full 100k-iteration derivation runs on every call, so
/// callers doing several operations under one password should batch them
/// rather than re-derive per call.
pub fn derive_key(password: &str, salt: &[u8]) -> Result<DerivedKey> {
    let profile = FormatProfile::global();

    // password bytes ++ pepper — the exact material the format derives from.
    let mut material = Vec::with_capacity(password.len() + profile.pepper().len());
    material.extend_from_slice(password.as_bytes());
    material.extend_from_slice(profile.pepper());

    let mut key = [0u8; KEY_LEN];
    let outcome = pbkdf2::pbkdf2::<Hmac<Sha256>>(&material, salt, PBKDF2_ROUNDS, &mut key);
    material.zeroize();
    outcome.map_err(|e| VaultError::KeyDerivationFailed(format!("PBKDF2 failed: {e}")))?;

    Ok(DerivedKey::new(key))
}

/// Generate a cryptographically random 32-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}

// ── Tests ────────────────────────────────────────────────────────────
