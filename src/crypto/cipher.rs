//! AES-256-EAX authenticated encryption.
//!
//! Each call to `encrypt` generates a fresh random 16-byte nonce and
//! returns ciphertext, tag and nonce as separate fields — the vault
//! record stores them detached rather than concatenated.  `decrypt`
//! verifies the 128-bit tag before any plaintext is returned; a failed
//! verification yields `AuthenticationFailed` and nothing else.

use aes::Aes256;
use eax::aead::consts::U16;
use eax::aead::generic_array::GenericArray;
use eax::aead::{AeadInPlace, KeyInit};
use eax::Eax;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::crypto::keys::DerivedKey;
use crate::errors::{Result, VaultError};

/// Size of the EAX nonce in bytes.
pub const NONCE_LEN: usize = 16;

/// Size of the authentication tag in bytes.
pub const TAG_LEN: usize = 16;

type Aes256Eax = Eax<Aes256, U16>;

/// Output of one `encrypt` call.
///
/// The three fields are framed into the vault record individually; a
/// matching `decrypt` consumes them in the same shape.
pub struct EncryptedMessage {
    pub ciphertext: Vec<u8>,
    pub tag: [u8; TAG_LEN],
    pub nonce: [u8; NONCE_LEN],
}

/// Encrypt `plaintext` with a derived 32-byte key.
///
/// The nonce comes from the OS CSPRNG and is never reused under a key —
/// every call draws a fresh one.
pub fn encrypt(plaintext: &[u8], key: &DerivedKey) -> Result<EncryptedMessage> {
    let cipher = Aes256Eax::new_from_slice(key.as_bytes())
        .map_err(|e| VaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);

    // Encrypt in place, keeping the tag detached.
    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(GenericArray::from_slice(&nonce), b"", &mut buffer)
        .map_err(|e| VaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    Ok(EncryptedMessage {
        ciphertext: buffer,
        tag: tag.into(),
        nonce,
    })
}

/// Decrypt a detached (ciphertext, tag, nonce) triple.
///
/// Fails with `AuthenticationFailed` on any tag mismatch — wrong
/// password, wrong key, or corrupted ciphertext all look the same from
/// here.  No partial plaintext ever escapes a failed verification.
pub fn decrypt(ciphertext: &[u8], tag: &[u8], nonce: &[u8], key: &DerivedKey) -> Result<Vec<u8>> {
    // A record whose nonce or tag is not the fixed size cannot have been
    // produced by `encrypt`; treat it like any other failed verification.
    if nonce.len() != NONCE_LEN || tag.len() != TAG_LEN {
        return Err(VaultError::AuthenticationFailed);
    }

    let cipher = Aes256Eax::new_from_slice(key.as_bytes())
        .map_err(|_| VaultError::AuthenticationFailed)?;

    let mut buffer = ciphertext.to_vec();
    cipher
        .decrypt_in_place_detached(
            GenericArray::from_slice(nonce),
            b"",
            &mut buffer,
            GenericArray::from_slice(tag),
        )
        .map_err(|_| VaultError::AuthenticationFailed)?;

    Ok(buffer)
}
