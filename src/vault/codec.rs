//! Vault record framing.
//!
//! A record is built in three steps: encrypt the payload, join
//! `[ciphertext, tag, nonce, salt]` with the profile separator, and
//! permute the joined buffer with the fixed format seed.  `unlock` runs
//! the same steps in reverse.
//!
//! The framing splits on a literal 32-byte separator.  That is unsound
//! in general — ciphertext, tag, nonce and salt are unconstrained binary
//! and one of them can contain the separator sequence by chance — but it
//! is what every existing vault file was written with, so it is kept
//! byte-exact.  A collision surfaces as `MalformedRecord` with the
//! observed part count; it is never repaired heuristically.

use crate::config::FormatProfile;
use crate::crypto::{cipher, kdf};
use crate::errors::{Result, VaultError};
use crate::permute::{permute, unpermute};

/// Number of separator-delimited fields in a framed record.
const RECORD_FIELDS: usize = 4;

/// Encrypt `content` under `password` into a framed, permuted record.
///
/// Every call draws a fresh salt and nonce; nothing from any previous
/// record is reused.
pub fn lock(content: &[u8], password: &str) -> Result<Vec<u8>> {
    let profile = FormatProfile::global();

    let salt = kdf::generate_salt();
    let key = kdf::derive_key(password, &salt)?;
    let message = cipher::encrypt(content, &key)?;

    let fields: [&[u8]; 4] = [&message.ciphertext, &message.tag, &message.nonce, &salt];
    let framed = join_fields(&fields, profile.separator());

    Ok(permute(&framed, profile.seed()))
}

/// Recover the plaintext from a record produced by [`lock`].
///
/// Fails with `MalformedRecord` when the unpermuted buffer does not
/// split into exactly four fields, and with `AuthenticationFailed` when
/// the tag does not verify under the derived key.
pub fn unlock(blob: &[u8], password: &str) -> Result<Vec<u8>> {
    let profile = FormatProfile::global();

    let framed = unpermute(blob, profile.seed());
    let fields = split_fields(&framed, profile.separator());
    if fields.len() != RECORD_FIELDS {
        return Err(VaultError::MalformedRecord {
            parts: fields.len(),
        });
    }

    let (ciphertext, tag, nonce, salt) = (fields[0], fields[1], fields[2], fields[3]);
    let key = kdf::derive_key(password, salt)?;
    cipher::decrypt(ciphertext, tag, nonce, &key)
}

/// Join fields with `sep` between each pair.
fn join_fields(fields: &[&[u8]], sep: &[u8]) -> Vec<u8> {
    let payload: usize = fields.iter().map(|f| f.len()).sum();
    let mut out = Vec::with_capacity(payload + sep.len() * fields.len().saturating_sub(1));
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.extend_from_slice(sep);
        }
        out.extend_from_slice(field);
    }
    out
}

/// Split on non-overlapping occurrences of `sep`, left to right, keeping
/// empty fields.
fn split_fields<'a>(data: &'a [u8], sep: &[u8]) -> Vec<&'a [u8]> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i + sep.len() <= data.len() {
        if &data[i..i + sep.len()] == sep {
            parts.push(&data[start..i]);
            i += sep.len();
            start = i;
        } else {
            i += 1;
        }
    }
    parts.push(&data[start..]);
    parts
}

// ── Tests ────────────────────────────────────────────────────────────
