//! The on-disk vault container.
//!
//! `VaultFile` owns an opened path and an immutable snapshot of its
//! bytes, read whole once at open time.  All operations work on that
//! snapshot — concurrent external modification of the file is never
//! observed by a live handle; reopen to pick up outside changes.
//!
//! On top of the record codec the file layer adds a second permutation
//! pass with the same fixed seed:
//!
//! ```text
//! file bytes = permute( codec::lock(payload, password), seed )
//! ```
//!
//! Writes go through a same-directory temp file and an atomic rename, so
//! a crash mid-write leaves the previous file intact rather than a
//! truncated, unrecoverable one.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::FormatProfile;
use crate::errors::{Result, VaultError};
use crate::permute::{permute, unpermute};
use crate::vault::codec;
use crate::vault::entry::{self, Entry};

/// Suffix a plaintext file gains after one `lock` call.
///
/// Purely conventional: a `.lock` file and one renamed to a canonical
/// resting name are byte-for-byte identical, and every operation here is
/// extension-agnostic.
const LOCKED_SUFFIX: &str = ".lock";

/// Result of an `unlock` call.
///
/// A record can legitimately decrypt to zero bytes (a vault created from
/// an empty file).  Nothing sensible can be written in that case, so the
/// caller gets an explicit outcome to handle instead of a silently
/// skipped write.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// Plaintext was recovered and written to the contained path.
    Written(PathBuf),
    /// The record decrypted to an empty payload; no file was written.
    Empty,
}

/// An opened vault container.
#[derive(Debug)]
pub struct VaultFile {
    /// Path the snapshot was read from.
    path: PathBuf,

    /// The file bytes as they were at open time.
    snapshot: Vec<u8>,
}

impl VaultFile {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Open `path` and capture its byte snapshot.
    ///
    /// The file is read whole, exactly once; later operations never
    /// re-read it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(VaultError::VaultNotFound(path.to_path_buf()));
        }

        let snapshot = fs::read(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            snapshot,
        })
    }

    // ------------------------------------------------------------------
    // Lifecycle operations
    // ------------------------------------------------------------------

    /// Encrypt the snapshot and write the sealed container.
    ///
    /// The snapshot is treated as plaintext: it is codec-locked with a
    /// fresh salt and nonce, wrapped in the outer permutation pass, and
    /// written to `out_path` (default: the opened path with `.lock`
    /// appended).  Returns the written path.
    pub fn lock(&self, password: &str, out_path: Option<&Path>) -> Result<PathBuf> {
        let profile = FormatProfile::global();

        let record = codec::lock(&self.snapshot, password)?;
        let bytes = permute(&record, profile.seed());

        let out = match out_path {
            Some(p) => p.to_path_buf(),
            None => self.locked_path(),
        };
        write_atomic(&out, &bytes)?;
        Ok(out)
    }

    /// Decrypt the snapshot and write the recovered plaintext.
    ///
    /// Default `out_path` is the opened path with a trailing `.lock`
    /// removed.  An empty decrypted payload returns
    /// [`UnlockOutcome::Empty`] without writing anything.
    pub fn unlock(&self, password: &str, out_path: Option<&Path>) -> Result<UnlockOutcome> {
        let plaintext = self.open_record(password)?;
        if plaintext.is_empty() {
            return Ok(UnlockOutcome::Empty);
        }

        let out = match out_path {
            Some(p) => p.to_path_buf(),
            None => self.unlocked_path(),
        };
        write_atomic(&out, &plaintext)?;
        Ok(UnlockOutcome::Written(out))
    }

    /// Re-encrypt the container in place with `new_content` as payload.
    ///
    /// The stored record is first decrypted to prove the password; a
    /// wrong password fails with `AuthenticationFailed` and nothing is
    /// written.  On success the new payload is sealed with a **fresh**
    /// salt and nonce — no material from the old record survives — and
    /// the opened path is atomically replaced.
    ///
    /// The in-memory snapshot still holds the pre-update bytes; reopen
    /// the path to operate on the new record.
    pub fn update(&self, password: &str, new_content: &[u8]) -> Result<()> {
        self.open_record(password)?;

        let profile = FormatProfile::global();
        let record = codec::lock(new_content, password)?;
        write_atomic(&self.path, &permute(&record, profile.seed()))
    }

    /// Decrypt the snapshot and parse it as credential entries.
    pub fn entries(&self, password: &str) -> Result<Vec<Entry>> {
        let plaintext = self.open_record(password)?;
        entry::decode_entries(&plaintext)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the opened path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Strip the outer permutation pass and unlock the inner record.
    fn open_record(&self, password: &str) -> Result<Vec<u8>> {
        let profile = FormatProfile::global();
        let record = unpermute(&self.snapshot, profile.seed());
        codec::unlock(&record, password)
    }

    /// The opened path with the `.lock` suffix appended.
    fn locked_path(&self) -> PathBuf {
        let mut os = self.path.clone().into_os_string();
        os.push(LOCKED_SUFFIX);
        PathBuf::from(os)
    }

    /// The opened path with a trailing `.lock` suffix removed, if any.
    fn unlocked_path(&self) -> PathBuf {
        match self.path.to_str().and_then(|s| s.strip_suffix(LOCKED_SUFFIX)) {
            Some(stripped) => PathBuf::from(stripped),
            None => self.path.clone(),
        }
    }
}

/// Write `bytes` to `path` atomically: temp file in the same directory,
/// then rename.  Readers never see a half-written vault.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, bytes)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}
