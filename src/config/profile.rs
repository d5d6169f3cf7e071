//! The vault format profile: pepper and separator constants.
//!
//! Every reader and writer of a vault generation must agree on two
//! 32-byte constants:
//!
//! - the **pepper**, appended to every password before key derivation
//!   (its byte sum is also the fixed seed of both permutation passes);
//! - the **separator**, joining the four record fields before
//!   permutation.
//!
//! Neither constant is secret — the pepper ships inside every binary and
//! the permutation seed derived from it is public knowledge.  They are
//! format parameters, kept in one process-wide immutable profile instead
//! of literals scattered through the crypto code.  Changing either value
//! starts a new vault generation that cannot open files written under
//! the old one.

use std::path::Path;
use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;

use crate::errors::{Result, VaultError};

/// Length of the pepper and separator constants in bytes.
const CONST_LEN: usize = 32;

/// The pepper of the current vault generation.
///
/// Byte-identical to every previously written vault — do not touch.
const DEFAULT_PEPPER: [u8; CONST_LEN] = [
    0x6e, 0x65, 0x61, 0x4e, 0xf7, 0xb8, 0xf9, 0xe3, 0x4d, 0x2f, 0x77, 0xfd, 0x86, 0x7b, 0xd0,
    0x36, 0x07, 0xd2, 0xb1, 0xbf, 0x44, 0x22, 0x49, 0xaf, 0xd0, 0xa8, 0xc5, 0xc9, 0x4e, 0xba,
    0x7e, 0x88,
];

/// The field separator of the current vault generation.
const DEFAULT_SEPARATOR: [u8; CONST_LEN] = [
    0xb2, 0x5d, 0x0f, 0xd9, 0x3f, 0xbf, 0x5e, 0x61, 0x49, 0xc3, 0x6b, 0x62, 0x0b, 0x6d, 0xa0,
    0xf9, 0xa1, 0x7b, 0x90, 0xfa, 0xbd, 0x27, 0xc2, 0x15, 0xa5, 0x63, 0x11, 0xde, 0xec, 0xd6,
    0xd7, 0xaa,
];

/// The format constants of one vault generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatProfile {
    pepper: [u8; CONST_LEN],
    separator: [u8; CONST_LEN],
}

/// Raw TOML shape of a profile override file.  Both fields are optional
/// and base64-encoded; missing fields fall back to the compiled-in
/// generation.
#[derive(Debug, Deserialize)]
struct RawProfile {
    #[serde(default)]
    pepper: Option<String>,
    #[serde(default)]
    separator: Option<String>,
}

static GLOBAL: OnceLock<FormatProfile> = OnceLock::new();

impl Default for FormatProfile {
    fn default() -> Self {
        Self {
            pepper: DEFAULT_PEPPER,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl FormatProfile {
    /// Name of the override file we look for in a profile directory.
    const FILE_NAME: &'static str = ".passvault.toml";

    /// Build a profile from explicit constants.
    pub fn new(pepper: [u8; CONST_LEN], separator: [u8; CONST_LEN]) -> Self {
        Self { pepper, separator }
    }

    /// Load a profile from `<dir>/.passvault.toml`.
    ///
    /// If the file does not exist, the compiled-in generation is
    /// returned.  If the file exists but cannot be parsed, or a field is
    /// not exactly 32 base64-encoded bytes, an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let raw: RawProfile = toml::from_str(&contents).map_err(|e| {
            VaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        let mut profile = Self::default();
        if let Some(encoded) = raw.pepper {
            profile.pepper = decode_constant("pepper", &encoded)?;
        }
        if let Some(encoded) = raw.separator {
            profile.separator = decode_constant("separator", &encoded)?;
        }
        Ok(profile)
    }

    /// Install `profile` as the process-wide profile.
    ///
    /// Must be called before the first vault operation; once any caller
    /// has observed the global profile it is frozen for the lifetime of
    /// the process.
    pub fn install(profile: FormatProfile) -> Result<()> {
        GLOBAL
            .set(profile)
            .map_err(|_| VaultError::ConfigError("format profile already installed".into()))
    }

    /// The process-wide profile, falling back to the compiled-in
    /// generation when none was installed.
    pub fn global() -> &'static FormatProfile {
        GLOBAL.get_or_init(FormatProfile::default)
    }

    /// The pepper appended to passwords before key derivation.
    pub fn pepper(&self) -> &[u8; CONST_LEN] {
        &self.pepper
    }

    /// The separator joining the four record fields.
    pub fn separator(&self) -> &[u8; CONST_LEN] {
        &self.separator
    }

    /// The fixed permutation seed: the sum of the pepper bytes.
    pub fn seed(&self) -> u32 {
        self.pepper.iter().map(|&b| u32::from(b)).sum()
    }
}

/// Decode a base64 profile field into an exactly-32-byte constant.
fn decode_constant(field: &str, encoded: &str) -> Result<[u8; CONST_LEN]> {
    let bytes = BASE64
        .decode(encoded)
        .map_err(|e| VaultError::ConfigError(format!("{field} is not valid base64: {e}")))?;

    <[u8; CONST_LEN]>::try_from(bytes.as_slice()).map_err(|_| {
        VaultError::ConfigError(format!(
            "{field} must decode to exactly {CONST_LEN} bytes, got {}",
            bytes.len()
        ))
    })
}

// ── Tests ────────────────────────────────────────────────────────────
