use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Authentication failed — wrong password or corrupted vault data")]
    AuthenticationFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Record format errors ---
    #[error("Malformed vault record: expected 4 separator-delimited fields, found {parts}")]
    MalformedRecord { parts: usize },

    // --- Payload errors ---
    #[error("Invalid vault payload: {0}")]
    InvalidPayload(String),

    // --- File errors ---
    #[error("Vault not found at {0}")]
    VaultNotFound(PathBuf),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, VaultError>;
