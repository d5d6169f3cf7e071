//! Vault module — the encrypted container.
//!
//! This module provides:
//! - Record framing: encrypt-and-frame / unframe-and-decrypt (`codec`)
//! - The `Entry` payload type and its JSON encoding (`entry`)
//! - The on-disk container with its open/lock/unlock/update lifecycle
//!   (`file`)

pub mod codec;
pub mod entry;
pub mod file;

// Re-export the most commonly used items.
pub use entry::{decode_entries, encode_entries, Entry};
pub use file::{UnlockOutcome, VaultFile};
