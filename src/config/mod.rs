//! Configuration — the vault format profile.
//!
//! This module provides:
//! - `FormatProfile`: the pepper/separator constants of a vault
//!   generation, loaded once per process (`profile`)

pub mod profile;

// Re-export the most commonly used items.
pub use profile::FormatProfile;
