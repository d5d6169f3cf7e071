//! The vault's plaintext payload: an ordered list of credential entries.
//!
//! On disk (once fully unlocked) the payload is UTF-8 JSON — an array of
//! 3-element string arrays `[name, username, password]`.

use crate::errors::{Result, VaultError};

/// One credential entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub username: String,
    pub password: String,
}

impl Entry {
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Parse a decrypted payload into entries.
///
/// The payload must be a non-empty JSON array of `[name, username,
/// password]` string triples; anything else is `InvalidPayload`.
pub fn decode_entries(plaintext: &[u8]) -> Result<Vec<Entry>> {
    let rows: Vec<(String, String, String)> = serde_json::from_slice(plaintext).map_err(|e| {
        VaultError::InvalidPayload(format!(
            "expected a list of [name, username, password] rows: {e}"
        ))
    })?;

    if rows.is_empty() {
        return Err(VaultError::InvalidPayload("entry list is empty".into()));
    }

    Ok(rows
        .into_iter()
        .map(|(name, username, password)| Entry {
            name,
            username,
            password,
        })
        .collect())
}

/// Serialize entries into the payload format consumed by
/// [`decode_entries`].
pub fn encode_entries(entries: &[Entry]) -> Result<Vec<u8>> {
    let rows: Vec<[&str; 3]> = entries
        .iter()
        .map(|e| [e.name.as_str(), e.username.as_str(), e.password.as_str()])
        .collect();

    serde_json::to_vec(&rows)
        .map_err(|e| VaultError::InvalidPayload(format!("failed to serialize entries: {e}")))
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_then_decode_round_trips() {
        let entries = vec![
            Entry::new("site", "alice", "p@ss"),
            Entry::new("mail", "bob", "hunter2"),
        ];
        let payload = encode_entries(&entries).unwrap();
        assert_eq!(decode_entries(&payload).unwrap(), entries);
    }

    #[test]
    fn decode_accepts_the_reference_payload() {
        let payload = br#"[["site","alice","p@ss"]]"#;
        let entries = decode_entries(payload).unwrap();
        assert_eq!(entries, vec![Entry::new("site", "alice", "p@ss")]);
    }

    #[test]
    fn decode_rejects_non_json() {
        assert!(matches!(
            decode_entries(b"not json"),
            Err(VaultError::InvalidPayload(_))
        ));
    }

    #[test]
    fn decode_rejects_wrong_arity_rows() {
        assert!(decode_entries(br#"[["only","two"]]"#).is_err());
        assert!(decode_entries(br#"[["a","b","c","d"]]"#).is_err());
    }

    #[test]
    fn decode_rejects_non_string_fields() {
        assert!(decode_entries(br#"[["site","alice",42]]"#).is_err());
    }

    #[test]
    fn decode_rejects_empty_list() {
        assert!(matches!(
            decode_entries(b"[]"),
            Err(VaultError::InvalidPayload(_))
        ));
    }
}
