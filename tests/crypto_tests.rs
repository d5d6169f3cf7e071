//! Integration tests for the PassVault crypto module.

use passvault::crypto::keys::DerivedKey;
use passvault::crypto::{decrypt, derive_key, encrypt, generate_salt};

// ---------------------------------------------------------------------------
// Encryption round-trip
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let key = DerivedKey::new([0xABu8; 32]);
    let plaintext = b"[[\"site\",\"alice\",\"p@ss\"]]";

    let message = encrypt(plaintext, &key).expect("encrypt should succeed");

    // EAX is length-preserving with a detached tag.
    assert_eq!(message.ciphertext.len(), plaintext.len());
    assert_eq!(message.tag.len(), 16);
    assert_eq!(message.nonce.len(), 16);

    let recovered = decrypt(&message.ciphertext, &message.tag, &message.nonce, &key)
        .expect("decrypt should succeed");
    assert_eq!(recovered, plaintext);
}

#[test]
fn encrypt_empty_plaintext_roundtrip() {
    let key = DerivedKey::new([0x01u8; 32]);

    let message = encrypt(b"", &key).expect("encrypt");
    assert!(message.ciphertext.is_empty());

    let recovered = decrypt(&message.ciphertext, &message.tag, &message.nonce, &key)
        .expect("decrypt");
    assert!(recovered.is_empty());
}

#[test]
fn encrypt_produces_fresh_nonce_each_time() {
    let key = DerivedKey::new([0xCDu8; 32]);
    let plaintext = b"same plaintext";

    let m1 = encrypt(plaintext, &key).expect("encrypt 1");
    let m2 = encrypt(plaintext, &key).expect("encrypt 2");

    // A fresh random nonce per call means everything downstream differs.
    assert_ne!(m1.nonce, m2.nonce, "nonce must never repeat across calls");
    assert_ne!(m1.ciphertext, m2.ciphertext);
}

// ---------------------------------------------------------------------------
// Authentication failures
// ---------------------------------------------------------------------------

#[test]
fn decrypt_with_wrong_key_fails() {
    let key = DerivedKey::new([0x11u8; 32]);
    let wrong_key = DerivedKey::new([0x22u8; 32]);

    let message = encrypt(b"top secret", &key).expect("encrypt");
    let result = decrypt(&message.ciphertext, &message.tag, &message.nonce, &wrong_key);

    assert!(result.is_err(), "decryption with the wrong key must fail");
}

#[test]
fn decrypt_with_corrupted_ciphertext_fails() {
    let key = DerivedKey::new([0xBBu8; 32]);

    let mut message = encrypt(b"some value", &key).expect("encrypt");
    message.ciphertext[3] ^= 0xFF;

    let result = decrypt(&message.ciphertext, &message.tag, &message.nonce, &key);
    assert!(result.is_err(), "corrupted ciphertext must fail auth check");
}

#[test]
fn decrypt_with_corrupted_tag_fails() {
    let key = DerivedKey::new([0xEEu8; 32]);

    let mut message = encrypt(b"some value", &key).expect("encrypt");
    message.tag[0] ^= 0x01;

    let result = decrypt(&message.ciphertext, &message.tag, &message.nonce, &key);
    assert!(result.is_err(), "corrupted tag must fail auth check");
}

#[test]
fn decrypt_with_wrong_size_nonce_fails() {
    let key = DerivedKey::new([0x33u8; 32]);
    let message = encrypt(b"value", &key).expect("encrypt");

    let result = decrypt(&message.ciphertext, &message.tag, &message.nonce[..8], &key);
    assert!(result.is_err(), "a truncated nonce must be rejected");
}

// ---------------------------------------------------------------------------
// End-to-end: password -> derived key -> encrypt/decrypt
// ---------------------------------------------------------------------------

#[test]
fn full_crypto_pipeline() {
    let salt = generate_salt();

    // Step 1: Derive a key from the password.
    let key = derive_key("hunter2", &salt).expect("derive key");

    // Step 2: Encrypt a payload.
    let plaintext = b"[[\"mail\",\"bob\",\"hunter2\"]]";
    let message = encrypt(plaintext, &key).expect("encrypt");

    // Step 3: Re-derive from the same password + salt and decrypt.
    let key_again = derive_key("hunter2", &salt).expect("derive again");
    let recovered = decrypt(&message.ciphertext, &message.tag, &message.nonce, &key_again)
        .expect("decrypt");
    assert_eq!(recovered, plaintext.to_vec());
}
