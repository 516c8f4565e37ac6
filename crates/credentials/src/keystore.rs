//! Passphrase-protected container for certificate/private-key entries.
//!
//! Responsibilities:
//! - Hold aliased X.509 certificate (DER) + private key (DER) pairs.
//! - Seal private keys at rest with AES-256-GCM under an Argon2id-derived key.
//! - Unseal keys only when the correct passphrase is presented.
//!
//! Does NOT handle:
//! - Certificate parsing or validation (the DER bytes are opaque here).
//! - Persistence of the keystore itself (see the store trait for lookup).
//!
//! Invariants:
//! - Entries keep insertion order, so "first alias" is deterministic.
//! - A wrong passphrase always surfaces as `KeyUnlock`, never as corrupt data.
//! - Unsealed key bytes are returned to the caller and never cached.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use argon2::Argon2;
use rand::RngExt;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{CredentialError, Result};

/// A private key sealed under a passphrase-derived key.
#[derive(Debug, Clone)]
struct SealedKey {
    ciphertext: Vec<u8>,
    nonce: [u8; 12],
    salt: [u8; 16],
}

/// One aliased certificate/private-key pair.
#[derive(Debug, Clone)]
struct KeystoreEntry {
    alias: String,
    certificate_der: Vec<u8>,
    key: SealedKey,
}

/// A container holding one or more aliased certificate/private-key entries,
/// each protected by a passphrase.
#[derive(Debug, Clone, Default)]
pub struct Keystore {
    entries: Vec<KeystoreEntry>,
}

impl Keystore {
    /// Create an empty keystore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, sealing the private key under the passphrase.
    ///
    /// Replaces any existing entry with the same alias in place, keeping its
    /// position in the enumeration order.
    pub fn insert(
        &mut self,
        alias: impl Into<String>,
        certificate_der: Vec<u8>,
        key_der: &[u8],
        passphrase: &SecretString,
    ) -> Result<()> {
        let alias = alias.into();
        let salt = generate_salt();
        let key = derive_key(passphrase, &salt)?;
        let (ciphertext, nonce) = seal(key_der, &key)?;

        let entry = KeystoreEntry {
            alias: alias.clone(),
            certificate_der,
            key: SealedKey {
                ciphertext,
                nonce,
                salt,
            },
        };
        match self.entries.iter_mut().find(|e| e.alias == alias) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        Ok(())
    }

    /// Iterate over aliases in insertion order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.alias.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the keystore holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first alias in insertion order.
    ///
    /// The single-entry keystore is the expected case; with multiple entries
    /// the first inserted one is selected, deterministically. An empty
    /// keystore is an error: there is no alias to select, and silently
    /// producing an unauthenticated configuration would mask the problem.
    pub fn first_alias(&self) -> Result<&str> {
        self.entries
            .first()
            .map(|e| e.alias.as_str())
            .ok_or_else(|| CredentialError::KeystoreAccess("keystore has no aliases".to_string()))
    }

    /// The DER encoding of the certificate stored under `alias`.
    pub fn certificate_der(&self, alias: &str) -> Result<&[u8]> {
        let entry = self.entry(alias)?;
        Ok(&entry.certificate_der)
    }

    /// Unseal and return the DER encoding of the private key stored under
    /// `alias`. Requires the passphrase the entry was sealed with.
    pub fn private_key_der(&self, alias: &str, passphrase: &SecretString) -> Result<Vec<u8>> {
        let entry = self.entry(alias)?;
        let key = derive_key(passphrase, &entry.key.salt)?;
        unseal(&entry.key.ciphertext, &key, &entry.key.nonce).map_err(|_| {
            CredentialError::KeyUnlock {
                alias: alias.to_string(),
            }
        })
    }

    fn entry(&self, alias: &str) -> Result<&KeystoreEntry> {
        self.entries
            .iter()
            .find(|e| e.alias == alias)
            .ok_or_else(|| {
                CredentialError::KeystoreAccess(format!("no entry for alias '{alias}'"))
            })
    }
}

/// Derives a 32-byte sealing key from the passphrase and salt using Argon2id.
fn derive_key(passphrase: &SecretString, salt: &[u8]) -> Result<[u8; 32]> {
    let argon2 = Argon2::default();
    let mut key = [0u8; 32];
    argon2
        .hash_password_into(passphrase.expose_secret().as_bytes(), salt, &mut key)
        .map_err(|e| CredentialError::UnsupportedAlgorithm(e.to_string()))?;
    Ok(key)
}

/// Seals data with AES-256-GCM. Returns (ciphertext + tag, nonce).
fn seal(data: &[u8], key: &[u8; 32]) -> Result<(Vec<u8>, [u8; 12])> {
    let cipher = Aes256Gcm::new(key.into());
    let mut nonce_bytes = [0u8; 12];
    rand::rng().fill(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, data)
        .map_err(|e| CredentialError::UnsupportedAlgorithm(e.to_string()))?;

    Ok((ciphertext, nonce_bytes))
}

/// Unseals AES-256-GCM ciphertext. Fails on a wrong key (tag mismatch).
fn unseal(ciphertext: &[u8], key: &[u8; 32], nonce: &[u8; 12]) -> std::result::Result<Vec<u8>, aes_gcm::Error> {
    let cipher = Aes256Gcm::new(key.into());
    let nonce = Nonce::from_slice(nonce);
    cipher.decrypt(nonce, ciphertext)
}

/// Generates a random 16-byte salt for key derivation.
fn generate_salt() -> [u8; 16] {
    let mut salt = [0u8; 16];
    rand::rng().fill(&mut salt);
    salt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passphrase(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_insert_and_unseal_round_trip() {
        let mut ks = Keystore::new();
        let pw = passphrase("changeit");
        ks.insert("client", vec![0x30, 0x82, 0x01, 0x0a], b"key-der-bytes", &pw)
            .unwrap();

        let cert = ks.certificate_der("client").unwrap();
        assert_eq!(cert, &[0x30, 0x82, 0x01, 0x0a]);

        let key = ks.private_key_der("client", &pw).unwrap();
        assert_eq!(key, b"key-der-bytes");
    }

    #[test]
    fn test_wrong_passphrase_is_key_unlock() {
        let mut ks = Keystore::new();
        ks.insert("client", vec![0x30], b"key-der", &passphrase("right"))
            .unwrap();

        let err = ks
            .private_key_der("client", &passphrase("wrong"))
            .unwrap_err();
        assert!(matches!(err, CredentialError::KeyUnlock { .. }));
    }

    #[test]
    fn test_empty_keystore_has_no_first_alias() {
        let ks = Keystore::new();
        let err = ks.first_alias().unwrap_err();
        assert!(matches!(err, CredentialError::KeystoreAccess(_)));
    }

    #[test]
    fn test_first_alias_is_insertion_order() {
        let mut ks = Keystore::new();
        let pw = passphrase("pw");
        ks.insert("first", vec![1], b"k1", &pw).unwrap();
        ks.insert("second", vec![2], b"k2", &pw).unwrap();

        assert_eq!(ks.first_alias().unwrap(), "first");
        assert_eq!(ks.aliases().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn test_reinsert_keeps_position_and_reseals() {
        let mut ks = Keystore::new();
        let pw = passphrase("pw");
        ks.insert("a", vec![1], b"old", &pw).unwrap();
        ks.insert("b", vec![2], b"k", &pw).unwrap();
        ks.insert("a", vec![3], b"new", &pw).unwrap();

        assert_eq!(ks.len(), 2);
        assert_eq!(ks.first_alias().unwrap(), "a");
        assert_eq!(ks.certificate_der("a").unwrap(), &[3]);
        assert_eq!(ks.private_key_der("a", &pw).unwrap(), b"new");
    }

    #[test]
    fn test_unknown_alias_is_keystore_access() {
        let ks = Keystore::new();
        let err = ks.certificate_der("missing").unwrap_err();
        assert!(matches!(err, CredentialError::KeystoreAccess(_)));
    }

    /// Sealed key material must not leak through Debug output.
    #[test]
    fn test_debug_does_not_expose_key_der() {
        let mut ks = Keystore::new();
        ks.insert("client", vec![0x30], b"top-secret-key-der", &passphrase("pw"))
            .unwrap();

        let debug_output = format!("{:?}", ks);
        assert!(!debug_output.contains("top-secret-key-der"));
    }
}
