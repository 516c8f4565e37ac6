//! Error types for credential and keystore operations.

use thiserror::Error;

/// Result type alias for credential operations.
pub type Result<T> = std::result::Result<T, CredentialError>;

/// Errors that can occur while reading credential material.
///
/// Resolution misses are deliberately absent: a credential id that no longer
/// exists is an expected outcome and is modeled as `Option::None` by the
/// resolver, not as an error.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// The key derivation or sealing algorithm parameters are unusable.
    #[error("unsupported key algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The private key could not be unlocked (wrong or missing passphrase).
    #[error("unable to unlock private key for alias '{alias}'")]
    KeyUnlock { alias: String },

    /// The keystore is malformed or has no usable entry.
    #[error("keystore access failed: {0}")]
    KeystoreAccess(String),

    /// The certificate's DER encoding is unavailable or corrupt.
    #[error("certificate encoding unavailable for alias '{alias}'")]
    CertificateEncoding { alias: String },
}

impl CredentialError {
    /// Check if this error indicates bad credential material (as opposed to
    /// a wrong passphrase supplied at unlock time).
    pub fn is_material_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedAlgorithm(_) | Self::KeystoreAccess(_) | Self::CertificateEncoding { .. }
        )
    }
}
