//! Error types for connection-profile assembly.
//!
//! Responsibilities:
//! - Define error variants for profile building and settings loading.
//! - Preserve lower-level errors (keystore, token producer) unchanged.
//!
//! Invariants:
//! - Resolution misses never appear here; an unknown credential id yields an
//!   unauthenticated profile, not an error.
//! - No error message carries secret material.

use thiserror::Error;

use kubeconn_credentials::CredentialError;

/// Result type alias for profile operations.
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Errors that can occur while assembling a connection profile.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The master URL was empty.
    #[error("master URL is required and must not be empty")]
    MissingMasterUrl,

    /// The master URL could not be parsed.
    #[error("invalid master URL '{url}': {message}")]
    InvalidMasterUrl { url: String, message: String },

    /// A settings value could not be parsed.
    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// Keystore or certificate material could not be read.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// The token producer failed; its error (network failures included) is
    /// preserved as the source.
    #[error("failed to acquire bearer token from credential '{credential_id}'")]
    TokenAcquisition {
        credential_id: String,
        #[source]
        source: anyhow::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_error_is_transparent() {
        let inner = CredentialError::KeystoreAccess("keystore has no aliases".to_string());
        let err = ProfileError::from(inner);
        assert_eq!(err.to_string(), "keystore access failed: keystore has no aliases");
    }

    #[test]
    fn test_token_acquisition_preserves_source() {
        use std::error::Error as _;

        let err = ProfileError::TokenAcquisition {
            credential_id: "oidc".to_string(),
            source: anyhow::anyhow!("connection refused"),
        };
        assert!(err.to_string().contains("oidc"));
        assert_eq!(err.source().unwrap().to_string(), "connection refused");
    }
}
