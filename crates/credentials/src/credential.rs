//! Credential shapes for cluster authentication.
//!
//! Responsibilities:
//! - Define the closed set of credential shapes (token producer,
//!   username/password, certificate keystore).
//! - Define the `TokenProducer` seam for identity providers that mint
//!   short-lived bearer tokens.
//!
//! Does NOT handle:
//! - Credential lookup (see `store`).
//! - Assembly of connection profiles (see the config crate).
//!
//! Invariants:
//! - Exactly one shape per credential; the enum makes reading another
//!   variant's fields unrepresentable.
//! - All secret values use `secrecy::SecretString` to prevent accidental
//!   logging.

use std::fmt;
use std::sync::Arc;

use secrecy::SecretString;

use crate::keystore::Keystore;

/// Produces a bearer token for a target endpoint.
///
/// Implementations may perform blocking network I/O (for example OIDC
/// discovery against the endpoint itself) and carry no internal timeout;
/// callers wanting a bound must impose it externally.
pub trait TokenProducer: fmt::Debug + Send + Sync {
    /// Obtain a bearer token for `endpoint`.
    ///
    /// `ca_cert_data` and `skip_tls_verify` describe the trust settings the
    /// producer should use if it has to talk to the endpoint to mint the
    /// token. Errors (network failures included) propagate unchanged.
    fn get_token(
        &self,
        endpoint: &str,
        ca_cert_data: Option<&str>,
        skip_tls_verify: bool,
    ) -> anyhow::Result<SecretString>;
}

/// The shape of a stored credential.
#[derive(Clone)]
pub enum CredentialKind {
    /// An identity provider that mints short-lived bearer tokens.
    Token { producer: Arc<dyn TokenProducer> },
    /// A plain username and secret password pair.
    UsernamePassword {
        username: String,
        password: SecretString,
    },
    /// A keystore holding an X.509 certificate and its private key,
    /// protected by a passphrase.
    Certificate {
        keystore: Keystore,
        passphrase: SecretString,
    },
}

impl fmt::Debug for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token { producer } => f.debug_struct("Token").field("producer", producer).finish(),
            Self::UsernamePassword { username, password } => f
                .debug_struct("UsernamePassword")
                .field("username", username)
                .field("password", password)
                .finish(),
            Self::Certificate { keystore, .. } => f
                .debug_struct("Certificate")
                .field("aliases", &keystore.aliases().collect::<Vec<_>>())
                .finish(),
        }
    }
}

/// A stored credential: an opaque id plus one of the three shapes.
#[derive(Debug, Clone)]
pub struct Credential {
    pub id: String,
    pub kind: CredentialKind,
}

impl Credential {
    /// Create a token-producing credential.
    pub fn token(id: impl Into<String>, producer: Arc<dyn TokenProducer>) -> Self {
        Self {
            id: id.into(),
            kind: CredentialKind::Token { producer },
        }
    }

    /// Create a username/password credential.
    pub fn username_password(
        id: impl Into<String>,
        username: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            id: id.into(),
            kind: CredentialKind::UsernamePassword {
                username: username.into(),
                password,
            },
        }
    }

    /// Create a certificate credential backed by a keystore.
    pub fn certificate(id: impl Into<String>, keystore: Keystore, passphrase: SecretString) -> Self {
        Self {
            id: id.into(),
            kind: CredentialKind::Certificate {
                keystore,
                passphrase,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StaticProducer;

    impl TokenProducer for StaticProducer {
        fn get_token(
            &self,
            _endpoint: &str,
            _ca_cert_data: Option<&str>,
            _skip_tls_verify: bool,
        ) -> anyhow::Result<SecretString> {
            Ok(SecretString::new("tok".to_string().into()))
        }
    }

    /// Passwords must not appear in Debug output; usernames may.
    #[test]
    fn test_username_password_debug_redacts_password() {
        let cred = Credential::username_password(
            "cred-1",
            "admin",
            SecretString::new("hunter2-password".to_string().into()),
        );

        let debug_output = format!("{:?}", cred);
        assert!(!debug_output.contains("hunter2-password"));
        assert!(debug_output.contains("admin"));
    }

    /// The certificate passphrase must not appear in Debug output.
    #[test]
    fn test_certificate_debug_redacts_passphrase() {
        let mut keystore = Keystore::new();
        let passphrase = SecretString::new("keystore-passphrase-123".to_string().into());
        keystore
            .insert("client", vec![0x30], b"key", &passphrase)
            .unwrap();
        let cred = Credential::certificate("cred-2", keystore, passphrase);

        let debug_output = format!("{:?}", cred);
        assert!(!debug_output.contains("keystore-passphrase-123"));
        assert!(debug_output.contains("client"));
    }

    #[test]
    fn test_token_credential_invokes_producer() {
        use secrecy::ExposeSecret;

        let cred = Credential::token("cred-3", Arc::new(StaticProducer));
        match &cred.kind {
            CredentialKind::Token { producer } => {
                let token = producer
                    .get_token("https://10.0.0.1:6443", None, false)
                    .unwrap();
                assert_eq!(token.expose_secret(), "tok");
            }
            _ => panic!("expected Token variant"),
        }
    }
}
