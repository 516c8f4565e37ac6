//! Assembled connection-profile types.
//!
//! Responsibilities:
//! - Define the `ConnectionProfile` output record and its auth material.
//! - Handle serialization of secret values for out-of-process consumers.
//!
//! Does NOT handle:
//! - Profile assembly or credential dispatch (see `builder`).
//! - Opening the actual transport (client factory, out of scope).
//!
//! Invariants:
//! - At most one auth shape per profile; the enum enforces exclusivity.
//! - All secret values use `secrecy::SecretString`; serialization includes
//!   them for hand-off, secrecy is for runtime logging safety.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Authentication material attached to a connection profile.
///
/// Exactly one shape is present per profile; which one depends on the
/// credential the profile was built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthMaterial {
    /// OAuth bearer token minted by a token producer.
    #[serde(rename = "token")]
    BearerToken {
        #[serde(with = "secret_string")]
        token: SecretString,
    },
    /// Plain username/password basic auth.
    #[serde(rename = "basic")]
    Basic {
        username: String,
        #[serde(with = "secret_string")]
        password: SecretString,
    },
    /// Client certificate auth, ready for a Kubernetes-style client:
    /// `client_cert_data` is Base64 of the certificate DER and
    /// `client_key_data` is the double-encoded PEM private key.
    #[serde(rename = "client-certificate")]
    ClientCertificate {
        client_cert_data: String,
        #[serde(with = "secret_string")]
        client_key_data: SecretString,
        #[serde(with = "secret_string")]
        client_key_passphrase: SecretString,
    },
}

/// A fully assembled set of parameters for opening an authenticated
/// connection to a cluster API endpoint.
///
/// Handed to a client factory and not retained or mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionProfile {
    /// Master API endpoint URL.
    pub master_url: String,
    /// Namespace to operate in; `None` lets the client use its own default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Request (read) timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// Connection timeout in milliseconds.
    pub connect_timeout_ms: u64,
    /// Trust all server certificates unconditionally.
    pub trust_certs: bool,
    /// Custom CA certificate data (PEM). May be present alongside
    /// `trust_certs`; the transport gives `trust_certs` precedence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_cert_data: Option<String>,
    /// Auth material, absent for unauthenticated profiles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthMaterial>,
}
