//! Environment-driven connection settings.
//!
//! Responsibilities:
//! - Read `KUBECONN_*` environment variables into a `ConnectionSettings`
//!   record, with empty/whitespace values treated as unset.
//! - Turn settings into a pre-populated `ConnectionProfileBuilder`.
//!
//! Does NOT handle:
//! - Credential resolution (the credential id stays opaque here).
//! - Config file persistence; callers embedding kubeconn supply settings
//!   programmatically or via the environment.
//!
//! Invariants:
//! - Explicitly supplied settings win over environment variables.
//! - Invalid numeric/boolean values fail with `ProfileError::InvalidValue`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use kubeconn_credentials::CredentialResolver;

use crate::builder::ConnectionProfileBuilder;
use crate::constants::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_READ_TIMEOUT_SECS};
use crate::error::{ProfileError, Result};

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Raw inputs for one connection attempt, prior to credential resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionSettings {
    /// Master API endpoint URL.
    pub master_url: Option<String>,
    /// Namespace to operate in.
    #[serde(default)]
    pub namespace: Option<String>,
    /// Custom CA certificate data (PEM).
    #[serde(default)]
    pub ca_cert_data: Option<String>,
    /// Id of the stored credential to authenticate with.
    #[serde(default)]
    pub credential_id: Option<String>,
    /// Whether to trust all server certificates.
    #[serde(default)]
    pub skip_tls_verify: bool,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Read (request) timeout in seconds.
    #[serde(default = "default_read_timeout")]
    pub read_timeout_secs: u64,
}

fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_read_timeout() -> u64 {
    DEFAULT_READ_TIMEOUT_SECS
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            master_url: None,
            namespace: None,
            ca_cert_data: None,
            credential_id: None,
            skip_tls_verify: false,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            read_timeout_secs: DEFAULT_READ_TIMEOUT_SECS,
        }
    }
}

impl ConnectionSettings {
    /// Load settings from `KUBECONN_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let mut settings = Self::default();
        settings.apply_env()?;
        Ok(settings)
    }

    /// Overlay environment variables onto these settings. Environment values
    /// only fill fields that are still unset.
    pub fn apply_env(&mut self) -> Result<()> {
        if self.master_url.is_none() {
            self.master_url = env_var_or_none("KUBECONN_MASTER_URL");
        }
        if self.namespace.is_none() {
            self.namespace = env_var_or_none("KUBECONN_NAMESPACE");
        }
        if self.ca_cert_data.is_none() {
            self.ca_cert_data = env_var_or_none("KUBECONN_CA_CERT_DATA");
        }
        if self.credential_id.is_none() {
            self.credential_id = env_var_or_none("KUBECONN_CREDENTIAL_ID");
        }
        if let Some(skip) = env_var_or_none("KUBECONN_SKIP_TLS_VERIFY") {
            self.skip_tls_verify = skip.parse().map_err(|_| ProfileError::InvalidValue {
                var: "KUBECONN_SKIP_TLS_VERIFY".to_string(),
                message: "must be true or false".to_string(),
            })?;
        }
        if let Some(timeout) = env_var_or_none("KUBECONN_CONNECT_TIMEOUT") {
            self.connect_timeout_secs =
                timeout.parse().map_err(|_| ProfileError::InvalidValue {
                    var: "KUBECONN_CONNECT_TIMEOUT".to_string(),
                    message: "must be a number of seconds".to_string(),
                })?;
        }
        if let Some(timeout) = env_var_or_none("KUBECONN_READ_TIMEOUT") {
            self.read_timeout_secs = timeout.parse().map_err(|_| ProfileError::InvalidValue {
                var: "KUBECONN_READ_TIMEOUT".to_string(),
                message: "must be a number of seconds".to_string(),
            })?;
        }
        Ok(())
    }

    /// Turn the settings into a builder, resolving the credential id (if any)
    /// against `resolver` now.
    pub fn into_builder(self, resolver: &CredentialResolver) -> Result<ConnectionProfileBuilder> {
        let master_url = self.master_url.ok_or(ProfileError::MissingMasterUrl)?;
        let mut builder = ConnectionProfileBuilder::new(master_url)
            .skip_tls_verify(self.skip_tls_verify)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .read_timeout(Duration::from_secs(self.read_timeout_secs));
        if let Some(namespace) = self.namespace {
            builder = builder.namespace(namespace);
        }
        if let Some(ca) = self.ca_cert_data {
            builder = builder.ca_cert_data(ca);
        }
        if let Some(id) = self.credential_id {
            builder = builder.resolve_credential(resolver, &id);
        }
        Ok(builder)
    }
}
