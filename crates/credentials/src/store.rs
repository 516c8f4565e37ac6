//! Credential store seam and id-based resolution.
//!
//! Responsibilities:
//! - Define the `CredentialStore` trait real backends implement.
//! - Provide `InMemoryCredentialStore` for embedding and tests.
//! - Resolve an opaque credential id to the first matching credential.
//!
//! Does NOT handle:
//! - Storage, encryption at rest, or access control enforcement; those belong
//!   to the backing store.
//!
//! Invariants:
//! - The lookup scope is an explicit parameter, never ambient state.
//! - A missing credential id is a normal outcome (`None`), not an error.

use std::sync::Arc;

use tracing::debug;

use crate::credential::Credential;

/// Access scope under which a lookup runs.
///
/// `System` is the elevated, no-domain-restriction scope; passing it
/// explicitly keeps the privilege visible at every call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupScope {
    /// System-level access, unrestricted by user.
    System,
    /// Access on behalf of a specific user.
    User { id: String },
}

/// A constraint narrowing which credentials a lookup may return, typically
/// derived from the target endpoint.
#[derive(Debug, Clone, Default)]
pub struct DomainRequirement {
    pub scheme: Option<String>,
    pub host: Option<String>,
}

/// Read-only access to stored credentials.
pub trait CredentialStore: Send + Sync {
    /// List all credentials visible under `scope` that satisfy every
    /// requirement. An empty requirement list means no domain restriction.
    fn lookup(&self, scope: &LookupScope, requirements: &[DomainRequirement]) -> Vec<Credential>;
}

/// A credential store backed by a plain vector.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    credentials: Vec<Credential>,
}

impl InMemoryCredentialStore {
    pub fn new(credentials: Vec<Credential>) -> Self {
        Self { credentials }
    }

    pub fn push(&mut self, credential: Credential) {
        self.credentials.push(credential);
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn lookup(&self, _scope: &LookupScope, _requirements: &[DomainRequirement]) -> Vec<Credential> {
        self.credentials.clone()
    }
}

/// Resolves credential ids against a store.
pub struct CredentialResolver {
    store: Arc<dyn CredentialStore>,
}

impl CredentialResolver {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Look up the credential with the given id under system scope.
    ///
    /// Returns `None` for an empty id or when no stored credential matches.
    /// Absence is an expected outcome: a stale id yields an unauthenticated
    /// connection profile downstream rather than a hard failure, so callers
    /// needing a hard failure must check for `None` themselves.
    pub fn resolve(&self, id: &str) -> Option<Credential> {
        if id.is_empty() {
            return None;
        }
        let found = self
            .store
            .lookup(&LookupScope::System, &[])
            .into_iter()
            .find(|c| c.id == id);
        if found.is_none() {
            debug!(credential_id = id, "credential not found in store");
        }
        found
    }
}
