//! Credential model and resolution for kubeconn.
//!
//! This crate defines the three credential shapes a cluster connection can be
//! authenticated with (token producer, username/password, certificate
//! keystore), the passphrase-protected keystore backing the certificate
//! shape, and the resolver that turns an opaque credential id into a stored
//! credential.

mod credential;
mod error;
mod keystore;
mod store;

pub use credential::{Credential, CredentialKind, TokenProducer};
pub use error::{CredentialError, Result};
pub use keystore::Keystore;
pub use store::{
    CredentialResolver, CredentialStore, DomainRequirement, InMemoryCredentialStore, LookupScope,
};
