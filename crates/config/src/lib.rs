//! Connection-profile assembly for kubeconn.
//!
//! This crate turns a resolved credential plus endpoint parameters into a
//! fully assembled `ConnectionProfile` a Kubernetes-style client constructor
//! can consume directly: master URL, namespace, timeouts in milliseconds,
//! auth material, and CA/trust settings.

pub mod constants;

mod builder;
mod encoding;
mod error;
mod profile;
mod settings;

pub use builder::ConnectionProfileBuilder;
pub use error::{ProfileError, Result};
pub use profile::{AuthMaterial, ConnectionProfile};
pub use settings::{ConnectionSettings, env_var_or_none};
