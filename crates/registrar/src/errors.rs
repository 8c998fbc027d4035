//! Error types for the TLD registrar

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("label already registered: {label}")]
    AlreadyRegistered { label: String },

    #[error("label not registered: {label}")]
    NotRegistered { label: String },

    #[error("domain resolution timed out")]
    ResolutionTimeout,

    #[error("registry error: {0}")]
    Registry(#[from] namereg_registry::RegistryError),
}

pub type Result<T> = std::result::Result<T, RegistrarError>;
