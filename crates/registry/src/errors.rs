//! Error types for the namespace registry

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("caller is not authorized to modify node {node}")]
    Unauthorized { node: String },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
