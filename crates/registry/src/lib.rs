//! Namespace Registry for Hierarchical Name Ownership
//!
//! This crate provides the global mapping from hashed hierarchical-name
//! identifiers to ownership records, with strict parent-authorizes-child
//! semantics. Higher layers (registrars) build registration policy on top
//! of it; this crate only decides who may mutate which node and records a
//! domain event for every successful mutation.

pub mod errors;
pub mod registry;
pub mod types;

pub use errors::*;
pub use registry::NamespaceRegistry;
pub use types::*;
