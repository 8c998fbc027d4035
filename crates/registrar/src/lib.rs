//! TLD Registrar for Open Name Registration
//!
//! This crate layers registration policy and lookup metadata on top of the
//! namespace registry. A registrar administers exactly one top-level node:
//! anyone may register an unclaimed label under it, and the registrar
//! forwards the assignment to the registry using its own delegated
//! authority over the root.

pub mod errors;
pub mod registrar;
pub mod resolution;
pub mod types;

pub use errors::*;
pub use registrar::TldRegistrar;
pub use resolution::DomainResolver;
pub use types::*;
