//! Types for the TLD registrar

use namereg_types::{LabelHash, Principal};
use serde::{Deserialize, Serialize};

/// Registrar-local metadata for one registered label.
///
/// Mirrors the registry's ownership record at registration time; the
/// registry stays authoritative for the current owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationEntry {
    /// Hash of the registered label.
    pub label: LabelHash,
    /// Principal that performed the registration.
    pub owner: Principal,
    /// Registration timestamp (seconds since UNIX_EPOCH).
    pub registered_at: u64,
}

/// Availability and ownership summary for one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainInfo {
    /// Whether the label's derived node is unowned.
    pub available: bool,
    /// Registration timestamp; `0` for a label never registered here.
    pub registered_at: u64,
    /// Current owner; the zero principal when available.
    pub owner: Principal,
}

/// What to do when a registration targets a label whose node already has
/// a non-zero owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReregistrationPolicy {
    /// Reject the registration outright.
    #[default]
    Reject,
    /// Overwrite the prior owner (last writer wins).
    Overwrite,
}

/// Registrar policy configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrarConfig {
    /// Policy for labels that already have an owner.
    #[serde(default)]
    pub reregistration: ReregistrationPolicy,
}
