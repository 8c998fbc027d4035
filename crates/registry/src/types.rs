//! Types for the namespace registry

use namereg_types::{LabelHash, NodeId, Principal};
use serde::{Deserialize, Serialize};

/// Ownership record of a single node.
///
/// Records are created lazily on first assignment and never deleted. The
/// resolver and ttl fields are storage passthrough: the registry gates who
/// may write them but attaches no behavior to their values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Owning principal; zero means the node is unclaimed.
    pub owner: Principal,
    /// Resolver principal associated with the node.
    pub resolver: Principal,
    /// Caching time-to-live associated with the node.
    pub ttl: u64,
}

/// Domain event appended once per successful registry mutation.
///
/// The event log is the only history the registry keeps; consumers
/// (indexers, UIs) treat it as the append-only change log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// Ownership of `parent`'s child named by `label` was assigned.
    NewOwner {
        parent: NodeId,
        label: LabelHash,
        owner: Principal,
    },
    /// Ownership of an existing node was transferred.
    Transfer { node: NodeId, owner: Principal },
    /// The node's resolver was replaced.
    NewResolver { node: NodeId, resolver: Principal },
    /// The node's ttl was replaced.
    NewTtl { node: NodeId, ttl: u64 },
}
