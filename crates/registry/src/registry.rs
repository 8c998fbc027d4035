//! Namespace registry implementation
//!
//! Single source of truth for "who owns which hierarchical name". Every
//! mutation carries the caller's identity as an explicit argument and is
//! checked against the stored owner before anything changes; a rejected
//! call leaves no partial state and emits no event.

use crate::errors::*;
use crate::types::*;
use namereg_types::{LabelHash, NodeId, Principal};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Global mapping from node identifiers to ownership records.
///
/// Ownership propagates top-down: a node may only acquire or change
/// ownership through an operation authorized by the current owner of its
/// parent (for subnode assignment) or of the node itself (for transfers
/// and resolver/ttl writes).
#[derive(Debug)]
pub struct NamespaceRegistry {
    /// Node id → ownership record mapping
    records: Arc<RwLock<HashMap<NodeId, NodeRecord>>>,
    /// Append-only domain event log
    events: Arc<RwLock<Vec<RegistryEvent>>>,
}

/// Check that `caller` owns `node`. The zero principal marks "unclaimed"
/// and is never a valid caller, so an unowned node authorizes nobody.
fn authorize(
    records: &HashMap<NodeId, NodeRecord>,
    caller: Principal,
    node: &NodeId,
) -> Result<()> {
    let owner = records
        .get(node)
        .map(|record| record.owner)
        .unwrap_or(Principal::ZERO);

    if caller.is_zero() || owner != caller {
        return Err(RegistryError::Unauthorized {
            node: node.to_string(),
        });
    }

    Ok(())
}

impl NamespaceRegistry {
    /// Create a registry whose root node is owned by `root_owner`.
    ///
    /// Every other node starts unclaimed.
    pub fn new(root_owner: Principal) -> Self {
        let mut records = HashMap::new();
        records.insert(
            NodeId::ROOT,
            NodeRecord {
                owner: root_owner,
                ..Default::default()
            },
        );

        Self {
            records: Arc::new(RwLock::new(records)),
            events: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Owner of `node`; the zero principal if never assigned.
    pub fn owner_of(&self, node: NodeId) -> Principal {
        let records = self.records.read();
        records
            .get(&node)
            .map(|record| record.owner)
            .unwrap_or(Principal::ZERO)
    }

    /// Resolver of `node`; the zero principal if never assigned.
    pub fn resolver_of(&self, node: NodeId) -> Principal {
        let records = self.records.read();
        records
            .get(&node)
            .map(|record| record.resolver)
            .unwrap_or(Principal::ZERO)
    }

    /// Ttl of `node`; zero if never assigned.
    pub fn ttl_of(&self, node: NodeId) -> u64 {
        let records = self.records.read();
        records.get(&node).map(|record| record.ttl).unwrap_or(0)
    }

    /// Full record of `node`, if one was ever created.
    pub fn record(&self, node: NodeId) -> Option<NodeRecord> {
        let records = self.records.read();
        records.get(&node).cloned()
    }

    /// Assign ownership of the child of `parent` named by `label`.
    ///
    /// Only the current owner of `parent` may call this. On success the
    /// derived child identifier is returned and a [`RegistryEvent::NewOwner`]
    /// is appended; assigning the same label again overwrites the prior
    /// owner with no history kept beyond the event log.
    pub fn set_subnode_owner(
        &self,
        caller: Principal,
        parent: NodeId,
        label: LabelHash,
        new_owner: Principal,
    ) -> Result<NodeId> {
        let mut records = self.records.write();

        if let Err(err) = authorize(&records, caller, &parent) {
            warn!("rejected subnode assignment under {} by {}", parent, caller);
            return Err(err);
        }

        let child = parent.child(&label);
        records.entry(child).or_default().owner = new_owner;
        self.events.write().push(RegistryEvent::NewOwner {
            parent,
            label,
            owner: new_owner,
        });

        debug!("assigned {} (under {}) to {}", child, parent, new_owner);
        Ok(child)
    }

    /// Transfer ownership of `node` to `new_owner`.
    ///
    /// Only the current owner of `node` may call this.
    pub fn set_owner(&self, caller: Principal, node: NodeId, new_owner: Principal) -> Result<()> {
        let mut records = self.records.write();

        if let Err(err) = authorize(&records, caller, &node) {
            warn!("rejected ownership transfer of {} by {}", node, caller);
            return Err(err);
        }

        records.entry(node).or_default().owner = new_owner;
        self.events.write().push(RegistryEvent::Transfer {
            node,
            owner: new_owner,
        });

        debug!("transferred {} to {}", node, new_owner);
        Ok(())
    }

    /// Replace the resolver of `node`. Storage passthrough, owner-gated.
    pub fn set_resolver(&self, caller: Principal, node: NodeId, resolver: Principal) -> Result<()> {
        let mut records = self.records.write();

        authorize(&records, caller, &node)?;

        records.entry(node).or_default().resolver = resolver;
        self.events
            .write()
            .push(RegistryEvent::NewResolver { node, resolver });

        Ok(())
    }

    /// Replace the ttl of `node`. Storage passthrough, owner-gated.
    pub fn set_ttl(&self, caller: Principal, node: NodeId, ttl: u64) -> Result<()> {
        let mut records = self.records.write();

        authorize(&records, caller, &node)?;

        records.entry(node).or_default().ttl = ttl;
        self.events.write().push(RegistryEvent::NewTtl { node, ttl });

        Ok(())
    }

    /// Snapshot of the event log, oldest first.
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.events.read().clone()
    }

    /// Drain the event log, handing the accumulated events to the caller.
    pub fn take_events(&self) -> Vec<RegistryEvent> {
        std::mem::take(&mut *self.events.write())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use namereg_types::namehash;

    fn principal(byte: u8) -> Principal {
        Principal::new([byte; 32])
    }

    #[test]
    fn deployer_owns_the_root() {
        let deployer = principal(1);
        let registry = NamespaceRegistry::new(deployer);

        assert_eq!(registry.owner_of(NodeId::ROOT), deployer);
        assert_eq!(registry.owner_of(namehash("eth")), Principal::ZERO);
    }

    #[test]
    fn root_owner_assigns_subnode() {
        let deployer = principal(1);
        let delegate = principal(2);
        let registry = NamespaceRegistry::new(deployer);

        let label = LabelHash::hash("eth");
        let child = registry
            .set_subnode_owner(deployer, NodeId::ROOT, label, delegate)
            .expect("root owner may assign subnodes");

        assert_eq!(child, NodeId::ROOT.child(&label));
        assert_eq!(registry.owner_of(child), delegate);
        assert_eq!(
            registry.events(),
            vec![RegistryEvent::NewOwner {
                parent: NodeId::ROOT,
                label,
                owner: delegate,
            }]
        );
    }

    #[test]
    fn non_owner_assignment_is_rejected_without_side_effects() {
        let deployer = principal(1);
        let intruder = principal(9);
        let registry = NamespaceRegistry::new(deployer);

        let label = LabelHash::hash("eth");
        let err = registry
            .set_subnode_owner(intruder, NodeId::ROOT, label, intruder)
            .unwrap_err();

        assert!(matches!(err, RegistryError::Unauthorized { .. }));
        assert_eq!(registry.owner_of(NodeId::ROOT.child(&label)), Principal::ZERO);
        assert!(registry.events().is_empty());
    }

    #[test]
    fn zero_principal_cannot_claim_an_unowned_node() {
        let registry = NamespaceRegistry::new(principal(1));
        let orphan = namehash("nobody.owns.this");

        // The orphan node is unowned, so its "owner" equals the zero
        // principal; that must still not authorize a zero caller.
        let err = registry
            .set_subnode_owner(Principal::ZERO, orphan, LabelHash::hash("x"), principal(2))
            .unwrap_err();
        assert!(matches!(err, RegistryError::Unauthorized { .. }));
        assert!(registry.events().is_empty());
    }

    #[test]
    fn reassignment_overwrites_owner_and_leaves_siblings_alone() {
        let deployer = principal(1);
        let first = principal(2);
        let second = principal(3);
        let registry = NamespaceRegistry::new(deployer);

        let label = LabelHash::hash("domain");
        let sibling_label = LabelHash::hash("other");
        registry
            .set_subnode_owner(deployer, NodeId::ROOT, sibling_label, first)
            .unwrap();
        let child = registry
            .set_subnode_owner(deployer, NodeId::ROOT, label, first)
            .unwrap();
        let again = registry
            .set_subnode_owner(deployer, NodeId::ROOT, label, second)
            .unwrap();

        assert_eq!(child, again);
        assert_eq!(registry.owner_of(child), second);
        assert_eq!(
            registry.owner_of(NodeId::ROOT.child(&sibling_label)),
            first
        );
    }

    #[test]
    fn owner_transfers_node_to_another_principal() {
        let deployer = principal(1);
        let heir = principal(2);
        let registry = NamespaceRegistry::new(deployer);

        registry.set_owner(deployer, NodeId::ROOT, heir).unwrap();

        assert_eq!(registry.owner_of(NodeId::ROOT), heir);
        assert_eq!(
            registry.events(),
            vec![RegistryEvent::Transfer {
                node: NodeId::ROOT,
                owner: heir,
            }]
        );

        // The previous owner lost its authority with the transfer.
        let err = registry.set_owner(deployer, NodeId::ROOT, deployer).unwrap_err();
        assert!(matches!(err, RegistryError::Unauthorized { .. }));
    }

    #[test]
    fn resolver_and_ttl_are_owner_gated_passthrough() {
        let deployer = principal(1);
        let resolver = principal(7);
        let registry = NamespaceRegistry::new(deployer);

        registry
            .set_resolver(deployer, NodeId::ROOT, resolver)
            .unwrap();
        registry.set_ttl(deployer, NodeId::ROOT, 3600).unwrap();

        assert_eq!(registry.resolver_of(NodeId::ROOT), resolver);
        assert_eq!(registry.ttl_of(NodeId::ROOT), 3600);

        assert!(registry
            .set_resolver(principal(9), NodeId::ROOT, resolver)
            .is_err());
        assert!(registry.set_ttl(principal(9), NodeId::ROOT, 60).is_err());

        let events = registry.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], RegistryEvent::NewResolver { .. }));
        assert!(matches!(events[1], RegistryEvent::NewTtl { .. }));
    }

    #[test]
    fn take_events_drains_the_log() {
        let deployer = principal(1);
        let registry = NamespaceRegistry::new(deployer);

        registry
            .set_subnode_owner(deployer, NodeId::ROOT, LabelHash::hash("eth"), principal(2))
            .unwrap();

        assert_eq!(registry.take_events().len(), 1);
        assert!(registry.events().is_empty());
    }

    #[test]
    fn events_serialize_with_a_type_tag() {
        let deployer = principal(1);
        let registry = NamespaceRegistry::new(deployer);

        registry
            .set_subnode_owner(deployer, NodeId::ROOT, LabelHash::hash("eth"), principal(2))
            .unwrap();

        let events = registry.events();
        let value = serde_json::to_value(&events[0]).expect("event should serialize");
        assert_eq!(value["type"], "new_owner");
        assert_eq!(value["parent"], NodeId::ROOT.to_hex());
    }

    #[test]
    fn lookups_on_untouched_nodes_never_fail() {
        let registry = NamespaceRegistry::new(principal(1));
        let node = namehash("never.seen");

        assert_eq!(registry.owner_of(node), Principal::ZERO);
        assert_eq!(registry.resolver_of(node), Principal::ZERO);
        assert_eq!(registry.ttl_of(node), 0);
        assert!(registry.record(node).is_none());
    }
}
