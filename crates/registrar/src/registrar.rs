//! TLD registrar implementation
//!
//! Mediates open registration under one fixed top-level node. The
//! registrar forwards registrations to the namespace registry using its
//! own delegated authority over the root, then assigns ownership of the
//! new child to the invoking caller.

use crate::errors::*;
use crate::types::*;
use namereg_registry::NamespaceRegistry;
use namereg_types::{LabelHash, NodeId, Principal};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// Registrar for one top-level node of the namespace registry.
///
/// The registrar must be bootstrapped as the current owner of `root`
/// inside the registry (by the registry owner delegating the root to
/// `identity`) before it can accept registrations; until then every
/// `register` call surfaces the registry's authorization failure.
#[derive(Debug)]
pub struct TldRegistrar {
    registry: Arc<NamespaceRegistry>,
    /// Principal the registrar acts as when calling the registry.
    identity: Principal,
    /// The top-level node this registrar administers.
    root: NodeId,
    /// Label hash → registration metadata
    registrations: Arc<RwLock<HashMap<LabelHash, RegistrationEntry>>>,
    config: RegistrarConfig,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

impl TldRegistrar {
    /// Create a registrar for `root` with the default policy.
    pub fn new(registry: Arc<NamespaceRegistry>, identity: Principal, root: NodeId) -> Self {
        Self::with_config(registry, identity, root, RegistrarConfig::default())
    }

    /// Create a registrar for `root` with an explicit policy.
    pub fn with_config(
        registry: Arc<NamespaceRegistry>,
        identity: Principal,
        root: NodeId,
        config: RegistrarConfig,
    ) -> Self {
        Self {
            registry,
            identity,
            root,
            registrations: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    /// The top-level node this registrar administers.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The principal the registrar acts as against the registry.
    pub fn identity(&self) -> Principal {
        self.identity
    }

    /// Register the label named by `label` to `caller`.
    ///
    /// Open to any caller. Fails with [`RegistrarError::AlreadyRegistered`]
    /// when the derived child already has a non-zero owner and the policy
    /// is [`ReregistrationPolicy::Reject`]; fails with the registry's
    /// authorization error when the registrar was never bootstrapped as
    /// the root's owner. Either failure leaves all state untouched.
    pub fn register(&self, caller: Principal, label: LabelHash) -> Result<NodeId> {
        let child = self.root.child(&label);
        let current = self.registry.owner_of(child);
        if !current.is_zero() && self.config.reregistration == ReregistrationPolicy::Reject {
            warn!("rejected registration of taken label {} by {}", label, caller);
            return Err(RegistrarError::AlreadyRegistered {
                label: label.to_string(),
            });
        }

        let node = self
            .registry
            .set_subnode_owner(self.identity, self.root, label, caller)?;

        let entry = RegistrationEntry {
            label,
            owner: caller,
            registered_at: unix_now(),
        };
        self.registrations.write().insert(label, entry);

        info!("registered {} under {} to {}", label, self.root, caller);
        Ok(node)
    }

    /// Register a label given as a string; hashes it first.
    pub fn register_name(&self, caller: Principal, label: &str) -> Result<NodeId> {
        self.register(caller, LabelHash::hash(label))
    }

    /// Availability, registration timestamp and current owner of `label`.
    ///
    /// Side-effect free and infallible. The owner is read live from the
    /// registry, so transfers performed at the registry level are
    /// reflected here.
    pub fn domain_info(&self, label: LabelHash) -> DomainInfo {
        let owner = self.registry.owner_of(self.root.child(&label));
        if owner.is_zero() {
            return DomainInfo {
                available: true,
                registered_at: 0,
                owner: Principal::ZERO,
            };
        }

        let registered_at = self
            .registrations
            .read()
            .get(&label)
            .map(|entry| entry.registered_at)
            .unwrap_or(0);

        DomainInfo {
            available: false,
            registered_at,
            owner,
        }
    }

    /// Whether the label's derived node is unowned.
    pub fn available(&self, label: LabelHash) -> bool {
        self.registry.owner_of(self.root.child(&label)).is_zero()
    }

    /// Registrar-local metadata for `label`, if it was registered here.
    pub fn registration(&self, label: LabelHash) -> Option<RegistrationEntry> {
        self.registrations.read().get(&label).cloned()
    }
}
