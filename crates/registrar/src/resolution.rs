//! Async domain resolution with caching
//!
//! Resolves labels to their owning principal through the registrar's
//! lookup surface, with a TTL-bounded in-memory cache for indexer-style
//! consumers that resolve the same names repeatedly.

use crate::errors::*;
use crate::registrar::TldRegistrar;
use namereg_types::{LabelHash, Principal};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;
use tokio::time::{timeout, Duration};

/// Cached label → owner resolution service.
#[derive(Debug, Clone)]
pub struct DomainResolver {
    registrar: Arc<TldRegistrar>,
    cache: Arc<RwLock<HashMap<LabelHash, (Principal, u64)>>>,
    cache_ttl: Duration,
    lookup_timeout: Duration,
}

impl DomainResolver {
    /// Create a resolver over `registrar`.
    pub fn new(registrar: Arc<TldRegistrar>) -> Self {
        Self {
            registrar,
            cache: Arc::new(RwLock::new(HashMap::new())),
            cache_ttl: Duration::from_secs(300),
            lookup_timeout: Duration::from_secs(5),
        }
    }

    /// Resolve a label to its owning principal, serving from cache when
    /// the cached entry is still fresh.
    pub async fn resolve(&self, label: LabelHash) -> Result<Principal> {
        if let Some((owner, stamp)) = self.get_from_cache(&label) {
            if self.is_cache_valid(stamp) {
                return Ok(owner);
            }
        }

        let info = timeout(self.lookup_timeout, async {
            self.registrar.domain_info(label)
        })
        .await
        .map_err(|_| RegistrarError::ResolutionTimeout)?;

        if info.available {
            return Err(RegistrarError::NotRegistered {
                label: label.to_string(),
            });
        }

        self.store_in_cache(&label, info.owner);
        Ok(info.owner)
    }

    /// Resolve multiple labels concurrently; each label gets its own
    /// result.
    pub async fn resolve_batch(
        &self,
        labels: &[LabelHash],
    ) -> HashMap<LabelHash, Result<Principal>> {
        let mut futures = Vec::new();
        for label in labels {
            let resolver = self.clone();
            let label = *label;
            futures.push(async move { (label, resolver.resolve(label).await) });
        }

        futures::future::join_all(futures).await.into_iter().collect()
    }

    /// Drop every cached entry.
    pub fn clear_cache(&self) {
        let mut cache = self.cache.write();
        cache.clear();
    }

    /// Number of cached entries and the configured cache TTL.
    pub fn cache_stats(&self) -> (usize, Duration) {
        let cache = self.cache.read();
        (cache.len(), self.cache_ttl)
    }

    fn get_from_cache(&self, label: &LabelHash) -> Option<(Principal, u64)> {
        let cache = self.cache.read();
        cache.get(label).copied()
    }

    fn store_in_cache(&self, label: &LabelHash, owner: Principal) {
        let stamp = SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs();

        let mut cache = self.cache.write();
        cache.insert(*label, (owner, stamp));
    }

    fn is_cache_valid(&self, stamp: u64) -> bool {
        let now = SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs();

        now - stamp < self.cache_ttl.as_secs()
    }
}
