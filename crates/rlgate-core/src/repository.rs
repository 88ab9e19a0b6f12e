//! Algorithm metadata lookup for the historical-results store
//!
//! The results store keeps a durable numeric id per algorithm. The core
//! only ever needs the name-to-record lookup, so the store is modeled as a
//! read-only trait with a memoizing wrapper. There are only four
//! algorithms and they never change, so the cache is bounded at four
//! entries with no eviction and no invalidation hook.

use crate::errors::GatewayError;
use std::collections::HashMap;
use std::sync::RwLock;

/// Number of distinct algorithm names the cache will hold.
const CACHE_CAPACITY: usize = 4;

/// Durable identity of an algorithm in the results store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmRecord {
    pub id: i64,
    pub name: String,
}

/// Read-only lookup into the results store.
pub trait AlgorithmRepository: Send + Sync {
    /// Resolve an algorithm name to its stored record, if any.
    fn algorithm_by_name(&self, name: &str) -> Result<Option<AlgorithmRecord>, GatewayError>;
}

/// In-memory repository backed by a fixed record set.
pub struct StaticAlgorithmRepository {
    records: Vec<AlgorithmRecord>,
}

impl StaticAlgorithmRepository {
    pub fn new(records: Vec<AlgorithmRecord>) -> Self {
        Self { records }
    }
}

impl AlgorithmRepository for StaticAlgorithmRepository {
    fn algorithm_by_name(&self, name: &str) -> Result<Option<AlgorithmRecord>, GatewayError> {
        Ok(self.records.iter().find(|record| record.name == name).cloned())
    }
}

/// Memoizing wrapper around any repository, guarded by a read-mostly lock.
/// Misses are cached too: a name absent from the store stays absent.
pub struct CachedAlgorithmRepository<R> {
    inner: R,
    cache: RwLock<HashMap<String, Option<AlgorithmRecord>>>,
}

impl<R: AlgorithmRepository> CachedAlgorithmRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::with_capacity(CACHE_CAPACITY)),
        }
    }
}

impl<R: AlgorithmRepository> AlgorithmRepository for CachedAlgorithmRepository<R> {
    fn algorithm_by_name(&self, name: &str) -> Result<Option<AlgorithmRecord>, GatewayError> {
        {
            let cache = self
                .cache
                .read()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(hit) = cache.get(name) {
                return Ok(hit.clone());
            }
        }

        let record = self.inner.algorithm_by_name(name)?;

        let mut cache = self
            .cache
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if cache.len() < CACHE_CAPACITY || cache.contains_key(name) {
            cache.insert(name.to_string(), record.clone());
        }

        Ok(record)
    }
}
