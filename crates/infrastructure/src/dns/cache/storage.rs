use super::metrics::CacheMetrics;
use dashmap::DashMap;
use ember_dns_application::ports::Clock;
use ember_dns_domain::{Question, ResourceRecord};
use rustc_hash::FxBuildHasher;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::debug;

/// One cached answer and its absolute expiry (epoch seconds).
#[derive(Debug, Clone)]
struct CacheEntry {
    record: ResourceRecord,
    expires_at: u64,
}

/// Question-keyed answer cache with lazy TTL eviction.
///
/// Holds at most one record per question: by policy the first answer of
/// the response that produced it, not all of them. Expired entries are
/// removed by the lookup that observes them; there is no background
/// sweeper. DashMap sharding gives per-question consistency: a lookup
/// never observes a half-written entry.
pub struct RecordCache {
    entries: DashMap<Question, CacheEntry, FxBuildHasher>,
    clock: Arc<dyn Clock>,
    metrics: Arc<CacheMetrics>,
}

impl RecordCache {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher::default()),
            clock,
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    /// The cached record for `question`, if present and still alive.
    ///
    /// An entry whose expiry has passed is removed as a side effect and
    /// reported as a miss.
    pub fn lookup(&self, question: &Question) -> Option<ResourceRecord> {
        let now = self.clock.now_secs();

        if let Some(entry) = self.entries.get(question) {
            if now < entry.expires_at {
                self.metrics.hits.fetch_add(1, Ordering::Relaxed);
                return Some(entry.record.clone());
            }
            drop(entry);
            self.entries.remove(question);
            self.metrics.misses.fetch_add(1, Ordering::Relaxed);
            self.metrics.lazy_evictions.fetch_add(1, Ordering::Relaxed);
            debug!(name = %question.name, qtype = question.qtype, "Cache entry expired");
            return None;
        }

        self.metrics.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Cache `record` for `question`, replacing any existing entry.
    ///
    /// The expiry is computed from the clock at insertion time plus the
    /// record's TTL; a zero TTL produces an entry that is already dead for
    /// the next lookup.
    pub fn insert(&self, question: Question, record: ResourceRecord) {
        let expires_at = self.clock.now_secs().saturating_add(u64::from(record.ttl));
        debug!(
            name = %question.name,
            qtype = question.qtype,
            ttl = record.ttl,
            "Inserted into cache"
        );
        self.entries.insert(question, CacheEntry { record, expires_at });
        self.metrics.insertions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }
}
