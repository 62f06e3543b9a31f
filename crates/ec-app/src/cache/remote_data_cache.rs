//! Expiry-gated fetch-through cache for remote resource collections.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use ec_core::catalog::events;
use ec_core::catalog::normalize;
use ec_core::catalog::{ResourceKind, ResourceSet};
use ec_core::ports::{ClockPort, ResourceApiError, ResourceApiPort};

struct CacheEntry {
    records: ResourceSet,
    fetched_at_ms: i64,
}

impl CacheEntry {
    fn expired(&self, kind: ResourceKind, now_ms: i64) -> bool {
        let ttl_ms = kind.ttl().as_millis() as i64;
        now_ms >= self.fetched_at_ms + ttl_ms
    }
}

/// One entry per resource endpoint, overwritten on refresh.
///
/// Expiry is a hard boundary: an expired entry is never served, a fresh
/// fetch is attempted instead, and a failed fetch leaves the stored entry
/// untouched. An empty successful response is cached like any other and is
/// not refetched until expiry. There is no single-flight de-duplication;
/// concurrent gets for the same expired kind may both fetch, last write wins.
pub struct RemoteDataCache {
    api: Arc<dyn ResourceApiPort>,
    clock: Arc<dyn ClockPort>,
    entries: Mutex<HashMap<ResourceKind, CacheEntry>>,
}

impl RemoteDataCache {
    pub fn new(api: Arc<dyn ResourceApiPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            api,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Serve the cached collection for `kind`, fetching only when the stored
    /// entry is absent or past its TTL. Fetch and decode failures propagate;
    /// substituting fallback data is the caller's responsibility.
    pub async fn get(&self, kind: ResourceKind) -> Result<ResourceSet, ResourceApiError> {
        let now_ms = self.clock.now_ms();

        {
            let entries = self.entries.lock().await;
            if let Some(entry) = entries.get(&kind) {
                if !entry.expired(kind, now_ms) {
                    debug!(%kind, "serving cached entry");
                    return Ok(entry.records.clone());
                }
            }
        }

        let raw = self.api.fetch_raw(kind).await?;
        let records = match normalize(kind, &raw) {
            ResourceSet::Events(list) => {
                ResourceSet::Events(events::upcoming(list, self.clock.now_ms()))
            }
            other => other,
        };

        info!(%kind, count = records.len(), "refreshed from remote");

        let mut entries = self.entries.lock().await;
        entries.insert(
            kind,
            CacheEntry {
                records: records.clone(),
                fetched_at_ms: self.clock.now_ms(),
            },
        );
        Ok(records)
    }

    /// Drop the entry for `kind`; the next `get` fetches fresh.
    pub async fn invalidate(&self, kind: ResourceKind) {
        self.entries.lock().await.remove(&kind);
    }

    pub async fn invalidate_all(&self) {
        self.entries.lock().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

    struct ManualClock {
        now_ms: AtomicI64,
    }

    impl ManualClock {
        fn new(start_ms: i64) -> Self {
            Self {
                now_ms: AtomicI64::new(start_ms),
            }
        }

        fn advance(&self, delta_ms: i64) {
            self.now_ms.fetch_add(delta_ms, Ordering::SeqCst);
        }
    }

    impl ClockPort for ManualClock {
        fn now_ms(&self) -> i64 {
            self.now_ms.load(Ordering::SeqCst)
        }
    }

    struct StubApi {
        payload: Vec<Value>,
        fail: AtomicBool,
        fetch_count: AtomicUsize,
    }

    impl StubApi {
        fn new(payload: Vec<Value>) -> Self {
            Self {
                payload,
                fail: AtomicBool::new(false),
                fetch_count: AtomicUsize::new(0),
            }
        }

        fn failing(payload: Vec<Value>) -> Self {
            let api = Self::new(payload);
            api.fail.store(true, Ordering::SeqCst);
            api
        }

        fn fetch_count(&self) -> usize {
            self.fetch_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ResourceApiPort for StubApi {
        async fn fetch_raw(&self, _kind: ResourceKind) -> Result<Vec<Value>, ResourceApiError> {
            self.fetch_count.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(ResourceApiError::Status(500));
            }
            Ok(self.payload.clone())
        }
    }

    fn contact_payload() -> Vec<Value> {
        vec![json!({"expat-contacts": "c-1", "name": "Dana Reyes"})]
    }

    #[tokio::test]
    async fn second_get_within_ttl_hits_cache() {
        let api = Arc::new(StubApi::new(contact_payload()));
        let clock = Arc::new(ManualClock::new(0));
        let cache = RemoteDataCache::new(api.clone(), clock.clone());

        let first = cache.get(ResourceKind::Contacts).await.unwrap();
        clock.advance(60_000);
        let second = cache.get(ResourceKind::Contacts).await.unwrap();

        assert_eq!(api.fetch_count(), 1);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn expired_entry_forces_a_fresh_fetch() {
        let api = Arc::new(StubApi::new(contact_payload()));
        let clock = Arc::new(ManualClock::new(0));
        let cache = RemoteDataCache::new(api.clone(), clock.clone());

        cache.get(ResourceKind::Contacts).await.unwrap();
        clock.advance(ResourceKind::Contacts.ttl().as_millis() as i64);
        cache.get(ResourceKind::Contacts).await.unwrap();

        assert_eq!(api.fetch_count(), 2);
    }

    #[tokio::test]
    async fn failed_fetch_propagates_and_leaves_entry_untouched() {
        let api = Arc::new(StubApi::failing(contact_payload()));
        let clock = Arc::new(ManualClock::new(0));
        let cache = RemoteDataCache::new(api.clone(), clock.clone());

        assert!(cache.get(ResourceKind::Contacts).await.is_err());
        // Nothing was stored, so the next call attempts another fetch
        // rather than serving anything stale.
        assert!(cache.get(ResourceKind::Contacts).await.is_err());
        assert_eq!(api.fetch_count(), 2);

        api.fail.store(false, Ordering::SeqCst);
        let set = cache.get(ResourceKind::Contacts).await.unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(api.fetch_count(), 3);
    }

    #[tokio::test]
    async fn failure_after_expiry_keeps_old_entry_out_of_reach() {
        let api = Arc::new(StubApi::new(contact_payload()));
        let clock = Arc::new(ManualClock::new(0));
        let cache = RemoteDataCache::new(api.clone(), clock.clone());

        cache.get(ResourceKind::Contacts).await.unwrap();
        clock.advance(ResourceKind::Contacts.ttl().as_millis() as i64);
        api.fail.store(true, Ordering::SeqCst);

        // Expired plus failing upstream: the error propagates, the expired
        // entry is not served as a fallback.
        assert!(cache.get(ResourceKind::Contacts).await.is_err());
        assert!(cache.get(ResourceKind::Contacts).await.is_err());
        assert_eq!(api.fetch_count(), 3);
    }

    #[tokio::test]
    async fn empty_response_is_cached_until_expiry() {
        let api = Arc::new(StubApi::new(Vec::new()));
        let clock = Arc::new(ManualClock::new(0));
        let cache = RemoteDataCache::new(api.clone(), clock.clone());

        let set = cache.get(ResourceKind::Videos).await.unwrap();
        assert!(set.is_empty());

        clock.advance(60_000);
        let set = cache.get(ResourceKind::Videos).await.unwrap();
        assert!(set.is_empty());
        assert_eq!(api.fetch_count(), 1);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch_before_expiry() {
        let api = Arc::new(StubApi::new(contact_payload()));
        let clock = Arc::new(ManualClock::new(0));
        let cache = RemoteDataCache::new(api.clone(), clock.clone());

        cache.get(ResourceKind::Contacts).await.unwrap();
        cache.invalidate(ResourceKind::Contacts).await;
        cache.get(ResourceKind::Contacts).await.unwrap();

        assert_eq!(api.fetch_count(), 2);
    }

    #[tokio::test]
    async fn entries_are_keyed_per_endpoint() {
        let api = Arc::new(StubApi::new(contact_payload()));
        let clock = Arc::new(ManualClock::new(0));
        let cache = RemoteDataCache::new(api.clone(), clock.clone());

        cache.get(ResourceKind::Contacts).await.unwrap();
        cache.get(ResourceKind::Videos).await.unwrap();
        cache.get(ResourceKind::Contacts).await.unwrap();

        assert_eq!(api.fetch_count(), 2);
    }

    #[tokio::test]
    async fn events_are_shaped_before_caching() {
        // 2026-06-15T00:00:00Z
        let now_ms = 1_781_481_600_000;
        let api = Arc::new(StubApi::new(vec![
            json!({"id": "past", "title": "Old", "date": "2026-01-01", "time": "10:00 AM", "location": "Online"}),
            json!({"id": "soon", "title": "New", "date": "2026-07-01", "time": "10:00 AM", "location": "Online"}),
        ]));
        let clock = Arc::new(ManualClock::new(now_ms));
        let cache = RemoteDataCache::new(api, clock);

        let events = cache
            .get(ResourceKind::Events)
            .await
            .unwrap()
            .into_events()
            .unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "soon");
    }
}
