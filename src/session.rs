//! Session Reading Store
//!
//! The engine itself keeps no state between requests. The calling layer
//! may remember each session's last submitted soil reading so follow-up
//! requests (a schedule after an evaluation, say) can omit the readings.
//! The store sits behind a trait so tests use the in-memory map and
//! deployments can plug in an external cache.

use std::sync::{Arc, RwLock};

use rustc_hash::FxHashMap;

use crate::soil::SoilReading;

/// Keyed storage for the last reading a session submitted.
/// Last write wins per key; reads return a detached copy.
pub trait ReadingStore: Send + Sync {
    fn put(&self, key: &str, reading: SoilReading);
    fn get(&self, key: &str) -> Option<SoilReading>;
}

/// Process-local store backed by a lock-guarded map
#[derive(Default)]
pub struct InMemoryReadingStore {
    readings: RwLock<FxHashMap<String, SoilReading>>,
}

impl InMemoryReadingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.readings
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReadingStore for InMemoryReadingStore {
    fn put(&self, key: &str, reading: SoilReading) {
        let mut map = self.readings.write().unwrap_or_else(|e| e.into_inner());
        map.insert(key.to_string(), reading);
    }

    fn get(&self, key: &str) -> Option<SoilReading> {
        let map = self.readings.read().unwrap_or_else(|e| e.into_inner());
        map.get(key).cloned()
    }
}

/// Per-request context: a session key plus the store it reads through.
/// Owned by the calling layer and passed into handlers explicitly.
#[derive(Clone)]
pub struct RequestContext {
    session: String,
    store: Arc<dyn ReadingStore>,
}

impl RequestContext {
    pub fn new(session: impl Into<String>, store: Arc<dyn ReadingStore>) -> Self {
        Self {
            session: session.into(),
            store,
        }
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    /// Save this session's reading for later requests
    pub fn remember(&self, reading: &SoilReading) {
        self.store.put(&self.session, reading.clone());
    }

    /// The reading this session last submitted, if any
    pub fn cached_reading(&self) -> Option<SoilReading> {
        self.store.get(&self.session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soil::SoilAttribute;

    fn reading(nitrogen: &str) -> SoilReading {
        let mut r = SoilReading::new();
        r.set(SoilAttribute::Nitrogen, nitrogen);
        r
    }

    #[test]
    fn test_put_then_get_returns_the_reading() {
        let store = InMemoryReadingStore::new();
        store.put("farmer-1", reading("High (81–100%)"));
        let cached = store.get("farmer-1").unwrap();
        assert_eq!(cached.get(SoilAttribute::Nitrogen), Some("High (81–100%)"));
        assert!(store.get("farmer-2").is_none());
    }

    #[test]
    fn test_last_write_wins_per_key() {
        let store = InMemoryReadingStore::new();
        store.put("farmer-1", reading("High (81–100%)"));
        store.put("farmer-1", reading("Low (0-50%)"));
        let cached = store.get("farmer-1").unwrap();
        assert_eq!(cached.get(SoilAttribute::Nitrogen), Some("Low (0-50%)"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_context_scopes_reads_to_its_session() {
        let store = Arc::new(InMemoryReadingStore::new());
        let ctx_a = RequestContext::new("session-a", store.clone() as Arc<dyn ReadingStore>);
        let ctx_b = RequestContext::new("session-b", store.clone() as Arc<dyn ReadingStore>);

        ctx_a.remember(&reading("High (81–100%)"));
        assert!(ctx_a.cached_reading().is_some());
        assert!(ctx_b.cached_reading().is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_contexts_share_one_store() {
        let store: Arc<dyn ReadingStore> = Arc::new(InMemoryReadingStore::new());
        let first = RequestContext::new("session-a", store.clone());
        first.remember(&reading("Medium (51-80%)"));

        // A later request for the same session sees the earlier write
        let second = RequestContext::new("session-a", store);
        let cached = second.cached_reading().unwrap();
        assert_eq!(
            cached.get(SoilAttribute::Nitrogen),
            Some("Medium (51-80%)")
        );
    }
}
