use dashmap::DashMap;
use matchcast_domain::ResourceKey;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Serialises upstream fetches per resource key.
///
/// Holding the permit covers fetch, cache write and publish, so results of
/// one resource land in the order their fetches started. Keys come from the
/// configured resource classes, so the map stays bounded.
#[derive(Default)]
pub struct FetchGate {
    locks: DashMap<ResourceKey, Arc<Mutex<()>>, FxBuildHasher>,
}

pub type FetchPermit = OwnedMutexGuard<()>;

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, key: &ResourceKey) -> FetchPermit {
        let lock = Arc::clone(self.locks.entry(key.clone()).or_default().value());
        lock.lock_owned().await
    }

    /// True while some task holds the permit for `key`.
    pub fn is_busy(&self, key: &ResourceKey) -> bool {
        self.locks
            .get(key)
            .is_some_and(|lock| lock.try_lock().is_err())
    }
}
