//! Per-(user, character) mutual exclusion for ledger writes.
//!
//! Concurrent pulls are independent tasks; two pulls of the same character
//! by the same user race on read-modify-write of the same ledger row. This
//! module hands out one async mutex per (user id, character name) pair so
//! those writes serialize while unrelated pulls proceed untouched.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Map capacity at which stale entries are pruned during acquire.
const PRUNE_THRESHOLD: usize = 1024;

/// Shared map of per-pair locks.
///
/// Cloning is cheap and every clone shares the same map. Entries are created
/// on first use and pruned once the map grows past a threshold; an entry is
/// only pruned while nobody holds or waits on it.
#[derive(Clone, Default)]
pub struct OwnershipLocks {
    locks: Arc<Mutex<HashMap<(u64, String), Arc<Mutex<()>>>>>,
}

impl OwnershipLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for one (user, character) pair, waiting if another
    /// task holds it. Character names are keyed without case so two spellings
    /// of one name contend on the same lock.
    ///
    /// The returned guard releases the lock on drop.
    pub async fn acquire(&self, user_id: u64, character_name: &str) -> OwnedMutexGuard<()> {
        let key = (user_id, character_name.to_lowercase());

        let cell = {
            let mut locks = self.locks.lock().await;
            if locks.len() >= PRUNE_THRESHOLD {
                // Holders and waiters keep a clone of the Arc, so a count of
                // one means the entry is idle and safe to drop.
                locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            }
            locks.entry(key).or_default().clone()
        };

        cell.lock_owned().await
    }
}
