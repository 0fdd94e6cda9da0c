//! In-memory projection of the ownership ledger.
//!
//! This module provides the `InventoryCache`, a derived view of the
//! inventory store keyed by user id. Each user's records keep acquisition
//! order, and every aggregate is a linear scan over the user's records at
//! call time, so aggregates can never drift from the record set. Thread-safe
//! via interior locking; the handle is cheap to clone and shares one
//! underlying cache.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::data::inventory::InventoryRepository;
use crate::error::GachaError;
use crate::model::inventory::OwnershipRecord;
use crate::model::rarity::Rarity;

/// Shared handle to the inventory cache.
#[derive(Clone)]
pub struct InventoryCache {
    entries: Arc<RwLock<HashMap<u64, Vec<OwnershipRecord>>>>,
}

impl InventoryCache {
    /// Creates an empty inventory cache.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Rebuilds the cache from the inventory store, replacing all previous
    /// contents.
    ///
    /// The store scan arrives in acquisition order, so each user's vector is
    /// rebuilt in the same order a fresh cache would have grown.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of ownership records loaded
    /// - `Err(GachaError)` - Store failure or an unparsable stored row
    pub async fn refresh(&self, repo: &InventoryRepository<'_>) -> Result<usize, GachaError> {
        let records = repo.fetch_all().await?;

        let mut rebuilt: HashMap<u64, Vec<OwnershipRecord>> = HashMap::new();
        for record in records {
            rebuilt.entry(record.user_id).or_default().push(record);
        }
        let total: usize = rebuilt.values().map(Vec::len).sum();
        let users = rebuilt.len();

        *self.entries.write().await = rebuilt;
        tracing::info!(
            "Inventory cache loaded with {} records across {} users",
            total,
            users
        );

        Ok(total)
    }

    /// One user's records in acquisition order; empty for unknown users.
    pub async fn get(&self, user_id: u64) -> Vec<OwnershipRecord> {
        let entries = self.entries.read().await;
        entries.get(&user_id).cloned().unwrap_or_default()
    }

    /// One user's records of a single tier, acquisition order preserved.
    pub async fn get_by_rarity(&self, user_id: u64, rarity: Rarity) -> Vec<OwnershipRecord> {
        let entries = self.entries.read().await;
        entries
            .get(&user_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| record.rarity == rarity)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Looks up one (user, character) record, matching the name without
    /// case.
    pub async fn find(&self, user_id: u64, character_name: &str) -> Option<OwnershipRecord> {
        let entries = self.entries.read().await;
        entries.get(&user_id).and_then(|records| {
            records
                .iter()
                .find(|record| record.character_name.eq_ignore_ascii_case(character_name))
                .cloned()
        })
    }

    /// Inserts a record or overwrites the existing one for the same
    /// (user, character) pair. Never creates duplicates for the pair; a new
    /// record lands at the end of the user's acquisition order.
    pub async fn upsert(&self, record: OwnershipRecord) {
        let mut entries = self.entries.write().await;
        let records = entries.entry(record.user_id).or_default();

        match records
            .iter()
            .position(|r| r.character_name.eq_ignore_ascii_case(&record.character_name))
        {
            Some(i) => {
                tracing::debug!(
                    "Inventory cache replaced record for user {} character '{}'",
                    record.user_id,
                    record.character_name
                );
                records[i] = record;
            }
            None => {
                tracing::debug!(
                    "Inventory cache added record for user {} character '{}'",
                    record.user_id,
                    record.character_name
                );
                records.push(record);
            }
        }
    }

    /// Adds one to a record's owned count.
    ///
    /// No-op with a warning when the record is absent; the next refresh
    /// brings cache and store back in step.
    pub async fn increment(&self, user_id: u64, character_name: &str) {
        let mut entries = self.entries.write().await;
        match Self::position(&mut entries, user_id, character_name) {
            Some(record) => record.owned += 1,
            None => tracing::warn!(
                "Inventory cache increment skipped: no record for user {} character '{}'",
                user_id,
                character_name
            ),
        }
    }

    /// Subtracts one from a record's owned count, flooring at zero.
    ///
    /// No-op with a warning when the record is absent.
    pub async fn decrement(&self, user_id: u64, character_name: &str) {
        let mut entries = self.entries.write().await;
        match Self::position(&mut entries, user_id, character_name) {
            Some(record) => record.owned = record.owned.saturating_sub(1),
            None => tracing::warn!(
                "Inventory cache decrement skipped: no record for user {} character '{}'",
                user_id,
                character_name
            ),
        }
    }

    /// Drops every record for a user. Returns whether the user had any.
    pub async fn remove_user(&self, user_id: u64) -> bool {
        let mut entries = self.entries.write().await;
        entries.remove(&user_id).is_some()
    }

    /// Total copies owned across all of a user's records.
    pub async fn total_owned(&self, user_id: u64) -> u64 {
        let entries = self.entries.read().await;
        entries
            .get(&user_id)
            .map(|records| records.iter().map(|r| u64::from(r.owned)).sum())
            .unwrap_or(0)
    }

    /// Number of distinct characters the user owns at least one copy of.
    pub async fn total_unique(&self, user_id: u64) -> u64 {
        let entries = self.entries.read().await;
        entries
            .get(&user_id)
            .map(|records| records.iter().filter(|r| r.owned > 0).count() as u64)
            .unwrap_or(0)
    }

    /// Total copies of one tier the user owns.
    pub async fn total_owned_by_rarity(&self, user_id: u64, rarity: Rarity) -> u64 {
        let entries = self.entries.read().await;
        entries
            .get(&user_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| r.rarity == rarity)
                    .map(|r| u64::from(r.owned))
                    .sum()
            })
            .unwrap_or(0)
    }

    /// Number of distinct characters of one tier the user owns at least one
    /// copy of.
    pub async fn total_unique_by_rarity(&self, user_id: u64, rarity: Rarity) -> u64 {
        let entries = self.entries.read().await;
        entries
            .get(&user_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| r.rarity == rarity && r.owned > 0)
                    .count() as u64
            })
            .unwrap_or(0)
    }

    /// Case-insensitive substring search over a user's owned character
    /// names, capped at `limit`, in acquisition order.
    pub async fn search_names(&self, user_id: u64, fragment: &str, limit: usize) -> Vec<String> {
        let needle = fragment.trim().to_lowercase();
        let entries = self.entries.read().await;
        entries
            .get(&user_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| r.character_name.to_lowercase().contains(&needle))
                    .map(|r| r.character_name.clone())
                    .take(limit)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn position<'a>(
        entries: &'a mut HashMap<u64, Vec<OwnershipRecord>>,
        user_id: u64,
        character_name: &str,
    ) -> Option<&'a mut OwnershipRecord> {
        entries.get_mut(&user_id).and_then(|records| {
            records
                .iter_mut()
                .find(|record| record.character_name.eq_ignore_ascii_case(character_name))
        })
    }
}

impl Default for InventoryCache {
    fn default() -> Self {
        Self::new()
    }
}
