//! In-memory projection of the character catalog.
//!
//! This module provides the `CatalogCache`, a derived view of the catalog
//! store holding a flat name-keyed map and one pool per rarity tier. The
//! draw path samples uniformly from a tier pool without touching the store;
//! admin edits apply targeted updates; `refresh` rebuilds everything from
//! the store in one pass. Thread-safe via interior locking; the handle is
//! cheap to clone and shares one underlying cache.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use rand::seq::IndexedRandom;
use tokio::sync::RwLock;

use crate::data::character::CharacterRepository;
use crate::error::GachaError;
use crate::model::character::CharacterDefinition;
use crate::model::rarity::Rarity;

/// Flat map plus rarity partitions, always mutated together.
///
/// Both views live behind one lock so an entry can never be present in the
/// flat map while missing from its partition, or the reverse. The flat map
/// is keyed by lowercased name; definitions keep their stored casing.
#[derive(Default)]
struct CatalogIndex {
    by_name: HashMap<String, CharacterDefinition>,
    by_rarity: BTreeMap<Rarity, Vec<CharacterDefinition>>,
}

impl CatalogIndex {
    /// Builds a fresh index from a full store scan.
    fn from_definitions(definitions: Vec<CharacterDefinition>) -> Self {
        let mut index = CatalogIndex::default();
        for definition in definitions {
            index.insert(definition);
        }
        index
    }

    /// Inserts or replaces one entry in both views.
    ///
    /// A replaced entry is evicted from its previous partition first, so a
    /// rarity edit moves the entry rather than duplicating it.
    fn insert(&mut self, definition: CharacterDefinition) {
        let key = definition.name.to_lowercase();
        if let Some(previous) = self.by_name.insert(key, definition.clone()) {
            self.evict_from_partition(&previous);
        }
        self.by_rarity
            .entry(definition.rarity)
            .or_default()
            .push(definition);
    }

    /// Removes one entry from both views.
    fn remove(&mut self, name: &str) -> Option<CharacterDefinition> {
        let removed = self.by_name.remove(&name.to_lowercase())?;
        self.evict_from_partition(&removed);
        Some(removed)
    }

    fn evict_from_partition(&mut self, definition: &CharacterDefinition) {
        let key = definition.name.to_lowercase();
        if let Some(pool) = self.by_rarity.get_mut(&definition.rarity) {
            pool.retain(|c| c.name.to_lowercase() != key);
        }
    }
}

/// Shared handle to the catalog cache.
///
/// Designed to be cloned into every component that reads the catalog; all
/// clones observe the same data. A refresh builds a complete replacement
/// index off-lock and swaps it in, so concurrent readers never see a
/// partially populated cache.
#[derive(Clone)]
pub struct CatalogCache {
    index: Arc<RwLock<CatalogIndex>>,
}

impl CatalogCache {
    /// Creates an empty catalog cache.
    pub fn new() -> Self {
        Self {
            index: Arc::new(RwLock::new(CatalogIndex::default())),
        }
    }

    /// Rebuilds the cache from the catalog store.
    ///
    /// One full scan feeds both the flat map and the partitions; previous
    /// contents are discarded wholesale, never merged, so a character
    /// removed from the store cannot linger here.
    ///
    /// # Arguments
    /// - `repo` - Catalog repository to load from
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of characters loaded
    /// - `Err(GachaError)` - Store failure or an unparsable stored row
    pub async fn refresh(&self, repo: &CharacterRepository<'_>) -> Result<usize, GachaError> {
        let definitions = repo.fetch_all().await?;
        let rebuilt = CatalogIndex::from_definitions(definitions);
        let count = rebuilt.by_name.len();

        for (rarity, pool) in &rebuilt.by_rarity {
            tracing::debug!("Catalog partition {}: {} characters", rarity, pool.len());
        }

        *self.index.write().await = rebuilt;
        tracing::info!("Catalog cache loaded with {} characters", count);

        Ok(count)
    }

    /// Looks up a character by name, ignoring case.
    pub async fn get(&self, name: &str) -> Option<CharacterDefinition> {
        let index = self.index.read().await;
        index.by_name.get(&name.to_lowercase()).cloned()
    }

    /// True when a character with this name is cached (case-insensitive).
    pub async fn contains(&self, name: &str) -> bool {
        let index = self.index.read().await;
        index.by_name.contains_key(&name.to_lowercase())
    }

    /// Uniform random choice within one tier's pool.
    ///
    /// Returns `None` when the pool is empty; the caller decides whether to
    /// refresh and retry.
    pub async fn pick_random(&self, rarity: Rarity) -> Option<CharacterDefinition> {
        let index = self.index.read().await;
        let pool = index.by_rarity.get(&rarity)?;
        pool.choose(&mut rand::rng()).cloned()
    }

    /// Inserts or replaces one entry, keeping flat map and partitions in
    /// step.
    pub async fn upsert(&self, definition: CharacterDefinition) {
        let mut index = self.index.write().await;
        tracing::debug!(
            "Catalog cache upsert: '{}' ({})",
            definition.name,
            definition.rarity
        );
        index.insert(definition);
    }

    /// Removes one entry from both views (case-insensitive).
    pub async fn remove(&self, name: &str) -> Option<CharacterDefinition> {
        let mut index = self.index.write().await;
        let removed = index.remove(name);
        if let Some(definition) = &removed {
            tracing::debug!("Catalog cache removed '{}'", definition.name);
        }
        removed
    }

    /// Every cached character, sorted by tier then name.
    pub async fn all(&self) -> Vec<CharacterDefinition> {
        let index = self.index.read().await;
        let mut definitions: Vec<CharacterDefinition> = index.by_name.values().cloned().collect();
        definitions.sort_by(|a, b| {
            a.rarity
                .cmp(&b.rarity)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        definitions
    }

    /// Case-insensitive substring search over catalog names.
    ///
    /// Returns stored-casing names, at most `limit` of them, in tier-then-
    /// name order. Backs autocomplete, which is why results are capped.
    pub async fn search_names(&self, fragment: &str, limit: usize) -> Vec<String> {
        let needle = fragment.trim().to_lowercase();
        self.all()
            .await
            .into_iter()
            .filter(|definition| definition.name.to_lowercase().contains(&needle))
            .map(|definition| definition.name)
            .take(limit)
            .collect()
    }

    /// Per-tier and total character counts.
    pub async fn counts(&self) -> CatalogCounts {
        let index = self.index.read().await;
        let by_rarity: BTreeMap<Rarity, usize> = Rarity::ALL
            .into_iter()
            .map(|rarity| {
                let size = index.by_rarity.get(&rarity).map_or(0, Vec::len);
                (rarity, size)
            })
            .collect();
        let total = index.by_name.len();

        CatalogCounts { by_rarity, total }
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of catalog sizes, one count per tier plus the total.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogCounts {
    by_rarity: BTreeMap<Rarity, usize>,
    total: usize,
}

impl CatalogCounts {
    /// Number of characters cached under one tier.
    pub fn for_rarity(&self, rarity: Rarity) -> usize {
        self.by_rarity.get(&rarity).copied().unwrap_or(0)
    }

    /// Number of characters cached across all tiers.
    pub fn total(&self) -> usize {
        self.total
    }
}

/// One-line summary in tier order, e.g.
/// `Common: 3 | Rare: 2 | Epic: 1 | Legendary: 0 | Total: 6`.
impl fmt::Display for CatalogCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rarity in Rarity::ALL {
            write!(f, "{}: {} | ", rarity, self.for_rarity(rarity))?;
        }
        write!(f, "Total: {}", self.total)
    }
}
