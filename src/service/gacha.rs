//! Gacha draw orchestrator.
//!
//! This module provides the `GachaService` that runs one pull end to end:
//! sample a rarity tier from the configured weight table, select a random
//! character from that tier's catalog partition, check whether the user
//! already owns it, and persist the result to the ownership store before
//! mirroring it into the inventory cache.
//!
//! Writes for one (user, character) pair are serialized through
//! `OwnershipLocks` so two rapid pulls of the same character cannot lose an
//! update. The store write always happens before the cache mirror; a failed
//! store write leaves the caches untouched.

use sea_orm::DatabaseConnection;

use crate::cache::catalog::CatalogCache;
use crate::cache::inventory::InventoryCache;
use crate::config::Config;
use crate::data::character::CharacterRepository;
use crate::data::inventory::InventoryRepository;
use crate::error::GachaError;
use crate::model::character::{is_skin_variant, CharacterDefinition};
use crate::model::inventory::UpsertOwnershipParam;
use crate::model::pull::{AbortedReason, PullOutcome, PullResult};
use crate::model::rarity::{Rarity, WeightTable};
use crate::sampler::sample_rarity;
use crate::service::lock::OwnershipLocks;

/// Service that runs gacha pulls.
///
/// Holds cheap-to-clone handles to the database pool, both caches, and the
/// per-pair lock map, plus the immutable draw configuration loaded at
/// startup. Clones share all of them.
#[derive(Clone)]
pub struct GachaService {
    db: DatabaseConnection,
    catalog: CatalogCache,
    inventory: InventoryCache,
    locks: OwnershipLocks,
    weights: WeightTable,
    base_names: Vec<String>,
}

impl GachaService {
    /// Creates a new gacha service.
    ///
    /// # Arguments
    /// - `db`: Database connection pool
    /// - `catalog`: Shared catalog cache
    /// - `inventory`: Shared inventory cache
    /// - `locks`: Shared per-(user, character) lock map
    /// - `config`: Application configuration carrying the weight table and
    ///   skin base names
    pub fn new(
        db: DatabaseConnection,
        catalog: CatalogCache,
        inventory: InventoryCache,
        locks: OwnershipLocks,
        config: &Config,
    ) -> Self {
        Self {
            db,
            catalog,
            inventory,
            locks,
            weights: config.weights.clone(),
            base_names: config.base_names.clone(),
        }
    }

    /// Runs one pull for a user.
    ///
    /// # Arguments
    /// - `user_id`: Discord ID of the pulling user
    /// - `user_name`: Display name recorded on a first acquisition
    ///
    /// # Returns
    /// - `Ok(PullOutcome::Awarded)`: A character was drawn and the ownership
    ///   ledger updated
    /// - `Ok(PullOutcome::Aborted)`: The sampled tier has no characters, even
    ///   after one cache refresh; nothing was written
    /// - `Err(GachaError)`: Weight table misconfiguration or store failure;
    ///   on store failure the caches are untouched
    pub async fn pull(&self, user_id: u64, user_name: &str) -> Result<PullOutcome, GachaError> {
        let rarity = sample_rarity(&self.weights, &mut rand::rng())?;

        let character = match self.select_character(rarity).await? {
            Some(character) => character,
            None => {
                tracing::warn!(
                    "Pull aborted for user {}: no characters in tier {}",
                    user_id,
                    rarity
                );
                return Ok(PullOutcome::Aborted(AbortedReason::NoCharactersForRarity {
                    rarity,
                }));
            }
        };

        // Serialize the ownership check and write for this pair
        let _guard = self.locks.acquire(user_id, &character.name).await;

        let repo = InventoryRepository::new(&self.db);
        let first_acquisition = match self.inventory.find(user_id, &character.name).await {
            Some(_) => {
                let rows = repo.increment(user_id, &character.name).await?;
                if rows > 0 {
                    self.inventory.increment(user_id, &character.name).await;
                    false
                } else {
                    // The cache claims a record the store does not have.
                    // Divergence heals through a full refresh; the store is
                    // the truth, so this pull is the user's first copy.
                    tracing::warn!(
                        "Ownership row missing for user {} character '{}', refreshing inventory cache",
                        user_id,
                        character.name
                    );
                    self.inventory.refresh(&repo).await?;
                    self.record_first_copy(&repo, user_id, user_name, &character)
                        .await?;
                    true
                }
            }
            None => {
                self.record_first_copy(&repo, user_id, user_name, &character)
                    .await?;
                true
            }
        };

        tracing::info!(
            "Awarded '{}' ({}) to user {} (first acquisition: {})",
            character.name,
            character.rarity,
            user_id,
            first_acquisition
        );

        let is_skin = is_skin_variant(&character.name, &self.base_names);

        Ok(PullOutcome::Awarded(PullResult {
            character,
            rarity,
            first_acquisition,
            is_skin,
        }))
    }

    /// Inserts the ownership row for a user's first copy and mirrors it into
    /// the inventory cache.
    ///
    /// Store write strictly before cache mirror; a failed insert leaves the
    /// cache untouched.
    async fn record_first_copy(
        &self,
        repo: &InventoryRepository<'_>,
        user_id: u64,
        user_name: &str,
        character: &CharacterDefinition,
    ) -> Result<(), GachaError> {
        let record = repo
            .insert(UpsertOwnershipParam {
                user_id,
                user_name: user_name.to_string(),
                character_name: character.name.clone(),
                rarity: character.rarity,
                owned: 1,
            })
            .await?;
        self.inventory.upsert(record).await;

        Ok(())
    }

    /// Picks a random character from the sampled tier.
    ///
    /// An empty tier triggers exactly one cache refresh from the store before
    /// the pick is retried; `None` after that means the tier really has no
    /// characters.
    async fn select_character(
        &self,
        rarity: Rarity,
    ) -> Result<Option<CharacterDefinition>, GachaError> {
        if let Some(character) = self.catalog.pick_random(rarity).await {
            return Ok(Some(character));
        }

        tracing::debug!("Tier {} empty in catalog cache, refreshing from store", rarity);
        let repo = CharacterRepository::new(&self.db);
        self.catalog.refresh(&repo).await?;

        Ok(self.catalog.pick_random(rarity).await)
    }
}
