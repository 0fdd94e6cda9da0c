use sea_orm::DatabaseConnection;

use crate::cache::catalog::CatalogCache;
use crate::cache::inventory::InventoryCache;
use crate::data::inventory::InventoryRepository;
use crate::error::GachaError;
use crate::model::inventory::{OwnershipRecord, UpsertOwnershipParam};
use crate::service::lock::OwnershipLocks;

/// Administrative operations on user inventories.
///
/// Mutations take the same per-(user, character) lock as the draw path and
/// write the store before mirroring the cache, so admin adjustments and
/// concurrent pulls cannot lose updates to each other.
pub struct InventoryService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a InventoryCache,
    catalog: &'a CatalogCache,
    locks: &'a OwnershipLocks,
}

impl<'a> InventoryService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        cache: &'a InventoryCache,
        catalog: &'a CatalogCache,
        locks: &'a OwnershipLocks,
    ) -> Self {
        Self {
            db,
            cache,
            catalog,
            locks,
        }
    }

    /// Grants a user one copy of a character.
    ///
    /// Creates the ownership record when the user has none, otherwise
    /// increments the owned count.
    ///
    /// # Arguments
    /// - `user_id`: Discord ID of the receiving user
    /// - `user_name`: Display name recorded on a first acquisition
    /// - `character_name`: Catalog name (matched case-insensitively)
    ///
    /// # Returns
    /// - `Ok(OwnershipRecord)`: The record after the grant
    /// - `Err(GachaError::NotFound)`: No such character in the catalog
    pub async fn give(
        &self,
        user_id: u64,
        user_name: &str,
        character_name: &str,
    ) -> Result<OwnershipRecord, GachaError> {
        let definition = self.catalog.get(character_name).await.ok_or_else(|| {
            GachaError::NotFound(format!("Character '{}' not found", character_name))
        })?;

        let _guard = self.locks.acquire(user_id, &definition.name).await;

        let repo = InventoryRepository::new(self.db);
        let rows = repo.increment(user_id, &definition.name).await?;
        let record = if rows > 0 {
            repo.find(user_id, &definition.name)
                .await?
                .ok_or_else(|| {
                    GachaError::NotFound("Ownership row not found after increment".to_string())
                })?
        } else {
            repo.insert(UpsertOwnershipParam {
                user_id,
                user_name: user_name.to_string(),
                character_name: definition.name.clone(),
                rarity: definition.rarity,
                owned: 1,
            })
            .await?
        };
        self.cache.upsert(record.clone()).await;

        tracing::info!(
            "Gave '{}' to user {} (owned {})",
            record.character_name,
            user_id,
            record.owned
        );

        Ok(record)
    }

    /// Takes one copy of a character from a user, flooring at zero.
    ///
    /// Works on the ownership ledger directly, so copies of a character that
    /// has since been removed from the catalog can still be taken.
    ///
    /// # Arguments
    /// - `user_id`: Discord ID of the user
    /// - `character_name`: Owned character name (matched case-insensitively)
    ///
    /// # Returns
    /// - `Ok(Some(OwnershipRecord))`: The record after the take
    /// - `Ok(None)`: The user has no copies to take; nothing changed
    /// - `Err(GachaError)`: Database error
    pub async fn take(
        &self,
        user_id: u64,
        character_name: &str,
    ) -> Result<Option<OwnershipRecord>, GachaError> {
        // Resolve to the stored casing when the cache knows the pair.
        let stored_name = match self.cache.find(user_id, character_name).await {
            Some(record) => record.character_name,
            None => character_name.to_string(),
        };

        let _guard = self.locks.acquire(user_id, &stored_name).await;

        let repo = InventoryRepository::new(self.db);
        let rows = repo.decrement(user_id, &stored_name).await?;
        if rows == 0 {
            tracing::warn!(
                "Take skipped: user {} has no copies of '{}'",
                user_id,
                stored_name
            );
            return Ok(None);
        }

        let record = repo.find(user_id, &stored_name).await?.ok_or_else(|| {
            GachaError::NotFound("Ownership row not found after decrement".to_string())
        })?;
        self.cache.upsert(record.clone()).await;

        tracing::info!(
            "Took one '{}' from user {} (owned {})",
            record.character_name,
            user_id,
            record.owned
        );

        Ok(Some(record))
    }

    /// Deletes a user's entire inventory from the store and the cache.
    ///
    /// # Arguments
    /// - `user_id`: Discord ID of the user
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of ownership rows deleted
    /// - `Err(GachaError)`: Database error
    pub async fn reset(&self, user_id: u64) -> Result<u64, GachaError> {
        let repo = InventoryRepository::new(self.db);
        let rows = repo.delete_user(user_id).await?;
        self.cache.remove_user(user_id).await;

        tracing::info!("Reset inventory for user {} ({} rows)", user_id, rows);

        Ok(rows)
    }

    /// Rebuilds the inventory cache from the store.
    ///
    /// # Returns
    /// - `Ok(usize)`: Number of ownership records loaded
    /// - `Err(GachaError)`: Database error while reading the ledger
    pub async fn refresh(&self) -> Result<usize, GachaError> {
        let repo = InventoryRepository::new(self.db);
        self.cache.refresh(&repo).await
    }
}
