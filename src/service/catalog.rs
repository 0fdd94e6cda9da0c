use sea_orm::DatabaseConnection;

use crate::cache::catalog::{CatalogCache, CatalogCounts};
use crate::data::character::CharacterRepository;
use crate::error::GachaError;
use crate::model::character::{CharacterDefinition, CreateCharacterParams, EditCharacterParams};

/// Administrative operations on the character catalog.
///
/// Every mutation writes the store first and then applies a targeted update
/// to the catalog cache, so readers and the draw path see changes without a
/// full refresh.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a CatalogCache,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a CatalogCache) -> Self {
        Self { db, cache }
    }

    /// Creates a new catalog entry.
    ///
    /// # Arguments
    /// - `params`: Fields of the new entry; the name's casing is preserved
    ///
    /// # Returns
    /// - `Ok(CharacterDefinition)`: The created entry
    /// - `Err(GachaError::AlreadyExists)`: A character with this name exists
    ///   (names match case-insensitively)
    /// - `Err(GachaError::InvalidInput)`: The name is empty
    pub async fn create(
        &self,
        params: CreateCharacterParams,
    ) -> Result<CharacterDefinition, GachaError> {
        if params.name.trim().is_empty() {
            return Err(GachaError::InvalidInput(
                "Character name cannot be empty".to_string(),
            ));
        }
        if self.cache.contains(&params.name).await {
            return Err(GachaError::AlreadyExists(format!(
                "Character '{}' already exists",
                params.name
            )));
        }

        let repo = CharacterRepository::new(self.db);
        let created = repo.upsert(params).await?;
        self.cache.upsert(created.clone()).await;

        tracing::info!("Created character '{}' ({})", created.name, created.rarity);

        Ok(created)
    }

    /// Edits an existing catalog entry.
    ///
    /// Unset fields keep their current values; the stored name and its casing
    /// never change through an edit.
    ///
    /// # Arguments
    /// - `params`: Name of the entry plus the fields to change
    ///
    /// # Returns
    /// - `Ok(CharacterDefinition)`: The entry after the edit
    /// - `Err(GachaError::NotFound)`: No character with this name
    /// - `Err(GachaError::InvalidInput)`: No fields were provided to change
    pub async fn edit(
        &self,
        params: EditCharacterParams,
    ) -> Result<CharacterDefinition, GachaError> {
        let current = self.cache.get(&params.name).await.ok_or_else(|| {
            GachaError::NotFound(format!("Character '{}' not found", params.name))
        })?;

        if params.is_noop() {
            return Err(GachaError::InvalidInput(
                "No fields provided to edit".to_string(),
            ));
        }

        // Merge unset fields from the current definition; resolve the name to
        // its stored casing so the row is matched exactly.
        let merged = CreateCharacterParams {
            name: current.name,
            rarity: params.rarity.unwrap_or(current.rarity),
            image_url: params.image_url.unwrap_or(current.image_url),
            description: params.description.unwrap_or(current.description),
        };

        let repo = CharacterRepository::new(self.db);
        let updated = repo.upsert(merged).await?;
        self.cache.upsert(updated.clone()).await;

        tracing::info!("Edited character '{}'", updated.name);

        Ok(updated)
    }

    /// Removes a catalog entry.
    ///
    /// Existing ownership records keep the character's name and rarity; only
    /// the catalog side is deleted.
    ///
    /// # Arguments
    /// - `name`: Name of the entry to remove (matched case-insensitively)
    ///
    /// # Returns
    /// - `Ok(CharacterDefinition)`: The entry as it was before removal
    /// - `Err(GachaError::NotFound)`: No character with this name
    pub async fn remove(&self, name: &str) -> Result<CharacterDefinition, GachaError> {
        let current = self
            .cache
            .get(name)
            .await
            .ok_or_else(|| GachaError::NotFound(format!("Character '{}' not found", name)))?;

        let repo = CharacterRepository::new(self.db);
        repo.delete(&current.name).await?;
        self.cache.remove(&current.name).await;

        tracing::info!("Removed character '{}'", current.name);

        Ok(current)
    }

    /// Rebuilds the catalog cache from the store.
    ///
    /// # Returns
    /// - `Ok(usize)`: Number of characters loaded
    /// - `Err(GachaError)`: Database error while reading the catalog
    pub async fn refresh(&self) -> Result<usize, GachaError> {
        let repo = CharacterRepository::new(self.db);
        self.cache.refresh(&repo).await
    }

    /// Per-tier entry counts from the cache.
    pub async fn counts(&self) -> CatalogCounts {
        self.cache.counts().await
    }
}
