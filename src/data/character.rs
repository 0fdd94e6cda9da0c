//! Character catalog repository for database operations.
//!
//! This module provides the `CharacterRepository` for managing catalog rows
//! in the database. It handles catalog queries, the admin upsert, and
//! deletion with conversion between entity models and domain models at the
//! infrastructure boundary.

use migration::OnConflict;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::error::GachaError;
use crate::model::character::{CharacterDefinition, CreateCharacterParams};
use crate::model::rarity::Rarity;

/// Repository providing database operations for the character catalog.
///
/// This struct holds a reference to the database connection and provides
/// methods for reading, upserting, and deleting catalog rows.
pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    /// Creates a new CharacterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CharacterRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches every catalog row, ordered by name.
    ///
    /// The cache refresh builds both the flat map and the rarity partitions
    /// from this single scan.
    ///
    /// # Returns
    /// - `Ok(Vec<CharacterDefinition>)` - All catalog entries (empty if none)
    /// - `Err(GachaError)` - Database error or an unparsable stored row
    pub async fn fetch_all(&self) -> Result<Vec<CharacterDefinition>, GachaError> {
        let entities = entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Name)
            .all(self.db)
            .await?;

        let definitions = entities
            .into_iter()
            .map(CharacterDefinition::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(definitions)
    }

    /// Finds a catalog entry by its exact stored name.
    ///
    /// Case-insensitive resolution belongs to the catalog cache; this is the
    /// point lookup on the primary key.
    ///
    /// # Arguments
    /// - `name` - Exact stored character name
    ///
    /// # Returns
    /// - `Ok(Some(CharacterDefinition))` - Entry found
    /// - `Ok(None)` - No entry with that name
    /// - `Err(GachaError)` - Database error or an unparsable stored row
    pub async fn fetch_by_name(
        &self,
        name: &str,
    ) -> Result<Option<CharacterDefinition>, GachaError> {
        let entity = entity::prelude::Character::find_by_id(name.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(CharacterDefinition::from_entity).transpose()?)
    }

    /// Fetches all catalog rows of one rarity tier, ordered by name.
    ///
    /// Stored labels match the tier without case, the same tolerance the
    /// domain parser applies when reading rows back.
    ///
    /// # Arguments
    /// - `rarity` - Tier to filter on
    ///
    /// # Returns
    /// - `Ok(Vec<CharacterDefinition>)` - Matching entries (empty if none)
    /// - `Err(GachaError)` - Database error or an unparsable stored row
    pub async fn fetch_by_rarity(
        &self,
        rarity: Rarity,
    ) -> Result<Vec<CharacterDefinition>, GachaError> {
        let entities = entity::prelude::Character::find()
            .filter(
                Func::lower(Expr::col(entity::character::Column::Rarity))
                    .eq(rarity.as_str().to_lowercase()),
            )
            .order_by_asc(entity::character::Column::Name)
            .all(self.db)
            .await?;

        let definitions = entities
            .into_iter()
            .map(CharacterDefinition::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(definitions)
    }

    /// Upserts a catalog entry from parameter model.
    ///
    /// Inserts a new row or, when a row with the same name exists, updates
    /// its rarity, artwork, and description in place. The name itself never
    /// changes through this path.
    ///
    /// # Arguments
    /// - `params` - Catalog entry fields
    ///
    /// # Returns
    /// - `Ok(CharacterDefinition)` - The created or updated entry
    /// - `Err(GachaError)` - Database error during insert or update
    pub async fn upsert(
        &self,
        params: CreateCharacterParams,
    ) -> Result<CharacterDefinition, GachaError> {
        let entity = entity::prelude::Character::insert(entity::character::ActiveModel {
            name: ActiveValue::Set(params.name),
            rarity: ActiveValue::Set(params.rarity.to_string()),
            image_url: ActiveValue::Set(params.image_url),
            description: ActiveValue::Set(params.description),
        })
        .on_conflict(
            OnConflict::column(entity::character::Column::Name)
                .update_columns([
                    entity::character::Column::Rarity,
                    entity::character::Column::ImageUrl,
                    entity::character::Column::Description,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(CharacterDefinition::from_entity(entity)?)
    }

    /// Deletes a catalog entry by its exact stored name.
    ///
    /// # Arguments
    /// - `name` - Exact stored character name
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the name did not exist)
    /// - `Err(GachaError)` - Database error during delete
    pub async fn delete(&self, name: &str) -> Result<u64, GachaError> {
        let result = entity::prelude::Character::delete_by_id(name.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
