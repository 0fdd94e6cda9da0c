//! Ownership ledger repository for database operations.

use chrono::Utc;
use sea_orm::sea_query::ExprTrait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::error::GachaError;
use crate::model::inventory::{OwnershipRecord, UpsertOwnershipParam};

pub struct InventoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches every ownership row, in acquisition order per user
    pub async fn fetch_all(&self) -> Result<Vec<OwnershipRecord>, GachaError> {
        let entities = entity::prelude::Ownership::find()
            .order_by_asc(entity::ownership::Column::AcquiredAt)
            .order_by_asc(entity::ownership::Column::Id)
            .all(self.db)
            .await?;

        let records = entities
            .into_iter()
            .map(OwnershipRecord::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Fetches one user's ownership rows in acquisition order
    pub async fn fetch_for_user(&self, user_id: u64) -> Result<Vec<OwnershipRecord>, GachaError> {
        let entities = entity::prelude::Ownership::find()
            .filter(entity::ownership::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(entity::ownership::Column::AcquiredAt)
            .order_by_asc(entity::ownership::Column::Id)
            .all(self.db)
            .await?;

        let records = entities
            .into_iter()
            .map(OwnershipRecord::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Point lookup on the (user, character) pair
    pub async fn find(
        &self,
        user_id: u64,
        character_name: &str,
    ) -> Result<Option<OwnershipRecord>, GachaError> {
        let entity = entity::prelude::Ownership::find()
            .filter(entity::ownership::Column::UserId.eq(user_id.to_string()))
            .filter(entity::ownership::Column::CharacterName.eq(character_name))
            .one(self.db)
            .await?;

        Ok(entity.map(OwnershipRecord::from_entity).transpose()?)
    }

    /// Inserts a brand-new ownership row with the current time as its
    /// acquisition timestamp. Fails if the pair already exists, so a stale
    /// cache can never silently reset a stored count.
    pub async fn insert(&self, param: UpsertOwnershipParam) -> Result<OwnershipRecord, GachaError> {
        let entity = entity::ownership::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(param.user_id.to_string()),
            user_name: ActiveValue::Set(param.user_name),
            character_name: ActiveValue::Set(param.character_name),
            rarity: ActiveValue::Set(param.rarity.to_string()),
            owned: ActiveValue::Set(param.owned as i32),
            acquired_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(OwnershipRecord::from_entity(entity)?)
    }

    /// Creates or updates the ownership row for a (user, character) pair.
    ///
    /// The acquisition timestamp is set on create and preserved on update so
    /// the user's acquisition order survives edits.
    pub async fn upsert(&self, param: UpsertOwnershipParam) -> Result<OwnershipRecord, GachaError> {
        // Check if a row exists for the pair
        let existing = entity::prelude::Ownership::find()
            .filter(entity::ownership::Column::UserId.eq(param.user_id.to_string()))
            .filter(entity::ownership::Column::CharacterName.eq(param.character_name.as_str()))
            .one(self.db)
            .await?;

        let entity = if let Some(existing) = existing {
            // Update existing row, keeping its acquisition timestamp
            let active = entity::ownership::ActiveModel {
                id: ActiveValue::Set(existing.id),
                user_id: ActiveValue::Set(param.user_id.to_string()),
                user_name: ActiveValue::Set(param.user_name),
                character_name: ActiveValue::Set(param.character_name),
                rarity: ActiveValue::Set(param.rarity.to_string()),
                owned: ActiveValue::Set(param.owned as i32),
                acquired_at: ActiveValue::Set(existing.acquired_at),
            };
            active.update(self.db).await?
        } else {
            // Create new row
            let new_record = entity::ownership::ActiveModel {
                id: ActiveValue::NotSet,
                user_id: ActiveValue::Set(param.user_id.to_string()),
                user_name: ActiveValue::Set(param.user_name),
                character_name: ActiveValue::Set(param.character_name),
                rarity: ActiveValue::Set(param.rarity.to_string()),
                owned: ActiveValue::Set(param.owned as i32),
                acquired_at: ActiveValue::Set(Utc::now()),
            };
            new_record.insert(self.db).await?
        };

        Ok(OwnershipRecord::from_entity(entity)?)
    }

    /// Adds one to the stored owned count for a pair.
    ///
    /// Returns the number of rows touched; 0 means the pair has no row and
    /// nothing changed.
    pub async fn increment(&self, user_id: u64, character_name: &str) -> Result<u64, GachaError> {
        let result = entity::prelude::Ownership::update_many()
            .filter(entity::ownership::Column::UserId.eq(user_id.to_string()))
            .filter(entity::ownership::Column::CharacterName.eq(character_name))
            .col_expr(
                entity::ownership::Column::Owned,
                sea_orm::sea_query::Expr::col(entity::ownership::Column::Owned).add(1),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Subtracts one from the stored owned count for a pair, flooring at
    /// zero. The floor lives in the filter, so a count of zero is simply not
    /// matched rather than driven negative.
    pub async fn decrement(&self, user_id: u64, character_name: &str) -> Result<u64, GachaError> {
        let result = entity::prelude::Ownership::update_many()
            .filter(entity::ownership::Column::UserId.eq(user_id.to_string()))
            .filter(entity::ownership::Column::CharacterName.eq(character_name))
            .filter(entity::ownership::Column::Owned.gt(0))
            .col_expr(
                entity::ownership::Column::Owned,
                sea_orm::sea_query::Expr::col(entity::ownership::Column::Owned).sub(1),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every ownership row for a user
    pub async fn delete_user(&self, user_id: u64) -> Result<u64, GachaError> {
        let result = entity::prelude::Ownership::delete_many()
            .filter(entity::ownership::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
