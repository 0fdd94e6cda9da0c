//! Ownership factory for creating test ledger entities.
//!
//! This module provides factory methods for creating ownership ledger entities
//! with sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test ownership rows with customizable fields.
///
/// Provides a builder pattern for creating ledger entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::ownership::OwnershipFactory;
///
/// let ownership = OwnershipFactory::new(&db)
///     .user_id("123456789")
///     .character_name("Kae")
///     .owned(3)
///     .build()
///     .await?;
/// ```
pub struct OwnershipFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    user_name: String,
    character_name: String,
    rarity: String,
    owned: i32,
}

impl<'a> OwnershipFactory<'a> {
    /// Creates a new OwnershipFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented numeric string
    /// - user_name: `"User {id}"`
    /// - character_name: `"Character {id}"`
    /// - rarity: `"common"`
    /// - owned: `1`
    ///
    /// The acquisition timestamp is always the insert time.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `OwnershipFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id.to_string(),
            user_name: format!("User {}", id),
            character_name: format!("Character {}", id),
            rarity: "common".to_string(),
            owned: 1,
        }
    }

    /// Sets the owning user's Discord ID.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the owning user's display name.
    ///
    /// # Arguments
    /// - `user_name` - Display name recorded on the row
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    /// Sets the owned character's name.
    ///
    /// # Arguments
    /// - `character_name` - Catalog name of the owned character
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn character_name(mut self, character_name: impl Into<String>) -> Self {
        self.character_name = character_name.into();
        self
    }

    /// Sets the rarity label recorded on the row.
    ///
    /// # Arguments
    /// - `rarity` - One of `"common"`, `"rare"`, `"epic"`, `"legendary"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = rarity.into();
        self
    }

    /// Sets the owned count.
    ///
    /// # Arguments
    /// - `owned` - Number of copies owned
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn owned(mut self, owned: i32) -> Self {
        self.owned = owned;
        self
    }

    /// Builds and inserts the ownership entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::ownership::Model)` - Created ownership entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::ownership::Model, DbErr> {
        entity::ownership::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            user_name: ActiveValue::Set(self.user_name),
            character_name: ActiveValue::Set(self.character_name),
            rarity: ActiveValue::Set(self.rarity),
            owned: ActiveValue::Set(self.owned),
            acquired_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an ownership row for a user and character with default values.
///
/// Shorthand for
/// `OwnershipFactory::new(db).user_id(user_id).character_name(character_name).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord ID of the owning user, as stored in the ledger
/// - `character_name` - Catalog name of the owned character
///
/// # Returns
/// - `Ok(entity::ownership::Model)` - Created ownership entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let ownership = create_ownership(&db, "123", "Kae").await?;
/// ```
pub async fn create_ownership(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    character_name: impl Into<String>,
) -> Result<entity::ownership::Model, DbErr> {
    OwnershipFactory::new(db)
        .user_id(user_id)
        .character_name(character_name)
        .build()
        .await
}

/// Creates an ownership row with a specific owned count.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord ID of the owning user, as stored in the ledger
/// - `character_name` - Catalog name of the owned character
/// - `owned` - Number of copies owned
///
/// # Returns
/// - `Ok(entity::ownership::Model)` - Created ownership entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let ownership = create_ownership_with_owned(&db, "123", "Kae", 5).await?;
/// ```
pub async fn create_ownership_with_owned(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    character_name: impl Into<String>,
    owned: i32,
) -> Result<entity::ownership::Model, DbErr> {
    OwnershipFactory::new(db)
        .user_id(user_id)
        .character_name(character_name)
        .owned(owned)
        .build()
        .await
}
