//! Character factory for creating test catalog entities.
//!
//! This module provides factory methods for creating catalog character entities
//! with sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable fields.
///
/// Provides a builder pattern for creating catalog entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::character::CharacterFactory;
///
/// let character = CharacterFactory::new(&db)
///     .name("Kae")
///     .rarity("epic")
///     .description("A test character")
///     .build()
///     .await?;
/// ```
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    rarity: String,
    image_url: String,
    description: Option<String>,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Character {id}"` where id is auto-incremented
    /// - rarity: `"common"`
    /// - image_url: `"https://cdn.example.com/character_{id}.png"`
    /// - description: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CharacterFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Character {}", id),
            rarity: "common".to_string(),
            image_url: format!("https://cdn.example.com/character_{}.png", id),
            description: None,
        }
    }

    /// Sets the name for the character.
    ///
    /// # Arguments
    /// - `name` - Display name, unique within the catalog
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the rarity label for the character.
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

    /// Sets the artwork URL for the character.
    ///
    /// # Arguments
    /// - `image_url` - URI of the character's artwork
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Sets the description for the character.
    ///
    /// # Arguments
    /// - `description` - Flavor or lore text
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the character entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::character::Model)` - Created character entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            name: ActiveValue::Set(self.name),
            rarity: ActiveValue::Set(self.rarity),
            image_url: ActiveValue::Set(self.image_url),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
///
/// Shorthand for `CharacterFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::character::Model)` - Created character entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let character = create_character(&db).await?;
/// ```
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}

/// Creates a character with a specific rarity label.
///
/// Shorthand for `CharacterFactory::new(db).rarity(rarity).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `rarity` - Rarity label for the character
///
/// # Returns
/// - `Ok(entity::character::Model)` - Created character entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let epic = create_character_with_rarity(&db, "epic").await?;
/// ```
pub async fn create_character_with_rarity(
    db: &DatabaseConnection,
    rarity: impl Into<String>,
) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).rarity(rarity).build().await
}
