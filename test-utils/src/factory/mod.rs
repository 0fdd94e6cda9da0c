//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically generate unique names and IDs,
//! making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let character = factory::character::create_character(&db).await?;
//!     let ownership = factory::ownership::create_ownership(&db, "1", &character.name).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Using builder pattern for customization
//! let character = factory::character::CharacterFactory::new(&db)
//!     .name("Kae")
//!     .rarity("common")
//!     .description("A test character")
//!     .build()
//!     .await?;
//!
//! // Using convenience functions with custom values
//! let epic = factory::character::create_character_with_rarity(&db, "epic").await?;
//! ```
//!
//! # Available Factories
//!
//! - `character` - Create catalog character entities
//! - `ownership` - Create ownership ledger entities
//! - `helpers` - Unique ID generation and multi-entity conveniences

pub mod character;
pub mod helpers;
pub mod ownership;

// Re-export commonly used factory functions for concise usage
pub use character::{create_character, create_character_with_rarity};
pub use ownership::{create_ownership, create_ownership_with_owned};
