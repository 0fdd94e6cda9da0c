//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a character together with one ownership row for it.
///
/// This is a convenience method that creates:
/// 1. A catalog character with default values
/// 2. An ownership row for the given user with `owned = 1`
///
/// Use the individual factories if you need to customize either entity.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord ID of the owning user, as stored in the ledger
///
/// # Returns
/// - `Ok((character, ownership))` - Tuple of both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_owned_character(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<(entity::character::Model, entity::ownership::Model), DbErr> {
    let character = crate::factory::character::create_character(db).await?;
    let ownership =
        crate::factory::ownership::create_ownership(db, user_id, &character.name).await?;

    Ok((character, ownership))
}
