//! Ownership ledger domain models and parameters.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::internal::InternalError;
use crate::model::rarity::Rarity;
use crate::util::parse::parse_u64_from_string;

/// One user's ownership of one character.
///
/// `rarity` and `user_name` are denormalized at acquisition time; a later
/// catalog edit does not rewrite them. `acquired_at` fixes the position of
/// this record in the user's acquisition order across cache rebuilds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnershipRecord {
    /// Discord ID of the owning user.
    pub user_id: u64,
    /// Display name of the owner at acquisition time.
    pub user_name: String,
    /// Name of the owned character, catalog casing preserved.
    pub character_name: String,
    /// Rarity tier the character had when first acquired.
    pub rarity: Rarity,
    /// How many copies the user owns. Never negative.
    pub owned: u32,
    /// When the first copy was acquired.
    pub acquired_at: DateTime<Utc>,
}

impl OwnershipRecord {
    /// Converts an entity model to an ownership domain model at the
    /// repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(OwnershipRecord)` - The converted domain model
    /// - `Err(InternalError::ParseStringId)` - Stored user id does not parse
    ///   back to u64
    /// - `Err(InternalError::UnknownRarity)` - Stored rarity label matches
    ///   no tier
    /// - `Err(InternalError::NegativeOwnedCount)` - Stored owned count is
    ///   below zero
    pub fn from_entity(entity: entity::ownership::Model) -> Result<Self, InternalError> {
        let user_id = parse_u64_from_string(entity.user_id)?;
        let rarity = Rarity::from_str(&entity.rarity)?;
        let owned = u32::try_from(entity.owned)
            .map_err(|_| InternalError::NegativeOwnedCount {
                value: entity.owned,
            })?;

        Ok(Self {
            user_id,
            user_name: entity.user_name,
            character_name: entity.character_name,
            rarity,
            owned,
            acquired_at: entity.acquired_at,
        })
    }
}

/// Parameters for upserting an ownership record.
///
/// The repository assigns `acquired_at` when the pair does not exist yet and
/// preserves the stored timestamp when it does.
#[derive(Debug, Clone)]
pub struct UpsertOwnershipParam {
    /// Discord ID of the owning user.
    pub user_id: u64,
    /// Display name of the owner.
    pub user_name: String,
    /// Name of the owned character.
    pub character_name: String,
    /// Rarity tier to record for the pair.
    pub rarity: Rarity,
    /// Owned count to store.
    pub owned: u32,
}
