use chrono::Utc;

use crate::cache::inventory::InventoryCache;
use crate::data::inventory::InventoryRepository;
use crate::error::GachaError;
use crate::model::inventory::OwnershipRecord;
use crate::model::rarity::Rarity;
use test_utils::builder::TestBuilder;
use test_utils::factory::ownership::create_ownership;

mod aggregates;
mod increment_decrement;
mod refresh;

/// Builds a record without touching a store; cache-only tests use this to
/// exercise the in-memory view directly.
fn record(user_id: u64, character_name: &str, rarity: Rarity, owned: u32) -> OwnershipRecord {
    OwnershipRecord {
        user_id,
        user_name: format!("User {}", user_id),
        character_name: character_name.to_string(),
        rarity,
        owned,
        acquired_at: Utc::now(),
    }
}
