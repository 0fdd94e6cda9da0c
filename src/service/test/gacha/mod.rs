use sea_orm::DatabaseConnection;

use crate::cache::catalog::CatalogCache;
use crate::cache::inventory::InventoryCache;
use crate::config::Config;
use crate::data::character::CharacterRepository;
use crate::data::inventory::InventoryRepository;
use crate::error::GachaError;
use crate::model::pull::{AbortedReason, PullOutcome};
use crate::model::rarity::{Rarity, WeightTable};
use crate::service::gacha::GachaService;
use crate::service::lock::OwnershipLocks;
use test_utils::builder::TestBuilder;
use test_utils::factory::character::CharacterFactory;


/// Config whose weight table holds one tier, so every sample resolves to it
/// and the draw under test is deterministic.
fn single_tier_config(rarity: Rarity) -> Config {
    let mut weights = WeightTable::empty();
    weights.set(rarity, 1.0);

    Config {
        database_url: "sqlite::memory:".to_string(),
        weights,
        base_names: vec!["Kae".to_string()],
    }
}

/// Builds a gacha service over fresh caches sharing the given connection.
fn build_service(
    db: &DatabaseConnection,
    config: &Config,
) -> (GachaService, CatalogCache, InventoryCache) {
    let catalog = CatalogCache::new();
    let inventory = InventoryCache::new();
    let locks = OwnershipLocks::new();
    let service = GachaService::new(
        db.clone(),
        catalog.clone(),
        inventory.clone(),
        locks,
        config,
    );

    (service, catalog, inventory)
}
