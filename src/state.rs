//! Application state shared across the embedding process.
//!
//! This module defines the `AppState` struct which holds all shared resources
//! the gacha core needs: the database connection pool, both derived caches,
//! the per-pair lock map, and the draw orchestrator built over them. The
//! state is initialized once during startup and then cloned wherever a
//! command handler needs it.
//!
//! All fields use cheap-to-clone types:
//! - `DatabaseConnection` is a connection pool (clones share the pool)
//! - `CatalogCache`, `InventoryCache`, and `OwnershipLocks` share their
//!   contents through `Arc`
//! - `GachaService` holds clones of the above

use sea_orm::DatabaseConnection;

use crate::cache::catalog::CatalogCache;
use crate::cache::inventory::InventoryCache;
use crate::config::Config;
use crate::service::catalog::CatalogService;
use crate::service::gacha::GachaService;
use crate::service::inventory::InventoryService;
use crate::service::lock::OwnershipLocks;

/// Shared state for the gacha core.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool backing the catalog and ownership stores.
    pub db: DatabaseConnection,

    /// Derived cache over the character catalog.
    pub catalog: CatalogCache,

    /// Derived cache over the ownership ledger.
    pub inventory: InventoryCache,

    /// Per-(user, character) locks shared by the draw and admin paths.
    pub locks: OwnershipLocks,

    /// Draw orchestrator.
    pub gacha: GachaService,
}

impl AppState {
    /// Creates the shared state with empty caches.
    ///
    /// Call `startup::load_all_caches` afterwards to warm them from the
    /// store.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Application configuration
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        let catalog = CatalogCache::new();
        let inventory = InventoryCache::new();
        let locks = OwnershipLocks::new();
        let gacha = GachaService::new(
            db.clone(),
            catalog.clone(),
            inventory.clone(),
            locks.clone(),
            config,
        );

        Self {
            db,
            catalog,
            inventory,
            locks,
            gacha,
        }
    }

    /// Catalog administration service borrowing this state.
    pub fn catalog_service(&self) -> CatalogService<'_> {
        CatalogService::new(&self.db, &self.catalog)
    }

    /// Inventory administration service borrowing this state.
    pub fn inventory_service(&self) -> InventoryService<'_> {
        InventoryService::new(&self.db, &self.inventory, &self.catalog, &self.locks)
    }
}
