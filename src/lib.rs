//! Weighted-rarity gacha draw and inventory accounting core.
//!
//! This crate implements the draw and bookkeeping subsystem behind a
//! collectible-character bot: a probability-weighted rarity sampler, a
//! character catalog with a rarity-partitioned cache, a per-user ownership
//! ledger with first-versus-repeat pull accounting, and the orchestrator that
//! runs one pull end to end. Persistence uses SeaORM over SQLite; the
//! presentation surface (commands, embeds, pagination) lives in the embedding
//! binary and only calls into this crate.
//!
//! # Architecture
//!
//! The crate follows a layered architecture with clear separation of concerns:
//!
//! - **Service Layer** (`service/`) - Draw orchestration and administrative
//!   operations over catalog and inventories
//! - **Cache Layer** (`cache/`) - In-memory derived views of the catalog and
//!   ownership ledger, refreshed from and mirrored against the store
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain
//!   model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific
//!   parameter types
//! - **Sampler** (`sampler`) - Weighted random rarity selection
//! - **Error Layer** (`error/`) - Library error types
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based configuration with
//!   weight-table validation
//! - **State** (`state`) - Shared state (DB pool, caches, locks, services)
//! - **Startup** (`startup`) - Database connection, migrations, cache warmup
//!
//! # Pull Flow
//!
//! One pull flows through these layers:
//!
//! 1. **Sampler** draws a rarity tier from the configured weight table
//! 2. **Catalog cache** picks a uniform-random character from that tier's
//!    partition, refreshing from the store once if the tier looks empty
//! 3. **Inventory cache** answers whether the user already owns the pick
//! 4. **Data layer** writes the ownership row (insert on first acquisition,
//!    increment on a repeat), serialized per (user, character) pair
//! 5. **Inventory cache** mirrors the successful write
//! 6. **Service** returns the award with its first-acquisition and skin flags

pub mod cache;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod sampler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
