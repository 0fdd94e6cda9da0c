//! Service layer orchestrating draws, catalog administration, and inventory
//! administration over the repositories and caches.

pub mod catalog;
pub mod gacha;
pub mod inventory;
pub mod lock;
