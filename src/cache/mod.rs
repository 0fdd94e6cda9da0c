//! Derived in-memory caches over the durable store.
//!
//! Both caches are rebuildable projections: a refresh is a pure load from
//! the store, never a merge with current cache state. Any suspected
//! divergence is resolved by refreshing, not by patching individual entries.

pub mod catalog;
pub mod inventory;
