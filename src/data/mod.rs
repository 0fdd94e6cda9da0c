//! Data access layer.
//!
//! Repositories own all query construction against the durable store and
//! convert entity models into domain models at this boundary. Callers above
//! this layer never see sea-orm types.

pub mod character;
pub mod inventory;
