//! Domain models shared across the library.

pub mod character;
pub mod inventory;
pub mod pull;
pub mod rarity;
