pub use super::character::Entity as Character;
pub use super::ownership::Entity as Ownership;
