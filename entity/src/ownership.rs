use sea_orm::entity::prelude::*;

/// One row per (user, character) pair in the ownership ledger.
///
/// `user_id` is a Discord snowflake stored as text. `rarity` and `user_name`
/// are denormalized from the catalog and the pulling user at acquisition
/// time. `acquired_at` fixes the per-user display order across cache
/// rebuilds. The pair (user_id, character_name) is unique (enforced by
/// migration).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ownership")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: String,
    pub user_name: String,
    pub character_name: String,
    pub rarity: String,
    pub owned: i32,
    pub acquired_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
