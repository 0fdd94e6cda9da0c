use sea_orm::entity::prelude::*;

/// Catalog entry for one collectible character.
///
/// `name` is the natural primary key; casing is preserved as entered by the
/// catalog admin. `rarity` holds the tier label (`Common`, `Rare`, `Epic`,
/// `Legendary`) as text.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub rarity: String,
    pub image_url: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
