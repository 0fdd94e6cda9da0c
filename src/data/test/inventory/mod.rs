use crate::data::inventory::InventoryRepository;
use crate::error::GachaError;
use crate::model::inventory::UpsertOwnershipParam;
use crate::model::rarity::Rarity;
use test_utils::builder::TestBuilder;
use test_utils::factory::ownership::{
    create_ownership, create_ownership_with_owned, OwnershipFactory,
};

mod fetch_all;
