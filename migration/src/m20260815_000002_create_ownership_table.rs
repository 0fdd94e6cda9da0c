use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ownership::Table)
                    .if_not_exists()
                    .col(pk_auto(Ownership::Id))
                    .col(string(Ownership::UserId))
                    .col(string(Ownership::UserName))
                    .col(string(Ownership::CharacterName))
                    .col(string(Ownership::Rarity))
                    .col(integer(Ownership::Owned))
                    .col(timestamp(Ownership::AcquiredAt))
                    .to_owned(),
            )
            .await?;

        // One ledger row per (user, character) pair
        manager
            .create_index(
                Index::create()
                    .name("idx_ownership_user_id_character_name")
                    .table(Ownership::Table)
                    .col(Ownership::UserId)
                    .col(Ownership::CharacterName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_ownership_user_id_character_name")
                    .table(Ownership::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ownership::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Ownership {
    Table,
    Id,
    UserId,
    UserName,
    CharacterName,
    Rarity,
    Owned,
    AcquiredAt,
}
