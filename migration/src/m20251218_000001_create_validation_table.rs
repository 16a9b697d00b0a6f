use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Validation::Table)
                    .if_not_exists()
                    .col(pk_auto(Validation::Id))
                    .col(string(Validation::WynnGuildName))
                    .col(string_uniq(Validation::WynnGuildId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Validation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Validation {
    Table,
    Id,
    WynnGuildName,
    WynnGuildId,
}
