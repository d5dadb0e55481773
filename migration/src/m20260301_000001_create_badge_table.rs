use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Badge::Table)
                    .if_not_exists()
                    .col(string(Badge::User).primary_key())
                    .col(json(Badge::Flags))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Badge::Table).to_owned())
            .await
    }
}

/// Column names keep the casing of the existing document collection.
#[derive(DeriveIden)]

pub enum Badge {
    Table,
    #[sea_orm(iden = "User")]
    User,
    #[sea_orm(iden = "FLAGS")]
    Flags,
}
