//! Create `bag` table.
//!
//! Parent of `cuboid`; a bag groups cuboids under a title and a nominal volume.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bag::Table)
                    .if_not_exists()
                    .col(big_integer(Bag::Id).auto_increment().primary_key())
                    .col(string_len(Bag::Title, 128).not_null())
                    .col(float(Bag::Volume).not_null())
                    .col(timestamp_with_time_zone(Bag::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Bag::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Bag { Table, Id, Title, Volume, CreatedAt }
