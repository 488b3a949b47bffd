use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cuboid::Table)
                    .if_not_exists()
                    .col(big_integer(Cuboid::Id).auto_increment().primary_key())
                    .col(float(Cuboid::Width).not_null())
                    .col(float(Cuboid::Height).not_null())
                    .col(float(Cuboid::Depth).not_null())
                    .col(big_integer(Cuboid::BagId).not_null())
                    .col(timestamp_with_time_zone(Cuboid::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Cuboid::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cuboid_bag")
                            .from(Cuboid::Table, Cuboid::BagId)
                            .to(Bag::Table, Bag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cuboid::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Cuboid {
    Table,
    Id,
    Width,
    Height,
    Depth,
    BagId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Bag { Table, Id }
