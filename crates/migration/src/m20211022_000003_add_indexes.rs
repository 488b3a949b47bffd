use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Cuboid: lookups by owning bag
        manager
            .create_index(
                Index::create()
                    .name("idx_cuboid_bag")
                    .table(Cuboid::Table)
                    .col(Cuboid::BagId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_cuboid_bag").table(Cuboid::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Cuboid { Table, BagId }
