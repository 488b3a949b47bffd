//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20211022_000001_create_bag;
mod m20211022_000002_create_cuboid;
mod m20211022_000003_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20211022_000001_create_bag::Migration),
            Box::new(m20211022_000002_create_cuboid::Migration),
            // Indexes should always be applied last
            Box::new(m20211022_000003_add_indexes::Migration),
        ]
    }
}
