use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::{Set, Unchanged}, DatabaseConnection, EntityTrait, QueryOrder};
use tracing::debug;

use models::{bag, cuboid};

use crate::bag::domain::Bag;
use crate::cuboid::domain::Cuboid;
use crate::cuboid::repository::CuboidRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmCuboidRepository {
    pub db: DatabaseConnection,
}

fn from_row(row: cuboid::Model, owner: Option<bag::Model>) -> Result<Cuboid, ServiceError> {
    let bag = owner.ok_or_else(|| ServiceError::Db(format!("cuboid {} references missing bag {}", row.id, row.bag_id)))?;
    Ok(Cuboid { id: Some(row.id), width: row.width, height: row.height, depth: row.depth, bag: Bag::from(bag) })
}

#[async_trait]
impl CuboidRepository for SeaOrmCuboidRepository {
    async fn find_all(&self) -> Result<Vec<Cuboid>, ServiceError> {
        let rows = cuboid::Entity::find()
            .find_also_related(bag::Entity)
            .order_by_asc(cuboid::Column::Id)
            .all(&self.db)
            .await?;
        rows.into_iter().map(|(c, b)| from_row(c, b)).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Cuboid>, ServiceError> {
        let res = cuboid::Entity::find_by_id(id)
            .find_also_related(bag::Entity)
            .one(&self.db)
            .await?;
        res.map(|(c, b)| from_row(c, b)).transpose()
    }

    async fn save(&self, entity: Cuboid) -> Result<Cuboid, ServiceError> {
        let row = match entity.id {
            None => cuboid::create(&self.db, entity.bag.id, entity.width, entity.height, entity.depth).await?,
            Some(id) => {
                let am = cuboid::ActiveModel {
                    id: Unchanged(id),
                    width: Set(entity.width),
                    height: Set(entity.height),
                    depth: Set(entity.depth),
                    bag_id: Set(entity.bag.id),
                    updated_at: Set(Utc::now().into()),
                    ..Default::default()
                };
                am.update(&self.db).await?
            }
        };
        debug!(cuboid_id = row.id, bag_id = row.bag_id, "cuboid row saved");
        Ok(Cuboid { id: Some(row.id), width: row.width, height: row.height, depth: row.depth, bag: entity.bag })
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        cuboid::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
