use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::bag::domain::Bag;
use crate::bag::repository::BagRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmBagRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl BagRepository for SeaOrmBagRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Bag>, ServiceError> {
        let res = models::bag::Entity::find_by_id(id).one(&self.db).await?;
        Ok(res.map(Bag::from))
    }

    async fn find_all(&self) -> Result<Vec<Bag>, ServiceError> {
        let rows = models::bag::Entity::find()
            .order_by_asc(models::bag::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Bag::from).collect())
    }

    async fn create(&self, title: &str, volume: f32) -> Result<Bag, ServiceError> {
        let created = models::bag::create(&self.db, title, volume).await?;
        Ok(Bag::from(created))
    }
}
