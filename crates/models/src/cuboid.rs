use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{bag, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cuboid")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub bag_id: i64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Bag }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Bag => Entity::belongs_to(bag::Entity).from(Column::BagId).to(bag::Column::Id).into(),
        }
    }
}

impl Related<bag::Entity> for Entity {
    fn to() -> RelationDef { Relation::Bag.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a cuboid under `bag_id`. The foreign key rejects a bag that no longer exists.
pub async fn create(db: &DatabaseConnection, bag_id: i64, width: f32, height: f32, depth: f32) -> Result<Model, errors::ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        width: Set(width),
        height: Set(height),
        depth: Set(depth),
        bag_id: Set(bag_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
