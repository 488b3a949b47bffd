use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{cuboid, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub volume: f32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Cuboid }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Cuboid => Entity::has_many(cuboid::Entity).into() }
    }
}

impl Related<cuboid::Entity> for Entity {
    fn to() -> RelationDef { Relation::Cuboid.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_title(title: &str) -> Result<(), errors::ModelError> {
    let t = title.trim();
    if t.is_empty() { return Err(errors::ModelError::Validation("title required".into())); }
    if t.chars().count() > 128 { return Err(errors::ModelError::Validation("title too long (<=128)".into())); }
    Ok(())
}

pub fn validate_volume(volume: f32) -> Result<(), errors::ModelError> {
    if !volume.is_finite() || volume <= 0.0 {
        return Err(errors::ModelError::Validation("volume must be > 0".into()));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, title: &str, volume: f32) -> Result<Model, errors::ModelError> {
    validate_title(title)?;
    validate_volume(volume)?;
    let am = ActiveModel {
        title: Set(title.trim().to_string()),
        volume: Set(volume),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_must_not_be_blank() {
        assert!(validate_title("   ").is_err());
        assert!(validate_title("groceries").is_ok());
    }

    #[test]
    fn title_length_is_bounded() {
        assert!(validate_title(&"x".repeat(128)).is_ok());
        assert!(validate_title(&"x".repeat(129)).is_err());
    }

    #[test]
    fn volume_must_be_positive_and_finite() {
        assert!(validate_volume(0.0).is_err());
        assert!(validate_volume(-1.5).is_err());
        assert!(validate_volume(f32::NAN).is_err());
        assert!(validate_volume(42.0).is_ok());
    }
}
