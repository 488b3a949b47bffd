use serde::{Deserialize, Serialize};

/// Persisted bag (business view)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bag {
    pub id: i64,
    pub title: String,
    pub volume: f32,
}

/// External representation of a bag. `id` is ignored on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BagDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub volume: f32,
}

impl From<&Bag> for BagDto {
    fn from(bag: &Bag) -> Self {
        BagDto { id: Some(bag.id), title: bag.title.clone(), volume: bag.volume }
    }
}

impl From<models::bag::Model> for Bag {
    fn from(m: models::bag::Model) -> Self {
        Bag { id: m.id, title: m.title, volume: m.volume }
    }
}
