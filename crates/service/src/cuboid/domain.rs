use serde::{Deserialize, Serialize};

use crate::bag::domain::Bag;

/// Cuboid entity with its resolved owning bag. `id` is `None` until persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid {
    pub id: Option<i64>,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub bag: Bag,
}

/// External representation of a cuboid; carries the bag id rather than the bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuboidDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub bag_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_uses_camel_case_bag_id() {
        let dto: CuboidDto = serde_json::from_value(serde_json::json!({
            "width": 2.0, "height": 3.0, "depth": 4.0, "bagId": 1
        }))
        .unwrap();
        assert_eq!(dto.id, None);
        assert_eq!(dto.bag_id, 1);

        let out = serde_json::to_value(CuboidDto { id: Some(5), ..dto }).unwrap();
        assert_eq!(out["bagId"], 1);
        assert_eq!(out["id"], 5);
    }
}
