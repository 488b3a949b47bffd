//! Field-by-field translation between `CuboidDto` and `Cuboid`.

use super::domain::{Cuboid, CuboidDto};
use crate::bag::domain::Bag;

pub fn to_dto(cuboid: &Cuboid) -> CuboidDto {
    CuboidDto {
        id: cuboid.id,
        width: cuboid.width,
        height: cuboid.height,
        depth: cuboid.depth,
        bag_id: cuboid.bag.id,
    }
}

/// New, not yet persisted entity. Any id on the DTO is ignored.
pub fn to_new_entity(dto: &CuboidDto, bag: Bag) -> Cuboid {
    Cuboid { id: None, width: dto.width, height: dto.height, depth: dto.depth, bag }
}

/// Overwrite dimensions and the bag reference; the id is kept.
pub fn apply_update(target: &mut Cuboid, dto: &CuboidDto, bag: Bag) {
    target.width = dto.width;
    target.height = dto.height;
    target.depth = dto.depth;
    target.bag = bag;
}
