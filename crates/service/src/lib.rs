//! Service layer for bags and cuboids.
//! - Repository traits describe storage; SeaORM and in-memory implementations live beside them.
//! - Services own the business rules (bag existence checks) and the DTO mapping.
//! - Every operation returns `Result<_, ServiceError>`.

pub mod errors;
pub mod bag;
pub mod cuboid;
#[cfg(test)]
pub mod test_support;

pub use bag::BagService;
pub use cuboid::CuboidService;
