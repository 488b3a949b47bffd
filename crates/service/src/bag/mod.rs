//! Bags: the parents cuboids must reference.
//!
//! Same three layers as `cuboid`: domain types, a repository abstraction with
//! SeaORM and in-memory implementations, and a thin service on top.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::BagService;
