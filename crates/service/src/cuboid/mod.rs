//! Cuboids: three-layer architecture (domain, repository, service).
//!
//! Every write checks that the referenced bag exists before touching storage.
//! DTO/entity translation lives in `mapping`.

pub mod domain;
pub mod mapping;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::CuboidService;
