use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::bag::repo::seaorm::SeaOrmBagRepository;
use service::bag::repository::BagRepository;
use service::cuboid::repo::seaorm::SeaOrmCuboidRepository;
use service::cuboid::repository::CuboidRepository;
use service::{BagService, CuboidService};

/// Shared handler state: services wired once at startup.
#[derive(Clone)]
pub struct ServerState {
    pub cuboids: Arc<CuboidService>,
    pub bags: Arc<BagService>,
}

impl ServerState {
    pub fn new(cuboid_repo: Arc<dyn CuboidRepository>, bag_repo: Arc<dyn BagRepository>) -> Self {
        Self {
            cuboids: Arc::new(CuboidService::new(cuboid_repo, Arc::clone(&bag_repo))),
            bags: Arc::new(BagService::new(bag_repo)),
        }
    }

    /// SeaORM repositories sharing one connection pool.
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmCuboidRepository { db: db.clone() }),
            Arc::new(SeaOrmBagRepository { db }),
        )
    }
}
