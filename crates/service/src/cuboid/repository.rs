use async_trait::async_trait;

use super::domain::Cuboid;
use crate::errors::ServiceError;

/// Repository abstraction for cuboid persistence.
#[async_trait]
pub trait CuboidRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Cuboid>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Cuboid>, ServiceError>;
    /// Insert when `cuboid.id` is `None`, otherwise update the existing row.
    async fn save(&self, cuboid: Cuboid) -> Result<Cuboid, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockCuboidRepository {
        rows: Mutex<BTreeMap<i64, Cuboid>>, // key: cuboid id
        last_id: AtomicI64,
    }

    impl MockCuboidRepository {
        pub fn len(&self) -> usize { self.rows.lock().unwrap().len() }

        pub fn is_empty(&self) -> bool { self.len() == 0 }
    }

    #[async_trait]
    impl CuboidRepository for MockCuboidRepository {
        async fn find_all(&self) -> Result<Vec<Cuboid>, ServiceError> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Cuboid>, ServiceError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn save(&self, mut cuboid: Cuboid) -> Result<Cuboid, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let id = match cuboid.id {
                Some(id) if rows.contains_key(&id) => id,
                Some(id) => return Err(ServiceError::Db(format!("cuboid {id} not updated"))),
                None => self.last_id.fetch_add(1, Ordering::SeqCst) + 1,
            };
            cuboid.id = Some(id);
            rows.insert(id, cuboid.clone());
            Ok(cuboid)
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
            self.rows.lock().unwrap().remove(&id);
            Ok(())
        }
    }
}
