use async_trait::async_trait;

use super::domain::Bag;
use crate::errors::ServiceError;

/// Repository abstraction for bag persistence.
#[async_trait]
pub trait BagRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Bag>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Bag>, ServiceError>;
    async fn create(&self, title: &str, volume: f32) -> Result<Bag, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockBagRepository {
        bags: Mutex<BTreeMap<i64, Bag>>, // key: bag id
        last_id: AtomicI64,
    }

    impl MockBagRepository {
        /// Insert a bag synchronously and return it; ids start at 1.
        pub fn seed(&self, title: &str, volume: f32) -> Bag {
            let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
            let bag = Bag { id, title: title.to_string(), volume };
            self.bags.lock().unwrap().insert(id, bag.clone());
            bag
        }

        pub fn remove(&self, id: i64) -> Option<Bag> {
            self.bags.lock().unwrap().remove(&id)
        }
    }

    #[async_trait]
    impl BagRepository for MockBagRepository {
        async fn find_by_id(&self, id: i64) -> Result<Option<Bag>, ServiceError> {
            Ok(self.bags.lock().unwrap().get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Bag>, ServiceError> {
            Ok(self.bags.lock().unwrap().values().cloned().collect())
        }

        async fn create(&self, title: &str, volume: f32) -> Result<Bag, ServiceError> {
            models::bag::validate_title(title)?;
            models::bag::validate_volume(volume)?;
            Ok(self.seed(title.trim(), volume))
        }
    }
}
