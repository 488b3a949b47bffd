use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::BagDto;
use super::repository::BagRepository;
use crate::errors::ServiceError;

/// Bag business service independent of web framework
pub struct BagService {
    repo: Arc<dyn BagRepository>,
}

impl BagService {
    pub fn new(repo: Arc<dyn BagRepository>) -> Self { Self { repo } }

    /// Create a bag; the title is trimmed and must be non-blank, the volume positive.
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, input: BagDto) -> Result<BagDto, ServiceError> {
        let bag = self.repo.create(&input.title, input.volume).await?;
        info!(bag_id = bag.id, volume = bag.volume, "bag_created");
        Ok(BagDto::from(&bag))
    }

    pub async fn get_all(&self) -> Result<Vec<BagDto>, ServiceError> {
        let bags = self.repo.find_all().await?;
        Ok(bags.iter().map(BagDto::from).collect())
    }

    pub async fn get(&self, id: i64) -> Result<BagDto, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .map(|b| BagDto::from(&b))
            .ok_or(ServiceError::BagNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bag::repository::mock::MockBagRepository;

    fn svc() -> BagService { BagService::new(Arc::new(MockBagRepository::default())) }

    #[tokio::test]
    async fn create_then_list_and_get() {
        let svc = svc();
        let created = svc.create(BagDto { id: None, title: "  tools ".into(), volume: 30.0 }).await.unwrap();
        assert_eq!(created.id, Some(1));
        assert_eq!(created.title, "tools");

        let all = svc.get_all().await.unwrap();
        assert_eq!(all, vec![created.clone()]);
        assert_eq!(svc.get(1).await.unwrap(), created);
    }

    #[tokio::test]
    async fn create_rejects_invalid_bags() {
        let svc = svc();
        let blank = svc.create(BagDto { id: None, title: " ".into(), volume: 1.0 }).await;
        assert!(matches!(blank, Err(ServiceError::Model(_))));
        let empty = svc.create(BagDto { id: None, title: "x".into(), volume: 0.0 }).await;
        assert!(matches!(empty, Err(ServiceError::Model(_))));
        assert!(svc.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_missing_bag_is_not_found() {
        let err = svc().get(9).await.unwrap_err();
        assert!(matches!(err, ServiceError::BagNotFound(9)));
    }
}
