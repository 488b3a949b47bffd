use std::sync::Arc;

use tracing::{info, warn, instrument};

use super::domain::CuboidDto;
use super::mapping;
use super::repository::CuboidRepository;
use crate::bag::domain::Bag;
use crate::bag::repository::BagRepository;
use crate::errors::ServiceError;

/// Prefix of the confirmation returned by [`CuboidService::delete`].
pub const DELETED_PREFIX: &str = "Deleted:";

/// Cuboid business service independent of web framework.
/// Storage comes in through the constructor; nothing is looked up globally.
pub struct CuboidService {
    cuboids: Arc<dyn CuboidRepository>,
    bags: Arc<dyn BagRepository>,
}

impl CuboidService {
    pub fn new(cuboids: Arc<dyn CuboidRepository>, bags: Arc<dyn BagRepository>) -> Self {
        Self { cuboids, bags }
    }

    async fn get_bag_by_id(&self, bag_id: i64) -> Result<Bag, ServiceError> {
        self.bags.find_by_id(bag_id).await?.ok_or(ServiceError::BagNotFound(bag_id))
    }

    /// Create a cuboid inside an existing bag.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::cuboid::{CuboidService, domain::CuboidDto, repository::mock::MockCuboidRepository};
    /// use service::bag::repository::mock::MockBagRepository;
    /// let bags = Arc::new(MockBagRepository::default());
    /// let bag = bags.seed("box", 100.0);
    /// let svc = CuboidService::new(Arc::new(MockCuboidRepository::default()), bags);
    /// let dto = CuboidDto { id: None, width: 2.0, height: 3.0, depth: 4.0, bag_id: bag.id };
    /// let created = tokio_test::block_on(svc.create(dto)).unwrap();
    /// assert_eq!(created.bag_id, bag.id);
    /// assert!(created.id.is_some());
    /// ```
    #[instrument(skip(self, dto), fields(bag_id = dto.bag_id))]
    pub async fn create(&self, dto: CuboidDto) -> Result<CuboidDto, ServiceError> {
        let bag = match self.get_bag_by_id(dto.bag_id).await {
            Ok(bag) => bag,
            Err(e) => {
                warn!(error = %e, "cuboid_create_rejected");
                return Err(e);
            }
        };
        let saved = self.cuboids.save(mapping::to_new_entity(&dto, bag)).await?;
        info!(cuboid_id = ?saved.id, "cuboid_created");
        Ok(mapping::to_dto(&saved))
    }

    /// All cuboids in repository order.
    pub async fn get_all(&self) -> Result<Vec<CuboidDto>, ServiceError> {
        let cuboids = self.cuboids.find_all().await?;
        Ok(cuboids.iter().map(mapping::to_dto).collect())
    }

    pub async fn get(&self, id: i64) -> Result<CuboidDto, ServiceError> {
        self.cuboids
            .find_by_id(id)
            .await?
            .map(|c| mapping::to_dto(&c))
            .ok_or(ServiceError::CuboidNotFound(id))
    }

    /// Overwrite dimensions and bag of an existing cuboid.
    ///
    /// Both the cuboid and the target bag are looked up before anything is written;
    /// the previous bag is not consulted.
    #[instrument(skip(self, dto), fields(cuboid_id = ?dto.id, bag_id = dto.bag_id))]
    pub async fn update(&self, dto: CuboidDto) -> Result<CuboidDto, ServiceError> {
        let id = dto.id.ok_or_else(|| ServiceError::Validation("cuboid id required".into()))?;
        let existing = self.cuboids.find_by_id(id).await?;
        let bag = self.bags.find_by_id(dto.bag_id).await?;

        let (mut cuboid, bag) = match (existing, bag) {
            (Some(c), Some(b)) => (c, b),
            (None, _) => return Err(ServiceError::CuboidNotFound(id)),
            (_, None) => return Err(ServiceError::BagNotFound(dto.bag_id)),
        };

        mapping::apply_update(&mut cuboid, &dto, bag);
        let saved = self.cuboids.save(cuboid).await?;
        info!("cuboid_updated");
        Ok(mapping::to_dto(&saved))
    }

    /// Delete by id and return `Deleted:<id>`; a missing id yields `CuboidNotFound`.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<String, ServiceError> {
        if self.cuboids.find_by_id(id).await?.is_none() {
            return Err(ServiceError::CuboidNotFound(id));
        }
        self.cuboids.delete_by_id(id).await?;
        info!("cuboid_deleted");
        Ok(format!("{DELETED_PREFIX}{id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bag::repository::mock::MockBagRepository;
    use crate::cuboid::repository::mock::MockCuboidRepository;

    struct Fixture {
        svc: CuboidService,
        cuboids: Arc<MockCuboidRepository>,
        bags: Arc<MockBagRepository>,
    }

    fn fixture() -> Fixture {
        let cuboids = Arc::new(MockCuboidRepository::default());
        let bags = Arc::new(MockBagRepository::default());
        let svc = CuboidService::new(cuboids.clone(), bags.clone());
        Fixture { svc, cuboids, bags }
    }

    fn dto(width: f32, height: f32, depth: f32, bag_id: i64) -> CuboidDto {
        CuboidDto { id: None, width, height, depth, bag_id }
    }

    #[tokio::test]
    async fn create_echoes_input_and_is_listed() {
        let f = fixture();
        let bag = f.bags.seed("b", 100.0);

        let created = f.svc.create(dto(2.0, 3.0, 4.0, bag.id)).await.unwrap();
        assert!(created.id.is_some());
        assert_eq!((created.width, created.height, created.depth, created.bag_id), (2.0, 3.0, 4.0, bag.id));

        let all = f.svc.get_all().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn create_with_unknown_bag_writes_nothing() {
        let f = fixture();
        f.bags.seed("b", 100.0);
        let before = f.svc.get_all().await.unwrap().len();

        let err = f.svc.create(dto(1.0, 1.0, 1.0, 42)).await.unwrap_err();
        assert!(matches!(err, ServiceError::BagNotFound(42)));
        assert_eq!(f.svc.get_all().await.unwrap().len(), before);
        assert!(f.cuboids.is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_bag_only_for_target() {
        let f = fixture();
        let a = f.bags.seed("a", 100.0);
        let b = f.bags.seed("b", 100.0);
        let target = f.svc.create(dto(1.0, 1.0, 1.0, a.id)).await.unwrap();
        let other = f.svc.create(dto(9.0, 9.0, 9.0, a.id)).await.unwrap();

        let change = CuboidDto { id: target.id, width: 4.0, height: 5.0, depth: 6.0, bag_id: b.id };
        let updated = f.svc.update(change.clone()).await.unwrap();
        assert_eq!(updated, change);

        assert_eq!(f.svc.get(target.id.unwrap()).await.unwrap(), change);
        assert_eq!(f.svc.get(other.id.unwrap()).await.unwrap(), other);
    }

    #[tokio::test]
    async fn update_with_unknown_cuboid_is_not_found() {
        let f = fixture();
        let a = f.bags.seed("a", 100.0);
        let err = f.svc.update(CuboidDto { id: Some(77), width: 1.0, height: 1.0, depth: 1.0, bag_id: a.id }).await.unwrap_err();
        assert!(matches!(err, ServiceError::CuboidNotFound(77)));
        assert!(f.cuboids.is_empty());
    }

    #[tokio::test]
    async fn update_with_unknown_bag_leaves_cuboid_unchanged() {
        let f = fixture();
        let a = f.bags.seed("a", 100.0);
        let original = f.svc.create(dto(1.0, 2.0, 3.0, a.id)).await.unwrap();

        let err = f
            .svc
            .update(CuboidDto { id: original.id, width: 8.0, height: 8.0, depth: 8.0, bag_id: 404 })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(f.svc.get(original.id.unwrap()).await.unwrap(), original);
    }

    #[tokio::test]
    async fn create_into_removed_bag_is_rejected() {
        let f = fixture();
        let bag = f.bags.seed("gone", 1.0);
        f.bags.remove(bag.id);
        let err = f.svc.create(dto(1.0, 1.0, 1.0, bag.id)).await.unwrap_err();
        assert!(matches!(err, ServiceError::BagNotFound(id) if id == bag.id));
        assert!(f.cuboids.is_empty());
    }

    #[tokio::test]
    async fn update_without_id_is_a_validation_error() {
        let f = fixture();
        let a = f.bags.seed("a", 100.0);
        let err = f.svc.update(dto(1.0, 1.0, 1.0, a.id)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_twice_reports_missing_id() {
        let f = fixture();
        let bag = f.bags.seed("b", 100.0);
        let keep = f.svc.create(dto(1.0, 1.0, 1.0, bag.id)).await.unwrap();
        let created = f.svc.create(dto(2.0, 3.0, 4.0, bag.id)).await.unwrap();
        let id = created.id.unwrap();

        assert_eq!(f.svc.delete(id).await.unwrap(), format!("Deleted:{id}"));
        assert!(matches!(f.svc.get(id).await, Err(ServiceError::CuboidNotFound(_))));

        let err = f.svc.delete(id).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Cuboid not exists:{id}"));
        assert_eq!(f.svc.get_all().await.unwrap(), vec![keep]);
    }

    #[tokio::test]
    async fn get_all_on_empty_store_is_empty() {
        assert!(fixture().svc.get_all().await.unwrap().is_empty());
    }
}
