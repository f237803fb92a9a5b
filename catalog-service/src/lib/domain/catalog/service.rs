use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::errors::CatalogError;
use crate::catalog::models::CatalogStats;
use crate::catalog::models::HomeService;
use crate::catalog::models::HomeServiceId;
use crate::catalog::models::NewHomeService;
use crate::catalog::models::UpdateHomeServiceCommand;
use crate::catalog::ports::CatalogServicePort;
use crate::catalog::ports::HomeServiceRepository;

/// Domain service implementation for the services catalog.
pub struct CatalogService<R>
where
    R: HomeServiceRepository,
{
    repository: Arc<R>,
}

impl<R> CatalogService<R>
where
    R: HomeServiceRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    async fn fetch(&self, id: HomeServiceId) -> Result<HomeService, CatalogError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<R> CatalogServicePort for CatalogService<R>
where
    R: HomeServiceRepository,
{
    async fn list_services(&self) -> Result<Vec<HomeService>, CatalogError> {
        self.repository.list().await
    }

    async fn get_service(&self, id: HomeServiceId) -> Result<HomeService, CatalogError> {
        self.fetch(id).await
    }

    async fn create_service(&self, service: NewHomeService) -> Result<HomeService, CatalogError> {
        let id = self.repository.insert(service).await?;
        tracing::info!(service_id = %id, "Catalog entry created");

        self.fetch(id).await
    }

    async fn update_service(
        &self,
        id: HomeServiceId,
        command: UpdateHomeServiceCommand,
    ) -> Result<HomeService, CatalogError> {
        let affected = self.repository.update(id, &command).await?;
        if affected == 0 {
            return Err(CatalogError::NotFound(id.to_string()));
        }
        tracing::info!(service_id = %id, "Catalog entry updated");

        self.fetch(id).await
    }

    async fn delete_service(&self, id: HomeServiceId) -> Result<(), CatalogError> {
        let affected = self.repository.delete(id).await?;
        if affected == 0 {
            return Err(CatalogError::NotFound(id.to_string()));
        }
        tracing::info!(service_id = %id, "Catalog entry deleted");

        Ok(())
    }

    async fn dashboard_stats(&self) -> Result<CatalogStats, CatalogError> {
        self.repository.stats().await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::catalog::models::DurationDays;
    use crate::catalog::models::Price;
    use crate::catalog::models::ServiceCategory;
    use crate::catalog::models::ServiceName;

    mock! {
        pub TestHomeServiceRepository {}

        #[async_trait]
        impl HomeServiceRepository for TestHomeServiceRepository {
            async fn list(&self) -> Result<Vec<HomeService>, CatalogError>;
            async fn find_by_id(&self, id: HomeServiceId) -> Result<Option<HomeService>, CatalogError>;
            async fn insert(&self, service: NewHomeService) -> Result<HomeServiceId, CatalogError>;
            async fn update(&self, id: HomeServiceId, command: &UpdateHomeServiceCommand) -> Result<u64, CatalogError>;
            async fn delete(&self, id: HomeServiceId) -> Result<u64, CatalogError>;
            async fn stats(&self) -> Result<CatalogStats, CatalogError>;
        }
    }

    fn drilling(id: i64) -> HomeService {
        let now = Utc::now();
        HomeService {
            id: HomeServiceId(id),
            name: ServiceName::new("Bor Sumur Dalam 50m".to_string()).unwrap(),
            category: ServiceCategory::Bor,
            description: "Pengeboran sumur dalam hingga 50 meter".to_string(),
            price: Price::new(7_500_000.0).unwrap(),
            duration_days: DurationDays::new(3).unwrap(),
            is_available: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_service_returns_stored_entry() {
        let mut repository = MockTestHomeServiceRepository::new();

        repository
            .expect_insert()
            .withf(|service| service.category == ServiceCategory::Bor)
            .times(1)
            .returning(|_| Ok(HomeServiceId(5)));
        repository
            .expect_find_by_id()
            .withf(|id| *id == HomeServiceId(5))
            .times(1)
            .returning(|id| Ok(Some(drilling(id.0))));

        let service = CatalogService::new(Arc::new(repository));

        let created = service
            .create_service(NewHomeService {
                name: ServiceName::new("Bor Sumur Dalam 50m".to_string()).unwrap(),
                category: ServiceCategory::Bor,
                description: String::new(),
                price: Price::new(7_500_000.0).unwrap(),
                duration_days: DurationDays::new(3).unwrap(),
                is_available: true,
            })
            .await
            .unwrap();

        assert_eq!(created.id, HomeServiceId(5));
    }

    #[tokio::test]
    async fn test_get_service_not_found() {
        let mut repository = MockTestHomeServiceRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let service = CatalogService::new(Arc::new(repository));

        let result = service.get_service(HomeServiceId(99)).await;
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_missing_entry_is_not_found() {
        let mut repository = MockTestHomeServiceRepository::new();
        repository.expect_update().times(1).returning(|_, _| Ok(0));
        repository.expect_find_by_id().times(0);

        let service = CatalogService::new(Arc::new(repository));

        let result = service
            .update_service(HomeServiceId(99), UpdateHomeServiceCommand::default())
            .await;
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_refetches_entry() {
        let mut repository = MockTestHomeServiceRepository::new();
        repository.expect_update().times(1).returning(|_, _| Ok(1));
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(drilling(id.0))));

        let service = CatalogService::new(Arc::new(repository));

        let updated = service
            .update_service(
                HomeServiceId(2),
                UpdateHomeServiceCommand {
                    is_available: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, HomeServiceId(2));
    }

    #[tokio::test]
    async fn test_delete_reports_missing_entry() {
        let mut repository = MockTestHomeServiceRepository::new();
        repository
            .expect_delete()
            .withf(|id| *id == HomeServiceId(1))
            .returning(|_| Ok(1));
        repository
            .expect_delete()
            .withf(|id| *id == HomeServiceId(2))
            .returning(|_| Ok(0));

        let service = CatalogService::new(Arc::new(repository));

        assert!(service.delete_service(HomeServiceId(1)).await.is_ok());
        assert!(matches!(
            service.delete_service(HomeServiceId(2)).await,
            Err(CatalogError::NotFound(_))
        ));
    }
}
