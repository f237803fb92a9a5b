use async_trait::async_trait;

use crate::catalog::errors::CatalogError;
use crate::catalog::models::CatalogStats;
use crate::catalog::models::HomeService;
use crate::catalog::models::HomeServiceId;
use crate::catalog::models::NewHomeService;
use crate::catalog::models::UpdateHomeServiceCommand;

/// Port for catalog domain service operations.
///
/// Access control happens before these are called; the catalog itself knows
/// nothing about sessions or roles.
#[async_trait]
pub trait CatalogServicePort: Send + Sync + 'static {
    /// List every catalog entry, newest first.
    async fn list_services(&self) -> Result<Vec<HomeService>, CatalogError>;

    /// # Errors
    /// * `NotFound` - No entry with this id
    async fn get_service(&self, id: HomeServiceId) -> Result<HomeService, CatalogError>;

    /// Add an entry and return it as stored.
    async fn create_service(&self, service: NewHomeService) -> Result<HomeService, CatalogError>;

    /// Apply a partial update and return the entry as stored.
    ///
    /// # Errors
    /// * `NotFound` - No entry with this id
    async fn update_service(
        &self,
        id: HomeServiceId,
        command: UpdateHomeServiceCommand,
    ) -> Result<HomeService, CatalogError>;

    /// # Errors
    /// * `NotFound` - No entry with this id
    async fn delete_service(&self, id: HomeServiceId) -> Result<(), CatalogError>;

    async fn dashboard_stats(&self) -> Result<CatalogStats, CatalogError>;
}

/// Resource store for the catalog.
#[async_trait]
pub trait HomeServiceRepository: Send + Sync + 'static {
    /// All entries, newest first.
    async fn list(&self) -> Result<Vec<HomeService>, CatalogError>;

    async fn find_by_id(&self, id: HomeServiceId) -> Result<Option<HomeService>, CatalogError>;

    /// # Returns
    /// Identifier assigned by the store
    async fn insert(&self, service: NewHomeService) -> Result<HomeServiceId, CatalogError>;

    /// # Returns
    /// Number of affected entries (0 when the id does not exist)
    async fn update(
        &self,
        id: HomeServiceId,
        command: &UpdateHomeServiceCommand,
    ) -> Result<u64, CatalogError>;

    /// # Returns
    /// Number of affected entries (0 when the id does not exist)
    async fn delete(&self, id: HomeServiceId) -> Result<u64, CatalogError>;

    async fn stats(&self) -> Result<CatalogStats, CatalogError>;
}
