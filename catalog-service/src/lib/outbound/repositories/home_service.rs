use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use tokio::sync::RwLock;

use crate::catalog::errors::CatalogError;
use crate::domain::catalog::models::CatalogStats;
use crate::domain::catalog::models::DurationDays;
use crate::domain::catalog::models::HomeService;
use crate::domain::catalog::models::HomeServiceId;
use crate::domain::catalog::models::NewHomeService;
use crate::domain::catalog::models::Price;
use crate::domain::catalog::models::ServiceCategory;
use crate::domain::catalog::models::ServiceName;
use crate::domain::catalog::models::UpdateHomeServiceCommand;
use crate::domain::catalog::ports::HomeServiceRepository;

pub struct PostgresHomeServiceRepository {
    pool: PgPool,
}

impl PostgresHomeServiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_service(row: PgRow) -> Result<HomeService, CatalogError> {
        Ok(HomeService {
            id: HomeServiceId(row.get("id")),
            name: ServiceName::new(row.get("name"))?,
            category: row.get::<String, _>("category").parse::<ServiceCategory>()?,
            description: row.get("description"),
            price: Price::new(row.get("price"))?,
            duration_days: DurationDays::new(row.get::<i32, _>("duration_days").into())?,
            is_available: row.get("is_available"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}

#[async_trait]
impl HomeServiceRepository for PostgresHomeServiceRepository {
    async fn list(&self) -> Result<Vec<HomeService>, CatalogError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, category, description, price, duration_days, is_available,
                   created_at, updated_at
            FROM services
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_service).collect()
    }

    async fn find_by_id(&self, id: HomeServiceId) -> Result<Option<HomeService>, CatalogError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, category, description, price, duration_days, is_available,
                   created_at, updated_at
            FROM services
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_service).transpose()
    }

    async fn insert(&self, service: NewHomeService) -> Result<HomeServiceId, CatalogError> {
        let row = sqlx::query(
            r#"
            INSERT INTO services (name, category, description, price, duration_days, is_available)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(service.name.as_str())
        .bind(service.category.as_str())
        .bind(&service.description)
        .bind(service.price.amount())
        .bind(service.duration_days.days())
        .bind(service.is_available)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(HomeServiceId(row.get("id")))
    }

    async fn update(
        &self,
        id: HomeServiceId,
        command: &UpdateHomeServiceCommand,
    ) -> Result<u64, CatalogError> {
        let result = sqlx::query(
            r#"
            UPDATE services
            SET name = COALESCE($2, name),
                category = COALESCE($3, category),
                description = COALESCE($4, description),
                price = COALESCE($5, price),
                duration_days = COALESCE($6, duration_days),
                is_available = COALESCE($7, is_available),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .bind(command.name.as_ref().map(|n| n.as_str()))
        .bind(command.category.map(|c| c.as_str()))
        .bind(command.description.as_deref())
        .bind(command.price.map(|p| p.amount()))
        .bind(command.duration_days.map(|d| d.days()))
        .bind(command.is_available)
        .execute(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: HomeServiceId) -> Result<u64, CatalogError> {
        let result = sqlx::query(
            r#"
            DELETE FROM services
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn stats(&self) -> Result<CatalogStats, CatalogError> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS total_services,
                   COUNT(*) FILTER (WHERE is_available) AS available_services,
                   COALESCE(SUM(price), 0) AS total_value
            FROM services
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(CatalogStats {
            total_services: row.get::<i64, _>("total_services").max(0) as u64,
            available_services: row.get::<i64, _>("available_services").max(0) as u64,
            total_value: row.get("total_value"),
        })
    }
}

#[derive(Default)]
struct Catalog {
    last_id: i64,
    services: Vec<HomeService>,
}

/// Resource store kept in process memory, for development and tests.
#[derive(Default)]
pub struct InMemoryHomeServiceRepository {
    catalog: RwLock<Catalog>,
}

impl InMemoryHomeServiceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HomeServiceRepository for InMemoryHomeServiceRepository {
    async fn list(&self) -> Result<Vec<HomeService>, CatalogError> {
        let catalog = self.catalog.read().await;

        let mut services = catalog.services.clone();
        services.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(services)
    }

    async fn find_by_id(&self, id: HomeServiceId) -> Result<Option<HomeService>, CatalogError> {
        let catalog = self.catalog.read().await;
        Ok(catalog.services.iter().find(|s| s.id == id).cloned())
    }

    async fn insert(&self, service: NewHomeService) -> Result<HomeServiceId, CatalogError> {
        let mut catalog = self.catalog.write().await;

        catalog.last_id += 1;
        let id = HomeServiceId(catalog.last_id);
        let now = Utc::now();

        catalog.services.push(HomeService {
            id,
            name: service.name,
            category: service.category,
            description: service.description,
            price: service.price,
            duration_days: service.duration_days,
            is_available: service.is_available,
            created_at: now,
            updated_at: now,
        });

        Ok(id)
    }

    async fn update(
        &self,
        id: HomeServiceId,
        command: &UpdateHomeServiceCommand,
    ) -> Result<u64, CatalogError> {
        let mut catalog = self.catalog.write().await;

        match catalog.services.iter_mut().find(|s| s.id == id) {
            Some(service) => {
                command.apply_to(service, Utc::now());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: HomeServiceId) -> Result<u64, CatalogError> {
        let mut catalog = self.catalog.write().await;

        let before = catalog.services.len();
        catalog.services.retain(|s| s.id != id);

        Ok((before - catalog.services.len()) as u64)
    }

    async fn stats(&self) -> Result<CatalogStats, CatalogError> {
        let catalog = self.catalog.read().await;

        Ok(CatalogStats {
            total_services: catalog.services.len() as u64,
            available_services: catalog.services.iter().filter(|s| s.is_available).count() as u64,
            total_value: catalog.services.iter().map(|s| s.price.amount()).sum(),
        })
    }
}
