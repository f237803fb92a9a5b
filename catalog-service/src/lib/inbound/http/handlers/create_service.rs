use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::HomeServiceData;
use crate::catalog::errors::CatalogError;
use crate::domain::catalog::models::DurationDays;
use crate::domain::catalog::models::NewHomeService;
use crate::domain::catalog::models::Price;
use crate::domain::catalog::models::ServiceCategory;
use crate::domain::catalog::models::ServiceName;
use crate::domain::catalog::ports::CatalogServicePort;
use crate::domain::user::models::Role;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_service(
    State(state): State<AppState>,
    Extension(session): Extension<AuthenticatedUser>,
    body: Result<Json<CreateServiceRequest>, JsonRejection>,
) -> Result<ApiSuccess<ServiceMutationResponseData>, ApiError> {
    // Role is checked before the request is inspected.
    session.require_role(Role::Admin)?;
    let Json(body) = body?;

    state
        .catalog_service
        .create_service(body.try_into_new_service()?)
        .await
        .map_err(ApiError::from)
        .map(|ref service| {
            ApiSuccess::new(
                StatusCode::CREATED,
                ServiceMutationResponseData {
                    message: "Service created successfully".to_string(),
                    data: service.into(),
                },
            )
        })
}

/// HTTP request body for creating a catalog entry (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateServiceRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    duration_days: Option<i64>,
    #[serde(default)]
    is_available: Option<bool>,
}

impl CreateServiceRequest {
    fn try_into_new_service(self) -> Result<NewHomeService, CatalogError> {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or(CatalogError::MissingField("name"))?;
        let category = self
            .category
            .filter(|c| !c.is_empty())
            .ok_or(CatalogError::MissingField("category"))?;
        let price = self.price.ok_or(CatalogError::MissingField("price"))?;

        let duration_days = match self.duration_days {
            Some(days) => DurationDays::new(days)?,
            None => DurationDays::default(),
        };

        Ok(NewHomeService {
            name: ServiceName::new(name)?,
            category: category.parse::<ServiceCategory>()?,
            description: self.description.unwrap_or_default(),
            price: Price::new(price)?,
            duration_days,
            is_available: self.is_available.unwrap_or(true),
        })
    }
}

/// Response for create and update: `{success, message, data}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceMutationResponseData {
    pub message: String,
    pub data: HomeServiceData,
}
