use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::create_service::ServiceMutationResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::catalog::errors::CatalogError;
use crate::domain::catalog::models::DurationDays;
use crate::domain::catalog::models::HomeServiceId;
use crate::domain::catalog::models::Price;
use crate::domain::catalog::models::ServiceCategory;
use crate::domain::catalog::models::ServiceName;
use crate::domain::catalog::models::UpdateHomeServiceCommand;
use crate::domain::catalog::ports::CatalogServicePort;
use crate::domain::user::models::Role;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_service(
    State(state): State<AppState>,
    Extension(session): Extension<AuthenticatedUser>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateServiceRequest>, JsonRejection>,
) -> Result<ApiSuccess<ServiceMutationResponseData>, ApiError> {
    // Role is checked before the request is inspected.
    session.require_role(Role::Admin)?;
    let Path(id) = id?;
    let Json(body) = body?;

    state
        .catalog_service
        .update_service(HomeServiceId(id), body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref service| {
            ApiSuccess::new(
                StatusCode::OK,
                ServiceMutationResponseData {
                    message: "Service updated successfully".to_string(),
                    data: service.into(),
                },
            )
        })
}

/// HTTP request body for a partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateServiceRequest {
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

impl UpdateServiceRequest {
    fn try_into_command(self) -> Result<UpdateHomeServiceCommand, CatalogError> {
        Ok(UpdateHomeServiceCommand {
            name: self.name.map(ServiceName::new).transpose()?,
            category: self
                .category
                .map(|c| c.parse::<ServiceCategory>())
                .transpose()?,
            description: self.description,
            price: self.price.map(Price::new).transpose()?,
            duration_days: self.duration_days.map(DurationDays::new).transpose()?,
            is_available: self.is_available,
        })
    }
}
