use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::HomeServiceData;
use crate::domain::catalog::ports::CatalogServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_services(
    State(state): State<AppState>,
) -> Result<ApiSuccess<ListServicesResponseData>, ApiError> {
    state
        .catalog_service
        .list_services()
        .await
        .map_err(ApiError::from)
        .map(|services| {
            let data: Vec<HomeServiceData> = services.iter().map(|s| s.into()).collect();
            ApiSuccess::new(
                StatusCode::OK,
                ListServicesResponseData {
                    count: data.len(),
                    data,
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListServicesResponseData {
    pub data: Vec<HomeServiceData>,
    pub count: usize,
}
