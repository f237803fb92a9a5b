use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::WithRejection;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::HomeServiceData;
use crate::domain::catalog::models::HomeServiceId;
use crate::domain::catalog::ports::CatalogServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_service(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<ApiSuccess<GetServiceResponseData>, ApiError> {
    state
        .catalog_service
        .get_service(HomeServiceId(id))
        .await
        .map_err(ApiError::from)
        .map(|ref service| {
            ApiSuccess::new(
                StatusCode::OK,
                GetServiceResponseData {
                    data: service.into(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetServiceResponseData {
    pub data: HomeServiceData,
}
