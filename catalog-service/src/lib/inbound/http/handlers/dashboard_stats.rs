use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::catalog::models::CatalogStats;
use crate::domain::catalog::ports::CatalogServicePort;
use crate::inbound::http::router::AppState;

pub async fn dashboard_stats(
    State(state): State<AppState>,
) -> Result<ApiSuccess<DashboardStatsResponseData>, ApiError> {
    state
        .catalog_service
        .dashboard_stats()
        .await
        .map_err(ApiError::from)
        .map(|data| ApiSuccess::new(StatusCode::OK, DashboardStatsResponseData { data }))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStatsResponseData {
    pub data: CatalogStats,
}
