use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::catalog::models::HomeServiceId;
use crate::domain::catalog::ports::CatalogServicePort;
use crate::domain::user::models::Role;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_service(
    State(state): State<AppState>,
    Extension(session): Extension<AuthenticatedUser>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    session.require_role(Role::Admin)?;
    let Path(id) = id?;

    state
        .catalog_service
        .delete_service(HomeServiceId(id))
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageData::new("Service deleted successfully"),
            )
        })
}
