use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use crate::domain::user::models::SessionIdentity;
use crate::inbound::http::middleware::AuthenticatedUser;

pub async fn check_session(
    Extension(session): Extension<AuthenticatedUser>,
) -> ApiSuccess<CheckSessionResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        CheckSessionResponseData {
            authenticated: true,
            user: session.identity,
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckSessionResponseData {
    pub authenticated: bool,
    pub user: SessionIdentity,
}
