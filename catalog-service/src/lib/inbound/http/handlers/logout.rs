use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;

use super::ApiSuccess;
use super::MessageData;
use crate::inbound::http::router::AppState;

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, ApiSuccess<MessageData>) {
    (
        state.session_cookie.clear(jar),
        ApiSuccess::new(StatusCode::OK, MessageData::new("Logout successful")),
    )
}
