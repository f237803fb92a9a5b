use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::FullName;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::SessionIdentity;
use crate::domain::user::models::Username;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<RegisterRequestBody>, ApiError>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let user = state
        .auth_service
        .register(body.try_into_command()?)
        .await?;

    tracing::info!(user_id = %user.id, username = %user.username, "User registered");

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        RegisterResponseData {
            message: "User registered successfully".to_string(),
            user: SessionIdentity::from(&user),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, UserError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(UserError::MissingField(field))
}

impl RegisterRequestBody {
    fn try_into_command(self) -> Result<RegisterUserCommand, UserError> {
        let username = required(self.username, "username")?;
        let password = required(self.password, "password")?;
        let full_name = required(self.full_name, "full_name")?;
        let email = required(self.email, "email")?;

        Ok(RegisterUserCommand {
            username: Username::new(username)?,
            full_name: FullName::new(full_name)?,
            email: EmailAddress::new(email)?,
            password,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub message: String,
    pub user: SessionIdentity,
}
