use auth::SessionClaims;
use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::Role;
use crate::domain::user::models::SessionIdentity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub const MISSING_CREDENTIAL_MESSAGE: &str = "Access denied. Please login first.";
pub const INVALID_CREDENTIAL_MESSAGE: &str = "Invalid or expired token.";

/// Extension type holding the decoded session for the current request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub identity: SessionIdentity,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    /// Authorization gate. Admins satisfy every role.
    ///
    /// # Errors
    /// * `Forbidden` - The session's role is insufficient
    pub fn require_role(&self, role: Role) -> Result<(), ApiError> {
        if self.identity.role == role || self.identity.is_admin() {
            return Ok(());
        }

        tracing::info!(
            user_id = %self.identity.id,
            role = %self.identity.role,
            required = %role,
            "Insufficient role"
        );

        let message = match role {
            Role::Admin => "Admin access required",
            Role::User => "User access required",
        };
        Err(ApiError::Forbidden(message.to_string()))
    }
}

/// Middleware that validates the session token and adds the identity to
/// request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = state.session_cookie.extract(req.headers()).ok_or_else(|| {
        tracing::debug!(uri = %req.uri(), "No session presented");
        ApiError::Unauthorized(MISSING_CREDENTIAL_MESSAGE.to_string())
    })?;

    let claims: SessionClaims<SessionIdentity> = state
        .authenticator
        .validate_session(&token)
        .map_err(|_| ApiError::Unauthorized(INVALID_CREDENTIAL_MESSAGE.to_string()))?;

    let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
        .ok_or_else(|| ApiError::Unauthorized(INVALID_CREDENTIAL_MESSAGE.to_string()))?;

    req.extensions_mut().insert(AuthenticatedUser {
        identity: claims.into_identity(),
        expires_at,
    });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::models::UserId;

    fn session(role: Role) -> AuthenticatedUser {
        AuthenticatedUser {
            identity: SessionIdentity {
                id: UserId(2),
                username: "user".to_string(),
                name: "User Biasa".to_string(),
                email: "user@email.com".to_string(),
                role,
            },
            expires_at: Utc::now(),
        }
    }

    #[test]
    fn test_require_admin() {
        assert!(session(Role::Admin).require_role(Role::Admin).is_ok());
        assert_eq!(
            session(Role::User).require_role(Role::Admin),
            Err(ApiError::Forbidden("Admin access required".to_string()))
        );
    }

    #[test]
    fn test_admin_satisfies_user_role() {
        assert!(session(Role::Admin).require_role(Role::User).is_ok());
        assert!(session(Role::User).require_role(Role::User).is_ok());
    }
}
