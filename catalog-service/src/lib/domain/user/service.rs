use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::ProvisionUserCommand;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::SessionIdentity;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for login, registration and provisioning.
///
/// Argon2 work runs on the blocking pool so a slow hash only delays its own
/// request.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password verifier and session codec
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);

        let hash = tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(anyhow::Error::from)??;

        Ok(hash)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, UserError> {
        let id = self.repository.insert(new_user.clone()).await?;
        Ok(new_user.with_id(id))
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, UserError> {
        let LoginCommand { username, password } = command;

        let user = match Username::new(username) {
            Ok(username) => self.repository.find_by_username(&username).await?,
            Err(_) => None,
        };

        let Some(user) = user else {
            // Unknown usernames cost the same hashing time as a wrong password.
            let _ = self.hash_password(password).await;
            return Err(UserError::InvalidCredentials);
        };

        let identity = SessionIdentity::from(&user);
        let authenticator = Arc::clone(&self.authenticator);
        let stored_hash = user.password_hash;
        let claims = identity.clone();

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &claims)
        })
        .await
        .map_err(anyhow::Error::from)?;

        match result {
            Ok(authenticated) => Ok(LoginOutcome {
                identity,
                session_token: authenticated.session_token,
            }),
            Err(AuthenticationError::InvalidCredentials) => Err(UserError::InvalidCredentials),
            Err(AuthenticationError::Token(e)) => Err(UserError::Session(e)),
        }
    }

    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameAlreadyExists(
                command.username.as_str().to_string(),
            ));
        }

        let password_hash = self.hash_password(command.password).await?;

        self.create_user(NewUser {
            username: command.username,
            full_name: command.full_name,
            email: command.email,
            password_hash,
            role: Role::User,
            created_at: Utc::now(),
        })
        .await
    }

    async fn provision(&self, command: ProvisionUserCommand) -> Result<Option<User>, UserError> {
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Ok(None);
        }

        let password_hash = self.hash_password(command.password).await?;

        let user = self
            .create_user(NewUser {
                username: command.username,
                full_name: command.full_name,
                email: command.email,
                password_hash,
                role: command.role,
                created_at: Utc::now(),
            })
            .await?;

        Ok(Some(user))
    }
}
