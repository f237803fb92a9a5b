use async_trait::async_trait;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::ProvisionUserCommand;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;

/// Port for authentication and account operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and open a session.
    ///
    /// # Arguments
    /// * `command` - Username and password, both present and non-empty
    ///
    /// # Returns
    /// Public identity and the signed session token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password (indistinguishable)
    /// * `Password` / `Session` / `DatabaseError` - Collaborator failure
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, UserError>;

    /// Register a new account with the `user` role.
    ///
    /// # Arguments
    /// * `command` - Validated username, name, email and plaintext password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Create an account with an explicit role unless the username exists.
    ///
    /// # Returns
    /// The created user, or `None` when the username was already present
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn provision(&self, command: ProvisionUserCommand) -> Result<Option<User>, UserError>;
}

/// Credential store.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Persist a new user.
    ///
    /// # Returns
    /// Identifier assigned by the store
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, user: NewUser) -> Result<UserId, UserError>;
}
