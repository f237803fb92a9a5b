use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::user::errors::EmailError;
use crate::user::errors::FullNameError;
use crate::user::errors::RoleError;
use crate::user::errors::UserError;
use crate::user::errors::UsernameError;

/// User account entity.
///
/// Created at registration or seed time. Never deleted by the authentication
/// layer.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub full_name: FullName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type, assigned by the credential store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Coarse privilege tag controlling access to catalog mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

/// Username value type
///
/// Ensures username is 3-50 characters and contains only alphanumeric, underscore, and hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 50;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `TooShort` - Username shorter than 3 characters
    /// * `TooLong` - Username longer than 50 characters
    /// * `InvalidCharacters` - Contains non-alphanumeric characters (except _ and -)
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let username = Self::with_valid_length(username)?;
        let username = Self::with_valid_chars(username)?;
        Ok(Self(username))
    }

    fn with_valid_length(username: String) -> Result<String, UsernameError> {
        let length = username.chars().count();
        if length < Self::MIN_LENGTH {
            Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(username)
        }
    }

    fn with_valid_chars(username: String) -> Result<String, UsernameError> {
        if username
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            Ok(username)
        } else {
            Err(UsernameError::InvalidCharacters)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name shown next to the username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    const MAX_LENGTH: usize = 100;

    pub fn new(full_name: String) -> Result<Self, FullNameError> {
        let trimmed = full_name.trim();
        let length = trimmed.chars().count();

        if length == 0 {
            Err(FullNameError::Blank)
        } else if length > Self::MAX_LENGTH {
            Err(FullNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Public identity of an authenticated user.
///
/// This is exactly what a session token carries and what login, registration
/// and session checks return. It never contains the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl SessionIdentity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<&User> for SessionIdentity {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.as_str().to_string(),
            name: user.full_name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            role: user.role,
        }
    }
}

/// User record ready to be persisted; the store assigns the identifier.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub full_name: FullName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            full_name: self.full_name,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// Credentials presented at login, already checked for presence.
#[derive(Debug)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

impl LoginCommand {
    /// # Errors
    /// * `MissingField` - Username or password absent or empty
    pub fn new(
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self, UserError> {
        let username = username
            .filter(|u| !u.is_empty())
            .ok_or(UserError::MissingField("username"))?;
        let password = password
            .filter(|p| !p.is_empty())
            .ok_or(UserError::MissingField("password"))?;

        Ok(Self { username, password })
    }
}

/// Outcome of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub identity: SessionIdentity,
    pub session_token: String,
}

/// Command for self-service registration. The role is not part of it: every
/// registered account gets `Role::User`.
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub username: Username,
    pub full_name: FullName,
    pub email: EmailAddress,
    pub password: String,
}

/// Command for server-side account provisioning (startup seeding).
#[derive(Debug)]
pub struct ProvisionUserCommand {
    pub username: Username,
    pub full_name: FullName,
    pub email: EmailAddress,
    pub password: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_validation() {
        assert!(Username::new("admin".to_string()).is_ok());
        assert_eq!(
            Username::new("ab".to_string()),
            Err(UsernameError::TooShort { min: 3, actual: 2 })
        );
        assert_eq!(
            Username::new("a".repeat(51)),
            Err(UsernameError::TooLong {
                max: 50,
                actual: 51
            })
        );
        assert_eq!(
            Username::new("admin; drop".to_string()),
            Err(UsernameError::InvalidCharacters)
        );
    }

    #[test]
    fn test_role_round_trips_through_str() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("user".parse::<Role>(), Ok(Role::User));
        assert_eq!(
            "root".parse::<Role>(),
            Err(RoleError::Unknown("root".to_string()))
        );
        assert_eq!(Role::Admin.to_string(), "admin");
    }

    #[test]
    fn test_full_name_is_trimmed_and_required() {
        assert_eq!(
            FullName::new("  User Biasa ".to_string()).unwrap().as_str(),
            "User Biasa"
        );
        assert_eq!(FullName::new("   ".to_string()), Err(FullNameError::Blank));
    }

    #[test]
    fn test_session_identity_excludes_password_hash() {
        let user = User {
            id: UserId(1),
            username: Username::new("admin".to_string()).unwrap(),
            full_name: FullName::new("Administrator".to_string()).unwrap(),
            email: EmailAddress::new("admin@example.com".to_string()).unwrap(),
            password_hash: "$argon2id$secret".to_string(),
            role: Role::Admin,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(SessionIdentity::from(&user)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "username": "admin",
                "name": "Administrator",
                "email": "admin@example.com",
                "role": "admin"
            })
        );
    }

    #[test]
    fn test_login_command_requires_both_fields() {
        assert!(matches!(
            LoginCommand::new(None, Some("pw".to_string())),
            Err(UserError::MissingField("username"))
        ));
        assert!(matches!(
            LoginCommand::new(Some("admin".to_string()), Some(String::new())),
            Err(UserError::MissingField("password"))
        ));
        assert!(LoginCommand::new(Some("admin".to_string()), Some("pw".to_string())).is_ok());
    }
}
