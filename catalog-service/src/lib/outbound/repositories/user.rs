use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use tokio::sync::RwLock;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::FullName;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: PgRow) -> Result<User, UserError> {
        Ok(User {
            id: UserId(row.get("id")),
            username: Username::new(row.get("username"))?,
            full_name: FullName::new(row.get("full_name"))?,
            email: EmailAddress::new(row.get("email"))?,
            password_hash: row.get("password_hash"),
            role: row.get::<String, _>("role").parse::<Role>()?,
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, full_name, email, role, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_user).transpose()
    }

    async fn insert(&self, user: NewUser) -> Result<UserId, UserError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash, full_name, email, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(user.username.as_str())
        .bind(&user.password_hash)
        .bind(user.full_name.as_str())
        .bind(user.email.as_str())
        .bind(user.role.as_str())
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("users_username_key")
                {
                    return UserError::UsernameAlreadyExists(user.username.as_str().to_string());
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        Ok(UserId(row.get("id")))
    }
}

/// Credential store kept in process memory, for development and tests.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.username == username).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<UserId, UserError> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }

        let id = UserId(users.iter().map(|u| u.id.0).max().unwrap_or(0) + 1);
        users.push(user.with_id(id));

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: Username::new(username.to_string()).unwrap(),
            full_name: FullName::new("User Biasa".to_string()).unwrap(),
            email: EmailAddress::new("user@email.com".to_string()).unwrap(),
            password_hash: "$argon2id$stub".to_string(),
            role: Role::User,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repository = InMemoryUserRepository::new();

        assert_eq!(repository.insert(new_user("admin")).await.unwrap(), UserId(1));
        assert_eq!(repository.insert(new_user("user")).await.unwrap(), UserId(2));

        let found = repository
            .find_by_username(&Username::new("user".to_string()).unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, UserId(2));
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let repository = InMemoryUserRepository::new();
        repository.insert(new_user("budi")).await.unwrap();

        let result = repository.insert(new_user("budi")).await;
        assert!(matches!(result, Err(UserError::UsernameAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_unknown_username_is_none() {
        let repository = InMemoryUserRepository::new();

        let found = repository
            .find_by_username(&Username::new("ghost".to_string()).unwrap())
            .await
            .unwrap();
        assert!(found.is_none());
    }
}
