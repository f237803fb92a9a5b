use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub storage: StorageConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    /// Allowed browser origin; any origin is allowed when unset.
    #[serde(default)]
    pub cors_origin: Option<String>,
}

#[derive(Deserialize, Clone)]
pub struct SessionConfig {
    pub secret: String,
    #[serde(default = "default_expiration_hours")]
    pub expiration_hours: i64,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default)]
    pub secure_cookie: bool,
    #[serde(default)]
    pub same_site: SameSitePolicy,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"<redacted>")
            .field("expiration_hours", &self.expiration_hours)
            .field("cookie_name", &self.cookie_name)
            .field("secure_cookie", &self.secure_cookie)
            .field("same_site", &self.same_site)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SameSitePolicy {
    #[default]
    Strict,
    Lax,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    #[serde(default)]
    pub database_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Postgres,
}

#[derive(Deserialize, Clone)]
pub struct SeedConfig {
    pub admin_username: String,
    pub admin_password: String,
    pub admin_full_name: String,
    pub admin_email: String,
    /// Seeds sample catalog entries and, when a password is set, a `user` account.
    #[serde(default)]
    pub demo_data: bool,
    #[serde(default)]
    pub demo_user_password: Option<String>,
}

impl std::fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedConfig")
            .field("admin_username", &self.admin_username)
            .field("admin_password", &"<redacted>")
            .field("admin_full_name", &self.admin_full_name)
            .field("admin_email", &self.admin_email)
            .field("demo_data", &self.demo_data)
            .field(
                "demo_user_password",
                &self.demo_user_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

fn default_expiration_hours() -> i64 {
    auth::Authenticator::DEFAULT_SESSION_HOURS
}

fn default_cookie_name() -> String {
    "token".to_string()
}

impl Config {
    pub const MIN_SECRET_LENGTH: usize = 32;

    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SESSION__SECRET, STORAGE__BACKEND, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: SESSION__SECRET=... overrides session.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject settings the server must not start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.secret.len() < Self::MIN_SECRET_LENGTH {
            return Err(ConfigError::Message(format!(
                "session.secret must be at least {} bytes",
                Self::MIN_SECRET_LENGTH
            )));
        }

        if self.session.expiration_hours <= 0 {
            return Err(ConfigError::Message(
                "session.expiration_hours must be positive".to_string(),
            ));
        }

        if self.storage.backend == StorageBackend::Postgres && self.storage.database_url.is_none()
        {
            return Err(ConfigError::Message(
                "storage.database_url is required for the postgres backend".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                http_port: 5000,
                cors_origin: None,
            },
            session: SessionConfig {
                secret: "a".repeat(32),
                expiration_hours: 24,
                cookie_name: default_cookie_name(),
                secure_cookie: false,
                same_site: SameSitePolicy::Lax,
            },
            storage: StorageConfig {
                backend: StorageBackend::Memory,
                database_url: None,
            },
            seed: SeedConfig {
                admin_username: "admin".to_string(),
                admin_password: "admin123".to_string(),
                admin_full_name: "Administrator".to_string(),
                admin_email: "admin@example.com".to_string(),
                demo_data: false,
                demo_user_password: Some("user123".to_string()),
            },
        }
    }

    #[test]
    fn test_validate_accepts_sane_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_secret() {
        let mut config = config();
        config.session.secret = "your-secret-key".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_requires_database_url_for_postgres() {
        let mut config = config();
        config.storage.backend = StorageBackend::Postgres;
        assert!(config.validate().is_err());

        config.storage.database_url = Some("postgres://localhost/catalog".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let rendered = format!("{:?}", config());

        assert!(!rendered.contains(&"a".repeat(32)));
        assert!(!rendered.contains("admin123"));
        assert!(!rendered.contains("user123"));
    }
}
