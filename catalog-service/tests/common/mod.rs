#![allow(dead_code)]

use std::sync::Arc;

use auth::Authenticator;
use auth::SessionCodec;
use catalog_service::catalog::service::CatalogService;
use catalog_service::config::SameSitePolicy;
use catalog_service::config::SeedConfig;
use catalog_service::inbound::http::router::create_router;
use catalog_service::inbound::http::session::SessionCookie;
use catalog_service::repositories::InMemoryHomeServiceRepository;
use catalog_service::repositories::InMemoryUserRepository;
use catalog_service::seed;
use catalog_service::user::service::AuthService;
use chrono::Duration;
use serde_json::json;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-session-signing-32-bytes";
pub const SESSION_HOURS: i64 = 24;

/// Test application that spawns a real server on in-memory stores.
///
/// Seeded with `admin`/`admin123` (admin), `user`/`user123` (user) and the
/// four sample catalog entries.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub session_codec: SessionCodec,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(
            TEST_SECRET,
            Duration::hours(SESSION_HOURS),
        ));

        let auth_service = Arc::new(AuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::clone(&authenticator),
        ));
        let catalog_service = Arc::new(CatalogService::new(Arc::new(
            InMemoryHomeServiceRepository::new(),
        )));

        seed::seed_accounts(
            auth_service.as_ref(),
            &SeedConfig {
                admin_username: "admin".to_string(),
                admin_password: "admin123".to_string(),
                admin_full_name: "Arya Fauzan Permana Putra".to_string(),
                admin_email: "aryapermana@gmail.com".to_string(),
                demo_data: true,
                demo_user_password: Some("user123".to_string()),
            },
        )
        .await
        .expect("Failed to seed accounts");
        seed::seed_catalog(catalog_service.as_ref())
            .await
            .expect("Failed to seed catalog");

        let router = create_router(
            auth_service,
            catalog_service,
            authenticator,
            SessionCookie::new(
                "token",
                false,
                SameSitePolicy::Lax,
                Duration::hours(SESSION_HOURS),
            ),
            None,
        );

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: Self::new_client(),
            session_codec: SessionCodec::new(TEST_SECRET, Duration::hours(SESSION_HOURS)),
        }
    }

    /// Client with its own cookie store, i.e. a separate browser.
    pub fn new_client() -> reqwest::Client {
        reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create reqwest client")
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(self.url(path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(self.url(path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(self.url(path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(self.url(path))
    }

    /// Log in with the shared client so later requests carry the cookie.
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/login")
            .json(&json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in and return the raw session token from the Set-Cookie header.
    pub async fn login_token(&self, username: &str, password: &str) -> String {
        let response = self.login(username, password).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let token = response
            .cookies()
            .find(|c| c.name() == "token")
            .map(|c| c.value().to_string())
            .expect("No session cookie set");
        token
    }
}
