use std::sync::Arc;

use anyhow::Context;
use auth::Authenticator;
use catalog_service::catalog::ports::CatalogServicePort;
use catalog_service::catalog::service::CatalogService;
use catalog_service::config::Config;
use catalog_service::config::StorageBackend;
use catalog_service::inbound::http::router::create_router;
use catalog_service::inbound::http::session::SessionCookie;
use catalog_service::repositories::InMemoryHomeServiceRepository;
use catalog_service::repositories::InMemoryUserRepository;
use catalog_service::repositories::PostgresHomeServiceRepository;
use catalog_service::repositories::PostgresUserRepository;
use catalog_service::seed;
use catalog_service::user::ports::AuthServicePort;
use catalog_service::user::service::AuthService;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_service=debug,auth=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "catalog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        storage = ?config.storage.backend,
        session_hours = config.session.expiration_hours,
        secure_cookie = config.session.secure_cookie,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(
        config.session.secret.as_bytes(),
        chrono::Duration::hours(config.session.expiration_hours),
    ));

    let (auth_service, catalog_service): (Arc<dyn AuthServicePort>, Arc<dyn CatalogServicePort>) =
        match config.storage.backend {
            StorageBackend::Memory => {
                tracing::info!(storage = "memory", "Using in-memory stores");
                (
                    Arc::new(AuthService::new(
                        Arc::new(InMemoryUserRepository::new()),
                        Arc::clone(&authenticator),
                    )),
                    Arc::new(CatalogService::new(Arc::new(
                        InMemoryHomeServiceRepository::new(),
                    ))),
                )
            }
            StorageBackend::Postgres => {
                let database_url = config
                    .storage
                    .database_url
                    .as_deref()
                    .context("storage.database_url is required for the postgres backend")?;

                let pg_pool = PgPoolOptions::new()
                    .max_connections(5)
                    .connect(database_url)
                    .await?;
                tracing::info!(
                    max_connections = 5,
                    database = "postgresql",
                    "Database connection pool created"
                );

                sqlx::migrate!("./migrations").run(&pg_pool).await?;
                tracing::info!(database = "postgresql", "Database migrations completed");

                (
                    Arc::new(AuthService::new(
                        Arc::new(PostgresUserRepository::new(pg_pool.clone())),
                        Arc::clone(&authenticator),
                    )),
                    Arc::new(CatalogService::new(Arc::new(
                        PostgresHomeServiceRepository::new(pg_pool),
                    ))),
                )
            }
        };

    seed::seed_accounts(auth_service.as_ref(), &config.seed).await?;
    if config.seed.demo_data {
        seed::seed_catalog(catalog_service.as_ref()).await?;
    }

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        auth_service,
        catalog_service,
        authenticator,
        SessionCookie::from_config(&config.session),
        config.server.cors_origin.as_deref(),
    );

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
