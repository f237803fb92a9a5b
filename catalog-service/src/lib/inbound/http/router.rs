use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::check_session::check_session;
use super::handlers::create_service::create_service;
use super::handlers::dashboard_stats::dashboard_stats;
use super::handlers::delete_service::delete_service;
use super::handlers::docs::api_docs;
use super::handlers::get_service::get_service;
use super::handlers::health::health;
use super::handlers::list_services::list_services;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::not_found;
use super::handlers::register::register;
use super::handlers::update_service::update_service;
use super::middleware::authenticate as auth_middleware;
use super::session::SessionCookie;
use crate::domain::catalog::ports::CatalogServicePort;
use crate::domain::user::ports::AuthServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub catalog_service: Arc<dyn CatalogServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub session_cookie: SessionCookie,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    catalog_service: Arc<dyn CatalogServicePort>,
    authenticator: Arc<Authenticator>,
    session_cookie: SessionCookie,
    cors_origin: Option<&str>,
) -> Router {
    let state = AppState {
        auth_service,
        catalog_service,
        authenticator,
        session_cookie,
    };

    let public_routes = Router::new()
        .route("/api/health", get(health))
        .route("/api/docs", get(api_docs))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/register", post(register))
        .route("/api/services", get(list_services))
        .route("/api/services/:service_id", get(get_service));

    let protected_routes = Router::new()
        .route("/api/auth/check", get(check_session))
        .route("/api/services", post(create_service))
        .route(
            "/api/services/:service_id",
            put(update_service).delete(delete_service),
        )
        .route("/api/dashboard/stats", get(dashboard_stats))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span: they carry session tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(not_found)
        .layer(trace_layer)
        .layer(cors_layer(cors_origin))
        .with_state(state)
}

/// Credentialed CORS for a configured origin, permissive otherwise.
fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let Some(origin) = origin else {
        return CorsLayer::permissive();
    };

    match origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_credentials(true)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        Err(e) => {
            tracing::warn!(origin = %origin, error = %e, "Ignoring unparsable CORS origin");
            CorsLayer::permissive()
        }
    }
}
