use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/api/health", "Health check"),
    ("GET", "/api/docs", "This endpoint listing"),
    ("POST", "/api/auth/login", "Log in and receive a session cookie"),
    ("POST", "/api/auth/logout", "Clear the session cookie"),
    ("POST", "/api/auth/register", "Register a user account"),
    ("GET", "/api/auth/check", "Current session (authenticated)"),
    ("GET", "/api/services", "List all services"),
    ("GET", "/api/services/:id", "Get one service"),
    ("POST", "/api/services", "Create a service (admin)"),
    ("PUT", "/api/services/:id", "Update a service (admin)"),
    ("DELETE", "/api/services/:id", "Delete a service (admin)"),
    ("GET", "/api/dashboard/stats", "Dashboard statistics (authenticated)"),
];

/// Public listing of the routes this server exposes.
pub async fn api_docs() -> ApiSuccess<ApiDocsResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        ApiDocsResponseData {
            name: "Home Services Catalog API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints: ENDPOINTS
                .iter()
                .map(|&(method, path, description)| EndpointDoc {
                    method: method.to_string(),
                    path: path.to_string(),
                    description: description.to_string(),
                })
                .collect(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiDocsResponseData {
    pub name: String,
    pub version: String,
    pub endpoints: Vec<EndpointDoc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointDoc {
    pub method: String,
    pub path: String,
    pub description: String,
}
