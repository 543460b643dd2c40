//! REST endpoints for inbox scanning.

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::auth::bearer_token;
use crate::error::ApiError;
use crate::pipeline::{InboxScanner, ScanResult};
use crate::provider::ProviderConnector;

/// Shared state for scan routes.
#[derive(Clone)]
pub struct AppState {
    pub scanner: Arc<InboxScanner>,
    /// Builds a provider client from the caller's token.
    pub connector: Arc<dyn ProviderConnector>,
}

/// Build the router: `POST /scan-emails` and `GET /health`.
///
/// CORS is fully permissive; the endpoint is called from a browser front end.
pub fn scan_routes(state: AppState) -> Router {
    Router::new()
        .route("/scan-emails", post(scan_emails))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "zenbox"
    }))
}

/// POST /scan-emails
///
/// Scans the caller's inbox with the bearer token from `Authorization` and
/// returns `{emails, summary}`.
async fn scan_emails(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ScanResult>, ApiError> {
    info!("Scan request received");
    let token = bearer_token(&headers)?;

    let provider = state.connector.connect(token);
    let result = state.scanner.scan(provider.as_ref()).await?;

    info!(
        label = %state.scanner.options().label,
        emails = result.emails.len(),
        "Scan complete, sending results"
    );
    Ok(Json(result))
}
