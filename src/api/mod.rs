//! HTTP surface: the scan endpoint and a health check.

pub mod auth;
pub mod routes;

pub use routes::{AppState, scan_routes};

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::error::{ApiError, ProviderError, ScanError};

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingAuth | Self::MalformedAuth => StatusCode::UNAUTHORIZED,
            Self::Scan(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body.
    pub fn client_message(&self) -> String {
        match self {
            Self::MissingAuth | Self::MalformedAuth => self.to_string(),
            Self::Scan(ScanError::Provider(e @ ProviderError::Api { .. })) => {
                format!("Gmail API Error: {e}")
            }
            Self::Scan(e) => format!("An error occurred: {e}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Scan request failed");
        }
        (
            status,
            Json(serde_json::json!({ "error": self.client_message() })),
        )
            .into_response()
    }
}
