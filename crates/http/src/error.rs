//! HTTP error mapping for the offers endpoint.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use offerscope_pool::PoolError;
use offerscope_types::wire::OfferDecodeError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Request-scoped failure of the offers endpoint.
///
/// Every failure turns into an HTTP status plus a small JSON error body;
/// offer data is never mixed into an error response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The offer pool could not serve a snapshot.
    #[error(transparent)]
    PoolUnavailable(#[from] PoolError),
    /// One held offer failed to decode, aborting the whole document.
    #[error("offer {offer_id} failed to render: {source}")]
    Render {
        offer_id: String,
        source: OfferDecodeError,
    },
}

impl ApiError {
    /// Creates a render error for the offer with `offer_id`.
    pub fn render(offer_id: impl Into<String>, source: OfferDecodeError) -> Self {
        Self::Render {
            offer_id: offer_id.into(),
            source,
        }
    }

    /// Stable machine-readable code carried in the error body.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::PoolUnavailable(_) => "offer_pool_unavailable",
            ApiError::Render { .. } => "offer_render_failed",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::PoolUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Render { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        error!(status = %status, code = self.code(), error = %self, "offers request failed");
        let body = json!({
            "error": self.code(),
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
