//! Error responses returned to callers.
//!
//! # Design Decisions
//! - Callers only ever see a fixed message; upstream detail stays in the logs
//! - Every failure uses the same shape: `{"error": "<message>"}` with a 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::upstream::UpstreamError;

pub const CREATE_REQUEST_FAILED: &str = "Error creating request";
pub const MAKE_REQUEST_FAILED: &str = "Error making request to API";
pub const READ_RESPONSE_FAILED: &str = "Error reading API response";

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// A request failure, rendered as a generic 500.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct RelayError(#[from] UpstreamError);

impl RelayError {
    /// The message exposed to the caller.
    pub fn public_message(&self) -> &'static str {
        match self.0 {
            UpstreamError::InvalidUrl { .. } | UpstreamError::InvalidApiKey(_) => {
                CREATE_REQUEST_FAILED
            }
            UpstreamError::Send(_) => MAKE_REQUEST_FAILED,
            UpstreamError::ReadBody(_) => READ_RESPONSE_FAILED,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let message = self.public_message();
        tracing::error!(error = %self.0, public_message = message, "Relay request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody { error: message }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn construction_error_renders_fixed_json_body() {
        let source = url::Url::parse("not a url").unwrap_err();
        let err = RelayError::from(UpstreamError::InvalidUrl {
            url: "not a url/fixtures".into(),
            source,
        });

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"Error creating request"}"#);
    }
}
