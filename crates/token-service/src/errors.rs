use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the token issuance endpoint.
///
/// The `Display` strings are part of the endpoint contract: existing clients
/// pattern-match on the exact message text, so the wording must not change.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The caller omitted one or both required request fields.
    #[error("Missing userId or roomId")]
    InvalidRequest,

    /// The process was started without signing credentials. Every request
    /// fails identically until an operator fixes the configuration.
    #[error("Server configuration error: LiveKit API keys not set.")]
    CredentialsNotConfigured,

    /// The signer failed. The inner detail stays server-side; callers only
    /// see the generic message.
    #[error("Failed to generate token")]
    Signing(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for TokenError {
    fn into_response(self) -> Response {
        let status = match &self {
            TokenError::InvalidRequest => StatusCode::BAD_REQUEST,
            TokenError::CredentialsNotConfigured | TokenError::Signing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    async fn response_parts(err: TokenError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let body = serde_json::from_slice(&bytes).expect("body should be JSON");
        (status, body)
    }

    #[tokio::test]
    async fn test_invalid_request_maps_to_400() {
        let (status, body) = response_parts(TokenError::InvalidRequest).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "Missing userId or roomId" }));
    }

    #[tokio::test]
    async fn test_credentials_not_configured_maps_to_500() {
        let (status, body) = response_parts(TokenError::CredentialsNotConfigured).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({ "error": "Server configuration error: LiveKit API keys not set." })
        );
    }

    #[tokio::test]
    async fn test_signing_error_hides_internal_detail() {
        let (status, body) =
            response_parts(TokenError::Signing("hmac key rejected".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Failed to generate token" }));
        assert!(!body.to_string().contains("hmac key rejected"));
    }
}
