use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::WallError;

impl WallError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WallError::Validation(_) => StatusCode::BAD_REQUEST,
            WallError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            WallError::Multipart(e) => e.status(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Every failure reaches the client as `{"error": "<message>"}`.
impl IntoResponse for WallError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            tracing::debug!(error = %self, status = %status, "Request rejected");
        } else {
            tracing::error!(error = %self, "Request failed");
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            WallError::Validation("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WallError::PayloadTooLarge("x".to_string()).status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            WallError::Storage("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            WallError::Io(std::io::Error::other("disk full")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_errors_map_to_4xx() {
        let client = [
            WallError::Validation("x".to_string()),
            WallError::PayloadTooLarge("x".to_string()),
        ];
        for err in client {
            assert!(err.is_client_error());
            assert!(err.status_code().is_client_error());
        }

        let server = WallError::Storage("x".to_string());
        assert!(!server.is_client_error());
        assert!(server.status_code().is_server_error());
    }

    #[test]
    fn test_validation_message_is_exposed_verbatim() {
        let err = WallError::Validation("Name is required".to_string());
        assert_eq!(err.to_string(), "Name is required");
    }
}
