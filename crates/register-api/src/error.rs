//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// API-level error with an HTTP status mapping.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl From<register_core::Error> for ApiError {
    fn from(err: register_core::Error) -> Self {
        match &err {
            register_core::Error::InvalidBackend(_) | register_core::Error::InvalidInput(_) => {
                ApiError::BadRequest(err.to_string())
            }
            register_core::Error::NotFound(msg) => ApiError::NotFound(msg.clone()),
            register_core::Error::CollaboratorUnavailable(_) => {
                ApiError::ServiceUnavailable(err.to_string())
            }
            _ => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_expected_statuses() {
        let err: ApiError = register_core::Error::InvalidBackend("lucene".to_string()).into();
        assert!(matches!(err, ApiError::BadRequest(_)));

        let err: ApiError =
            register_core::Error::CollaboratorUnavailable("directory".to_string()).into();
        assert!(matches!(err, ApiError::ServiceUnavailable(_)));

        let err: ApiError = register_core::Error::Serialization("oops".to_string()).into();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
