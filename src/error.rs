use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failures while reading a model artifact at startup
///
/// Never surfaced to callers; the loader logs it and binds the placeholder.
#[derive(thiserror::Error, Debug)]
pub enum ModelLoadError {
    #[error("Failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to deserialize model artifact: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures of a demo client call to the recommendation service
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to call backend: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Template(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        tracing::error!(error = %message, "Request failed");

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_carries_raw_body() {
        let error = ClientError::Status {
            status: 503,
            body: "model warming up".to_string(),
        };
        assert_eq!(error.to_string(), "API returned 503: model warming up");
    }

    #[test]
    fn test_app_error_maps_to_internal_server_error() {
        let response = AppError::from(askama::Error::Fmt(std::fmt::Error)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
