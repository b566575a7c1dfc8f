use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sahayak::{ConfigError, UpstreamError};
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// This enum encapsulates the different kinds of errors that can occur
/// within the server, allowing them to be converted into appropriate HTTP
/// responses.
pub enum AppError {
    /// Fatal configuration problems surfacing at request time.
    Config(ConfigError),
    /// The upstream model API call failed.
    Upstream(UpstreamError),
    /// A coordination payload failed validation.
    Validation(Vec<String>),
    /// A referenced volunteer or opportunity does not exist.
    NotFound(String),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        AppError::Upstream(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, body) = match self {
            AppError::Config(err) => {
                error!("ConfigError: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Server is not configured correctly." }),
                )
            }
            // The caller gets a generic message; the details stay in the log.
            AppError::Upstream(err) => {
                error!("UpstreamError: {err:?}");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "error": "The assistant is temporarily unavailable. Please try again." }),
                )
            }
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "errors": errors }),
            ),
            AppError::NotFound(what) => {
                (StatusCode::NOT_FOUND, json!({ "error": format!("{what} not found") }))
            }
        };

        (status_code, Json(body)).into_response()
    }
}
