//! Translation of conversion failures into HTTP responses.
//!
//! Every error body has the shape `{"detail": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn, Level};
use ytconvert_core::ConvertError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request carried no usable URL.
    #[error("{0}")]
    InvalidInput(String),

    /// Resolution worked but nothing downloadable matched.
    #[error("{0}")]
    NoStreamAvailable(String),

    /// Resolution, selection or buffering failed.
    #[error("Error en la conversión: {0}")]
    ConversionFailed(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NoStreamAvailable(_) | ApiError::ConversionFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Caller mistakes are warnings; failures on our side are errors.
    pub fn log_level(&self) -> Level {
        match self {
            ApiError::InvalidInput(_) => Level::WARN,
            ApiError::NoStreamAvailable(_) | ApiError::ConversionFailed(_) => Level::ERROR,
        }
    }
}

impl From<ConvertError> for ApiError {
    fn from(e: ConvertError) -> Self {
        match e {
            ConvertError::MissingUrl => ApiError::InvalidInput(e.to_string()),
            ConvertError::NoAudioStream => ApiError::NoStreamAvailable(e.to_string()),
            ConvertError::Resolve(_) | ConvertError::Fetch(_) => {
                ApiError::ConversionFailed(e.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();
        if self.log_level() == Level::WARN {
            warn!(status = status.as_u16(), "Rejected: {}", detail);
        } else {
            error!(status = status.as_u16(), "Error: {}", detail);
        }
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
