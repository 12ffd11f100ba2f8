use crate::cors::cors_layer;
use crate::error::ApiError;
use axum::body::Body;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use ytconvert_core::converter::AUDIO_MIME_TYPE;
use ytconvert_core::Converter;

const HEALTH_MESSAGE: &str = "Backend funcionando correctamente";

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    converter: Converter,
    allowed_origins: Arc<[String]>,
}

impl AppState {
    pub fn new(converter: Converter) -> Self {
        Self {
            converter,
            allowed_origins: Arc::from(Vec::new()),
        }
    }

    /// Restrict CORS to these origins instead of mirroring any origin.
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = Arc::from(origins);
        self
    }
}

#[derive(Debug, Deserialize)]
pub struct ConversionRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.allowed_origins);

    Router::new()
        .route("/health", get(health))
        .route("/convert", post(convert))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: HEALTH_MESSAGE,
    })
}

async fn convert(
    State(state): State<AppState>,
    payload: Result<Json<ConversionRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))?;
    let url = request.url.unwrap_or_default();

    let audio = state.converter.convert(&url).await?;

    // Titles may keep non-ASCII letters; header values accept them as opaque bytes.
    let disposition = HeaderValue::from_bytes(audio.content_disposition().as_bytes())
        .map_err(|e| ApiError::ConversionFailed(e.to_string()))?;

    Ok((
        [
            (CONTENT_TYPE, HeaderValue::from_static(AUDIO_MIME_TYPE)),
            (CONTENT_DISPOSITION, disposition),
        ],
        Body::from(audio.data),
    )
        .into_response())
}
