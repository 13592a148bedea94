//! Static JSON passthrough for `GET /api/login`.
//!
//! Reads the configured document from disk on every request and returns the
//! bytes unchanged. The body is only checked to be JSON so the
//! `application/json` content type holds; nothing is transformed.

use std::path::Path;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::de::IgnoredAny;

use crate::state::AppState;

/// Errors produced while serving the API document.
#[derive(Debug, thiserror::Error)]
pub enum ApiFileError {
    #[error("api document not found: {0}")]
    NotFound(String),

    #[error("api document read failed: {0}")]
    Read(String),

    #[error("api document is not valid JSON: {0}")]
    InvalidJson(String),
}

impl ApiFileError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Read(_) | Self::InvalidJson(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiFileError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::NotFound(_) => "api document not found",
            Self::Read(_) | Self::InvalidJson(_) => "api document unavailable",
        };
        (status, body).into_response()
    }
}

/// Load `path` and confirm it parses as JSON.
pub(crate) async fn read_api_document(path: &Path) -> Result<String, ApiFileError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ApiFileError::NotFound(path.display().to_string())
        } else {
            ApiFileError::Read(e.to_string())
        }
    })?;
    serde_json::from_str::<IgnoredAny>(&raw).map_err(|e| ApiFileError::InvalidJson(e.to_string()))?;
    Ok(raw)
}

/// `GET /api/login`: return the API document verbatim.
pub async fn login_document(State(state): State<AppState>) -> Result<Response, ApiFileError> {
    let path = state.api_json_path();
    let raw = read_api_document(path).await.inspect_err(|e| {
        tracing::warn!(error = %e, path = %path.display(), "api document request failed");
    })?;
    Ok(([(header::CONTENT_TYPE, "application/json")], raw).into_response())
}
