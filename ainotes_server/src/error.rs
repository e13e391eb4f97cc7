use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use tracing::{debug, error};

pub const NOTE_NOT_FOUND: &str = "Note not found";

/// Every failure a handler can report. Converted to a JSON `{error}` body
/// with a fixed status code in one place.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("AI generation failed: {details}")]
    ExternalService { details: String },
    #[error("could not read PDF: {0}")]
    Extraction(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn note_not_found() -> Self {
        Self::NotFound(NOTE_NOT_FOUND.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ExternalService { .. } | Self::Extraction(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(message) | Self::NotFound(message) => {
                debug!("rejecting request ({status}): {message}");
                json!({ "error": message })
            }
            Self::ExternalService { details } => {
                error!("AI generation failed: {details}");
                json!({ "error": "AI generation failed", "details": details })
            }
            Self::Extraction(details) => {
                error!("PDF processing error: {details}");
                json!({ "error": "Could not read PDF" })
            }
            Self::Internal(details) => {
                error!("internal error: {details}");
                json!({ "error": "Internal server error" })
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

// Ids are always integers, so a path that doesn't parse can't name a note.
impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        Self::note_not_found()
    }
}
