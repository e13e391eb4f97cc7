use axum::{
    extract::{
        DefaultBodyLimit, Multipart,
        multipart::{MultipartError, MultipartRejection},
    },
    response::Json,
};
use tokio::task::JoinError;
use tracing::debug;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    error::ApiError,
    extract::PdfUpload,
    models::pdf::{PdfOutputResponse, PdfUploadForm},
};

/// Largest accepted upload.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

pub fn router() -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(generate_pdf))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

fn multipart_error(err: MultipartError) -> ApiError {
    ApiError::validation(err.body_text())
}

// A panic while parsing still means the PDF couldn't be read.
fn extraction_task_error(err: JoinError) -> ApiError {
    ApiError::Extraction(format!("extraction task failed: {err}"))
}

/// Read a PDF and turn its text into notes.
#[utoipa::path(
    post,
    path = "/generate-pdf",
    request_body(content = PdfUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully read the PDF", body = PdfOutputResponse),
        (status = 400, description = "File, category, or provider label is missing"),
        (status = 500, description = "The file couldn't be read as a PDF")
    )
)]
#[axum::debug_handler]
pub async fn generate_pdf(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PdfOutputResponse>, ApiError> {
    let mut multipart = multipart.map_err(|_| ApiError::validation("No file uploaded"))?;
    let mut upload = PdfUpload::default();
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                upload.file_name = field.file_name().map(str::to_string);
                upload.bytes = Some(field.bytes().await.map_err(multipart_error)?.to_vec());
            }
            Some("category") => {
                upload.category = Some(field.text().await.map_err(multipart_error)?);
            }
            Some("ai_category") => {
                upload.ai_category = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => debug!("ignoring multipart field {name:?}"),
        }
    }

    // lopdf parsing is blocking.
    let output = tokio::task::spawn_blocking(move || upload.into_notes())
        .await
        .map_err(extraction_task_error)??;
    Ok(Json(PdfOutputResponse { output }))
}
