use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Multipart form accepted by the PDF endpoint.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct PdfUploadForm {
    /// PDF document to read.
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// Note category.
    pub category: String,
    /// Provider label.
    pub ai_category: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct PdfOutputResponse {
    pub output: String,
}
