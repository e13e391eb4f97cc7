use bon::Builder;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Builder, Clone, Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct GenerateRequest {
    /// Note title. Only used for logging.
    pub title: Option<String>,
    /// Note content to enhance.
    pub note: Option<String>,
    /// Note category. Defaults to "General".
    pub category: Option<String>,
    /// Provider label selecting how the note is enhanced, e.g. "Groq",
    /// "LLaMA", or "DeepSeek". Defaults to "Write Yourself".
    pub ai_category: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct GenerateResponse {
    pub generated_content: String,
}
