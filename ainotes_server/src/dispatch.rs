//! Note enhancement through a text-generation backend.

use ainotes::GenerationRequest;
use std::fmt;
use tracing::{debug, info};

use crate::{
    client::ModelClient,
    error::ApiError,
    models::{
        generate::GenerateRequest,
        prompts::{ENHANCE_SYSTEM_PROMPT, EnhancePrompt, SystemPrompt},
    },
};

pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_PROVIDER: &str = "Write Yourself";
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";
pub const UNENHANCED_SUFFIX: &str = "\n\n(No AI enhancement applied)";
const TEMPERATURE: f32 = 0.7;

/// Provider label chosen by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Provider {
    Groq,
    Claude,
    ChatGpt,
    Llama,
    GoogleGemini,
    DeepSeek,
    Other(String),
}

impl From<&str> for Provider {
    fn from(label: &str) -> Self {
        match label {
            "Groq" => Self::Groq,
            "Claude" => Self::Claude,
            "ChatGPT" => Self::ChatGpt,
            "LLaMA" => Self::Llama,
            "Google Gemini" => Self::GoogleGemini,
            "DeepSeek" => Self::DeepSeek,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Groq => "Groq",
            Self::Claude => "Claude",
            Self::ChatGpt => "ChatGPT",
            Self::Llama => "LLaMA",
            Self::GoogleGemini => "Google Gemini",
            Self::DeepSeek => "DeepSeek",
            Self::Other(label) => label,
        };
        write!(f, "{label}")
    }
}

impl Provider {
    /// Model to request from the generation backend. `None` means the
    /// provider never calls out.
    pub fn model(&self) -> Option<&'static str> {
        match self {
            Self::DeepSeek => Some("deepseek-r1-distill-llama-70b"),
            Self::Llama => Some("llama3-70b-8192"),
            Self::GoogleGemini => Some("gemma2-9b-it"),
            Self::Claude | Self::ChatGpt => Some(DEFAULT_MODEL),
            Self::Groq | Self::Other(_) => None,
        }
    }
}

#[derive(Clone)]
pub struct AiDispatcher {
    model_client: ModelClient,
}

impl AiDispatcher {
    pub fn new(model_client: ModelClient) -> Self {
        Self { model_client }
    }

    /// Enhance a note's content according to its provider label.
    pub async fn enhance(&self, request: GenerateRequest) -> Result<String, ApiError> {
        let GenerateRequest {
            title,
            note,
            category,
            ai_category,
        } = request;
        let content = note
            .filter(|note| !note.is_empty())
            .ok_or_else(|| ApiError::validation("Note content is required"))?;
        let category = category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        let provider = Provider::from(ai_category.as_deref().unwrap_or(DEFAULT_PROVIDER));
        debug!(
            "enhancing note (title={:?} category={category}) with {provider}",
            title.as_deref().unwrap_or_default()
        );

        if provider == Provider::Groq {
            return Ok(content);
        }
        let Some(model) = provider.model() else {
            return Ok(format!("{content}{UNENHANCED_SUFFIX}"));
        };

        let prompt = EnhancePrompt {
            category: &category,
            content: &content,
        };
        let generation_request = GenerationRequest::builder()
            .model(model)
            .messages(prompt.to_messages(ENHANCE_SYSTEM_PROMPT))
            .temperature(TEMPERATURE)
            .build();
        let generated = self.model_client.generate(generation_request).await?;
        info!("{provider} ({model}) enhanced note");
        Ok(generated)
    }
}
