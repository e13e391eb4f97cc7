//! Text extraction from uploaded PDFs.

use lopdf::Document;
use tracing::debug;

use crate::{error::ApiError, models::prompts::PdfNotesPrompt, utils};

/// Characters of the prompt kept by [`summarize`].
pub const SUMMARY_CHAR_BUDGET: usize = 400;

const SUMMARY_MARKER: &str = "[AI OUTPUT BASED ON PROMPT]";

/// Fields read from the upload form. Any of them may be missing.
#[derive(Debug, Default)]
pub struct PdfUpload {
    pub file_name: Option<String>,
    pub bytes: Option<Vec<u8>>,
    pub category: Option<String>,
    pub ai_category: Option<String>,
}

impl PdfUpload {
    /// Check the form, extract the document text, and summarize it.
    pub fn into_notes(self) -> Result<String, ApiError> {
        let Self {
            file_name,
            bytes,
            category,
            ai_category,
        } = self;
        let bytes = match (file_name, bytes) {
            (Some(file_name), Some(bytes)) if !file_name.is_empty() => bytes,
            _ => return Err(ApiError::validation("No file uploaded")),
        };
        let (Some(category), Some(ai_category)) = (
            category.filter(|category| !category.is_empty()),
            ai_category.filter(|ai_category| !ai_category.is_empty()),
        ) else {
            return Err(ApiError::validation("Missing fields"));
        };

        let text = extract_text(&bytes)?;
        let prompt = PdfNotesPrompt {
            category: &category,
            ai_category: &ai_category,
            text: &text,
        }
        .to_string();
        Ok(summarize(&prompt))
    }
}

/// Concatenate the text of every page in page order.
pub fn extract_text(bytes: &[u8]) -> Result<String, ApiError> {
    if !bytes.starts_with(b"%PDF") {
        return Err(ApiError::Extraction("missing %PDF header".to_string()));
    }
    let document =
        Document::load_mem(bytes).map_err(|err| ApiError::Extraction(err.to_string()))?;
    let pages = document.get_pages();
    debug!("extracting text from {} PDF page(s)", pages.len());

    let mut text = String::new();
    for page_number in pages.into_keys() {
        let page_text = document
            .extract_text(&[page_number])
            .map_err(|err| ApiError::Extraction(format!("page {page_number}: {err}")))?;
        text.push_str(&page_text);
    }
    Ok(text)
}

/// Local stand-in for a summarization model: keeps the start of the prompt.
pub fn summarize(prompt: &str) -> String {
    let prefix = utils::truncate_chars(prompt, SUMMARY_CHAR_BUDGET);
    format!("{SUMMARY_MARKER}\n\n{prefix}...")
}
