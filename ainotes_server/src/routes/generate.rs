use axum::{extract::State, response::Json};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    dispatch::AiDispatcher,
    error::ApiError,
    models::{
        generate::{GenerateRequest, GenerateResponse},
        state::AiNotesState,
    },
    utils::JsonBody,
};

pub fn router(state: AiNotesState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(generate))
        .with_state(state)
}

/// Enhance a note with the selected provider.
///
/// "Groq" returns the note unchanged. "Claude", "ChatGPT", "LLaMA",
/// "Google Gemini", and "DeepSeek" rewrite the note as Markdown through the
/// model API. Any other label returns the note with a notice that nothing
/// was enhanced.
#[utoipa::path(
    post,
    path = "/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Successfully generated content", body = GenerateResponse),
        (status = 400, description = "Note content is missing"),
        (status = 500, description = "Error when forwarding request to the model API")
    )
)]
#[axum::debug_handler]
pub async fn generate(
    State(dispatcher): State<AiDispatcher>,
    JsonBody(body): JsonBody<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let generated_content = dispatcher.enhance(body).await?;
    Ok(Json(GenerateResponse { generated_content }))
}
