use axum::{Router, routing::get};
use diesel_migrations::{EmbeddedMigrations, embed_migrations};
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::warn;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

mod client;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod schema;
pub mod store;
pub mod utils;

pub use client::ModelClient;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

#[derive(OpenApi)]
#[openapi(info(
    title = "AI Notes Server",
    description = "Store notes and enhance them with text-generation models"
))]
struct ApiDoc;

/// Build the server state from configuration: connect the note store and
/// the model API client.
pub async fn init(
    config: models::config::AiNotesConfig,
) -> Result<models::state::AiNotesState, utils::BoxError> {
    let models::config::AiNotesConfig {
        database_url,
        generation,
        ..
    } = config;

    let store: Arc<dyn store::NoteStore> =
        if database_url == models::config::MEMORY_DATABASE_URL {
            warn!("using the in-memory note store; notes are lost on exit");
            Arc::new(store::MemoryNoteStore::new())
        } else {
            Arc::new(store::PgNoteStore::connect(&database_url).await?)
        };
    let model_client = ModelClient::new(generation)?;

    Ok(models::state::AiNotesState {
        store,
        dispatcher: dispatch::AiDispatcher::new(model_client),
    })
}

/// All documented API routes.
pub fn router(state: models::state::AiNotesState) -> OpenApiRouter {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes::notes::router(state.clone()))
        .merge(routes::generate::router(state))
        .merge(routes::pdf::router())
}

/// The full application: API routes, the root redirect, and Swagger UI.
pub fn app(state: models::state::AiNotesState) -> Router {
    let (router, api) = router(state).split_for_parts();
    router
        .route("/", get(routes::notes::redirect_to_add_notes))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        )
}
