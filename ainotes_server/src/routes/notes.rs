use axum::{
    extract::{FromRequestParts, Path, State},
    http::request::Parts,
    response::{Json, Redirect},
};
use std::sync::Arc;
use tracing::info;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    error::ApiError,
    models::{
        notes::{
            AddNoteRequest, AddNoteResponse, EditNoteRequest, MessageResponse, NewNote, Note,
            NoteChanges,
        },
        state::AiNotesState,
    },
    store::NoteStore,
    utils::JsonBody,
};

pub fn router(state: AiNotesState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(add_note_info, add_note))
        .routes(routes!(list_notes))
        .routes(routes!(get_note_for_edit, edit_note))
        .routes(routes!(count_notes))
        .routes(routes!(delete_note))
        .routes(routes!(show_note))
        .with_state(state)
}

/// Note id taken from the request path.
pub struct NoteId(pub i32);

impl<S: Send + Sync> FromRequestParts<S> for NoteId {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}

pub async fn redirect_to_add_notes() -> Redirect {
    Redirect::to("/Addnotes")
}

/// Describe how to add notes.
#[utoipa::path(
    get,
    path = "/Addnotes",
    responses(
        (status = 200, description = "Usage message", body = MessageResponse)
    )
)]
#[axum::debug_handler]
pub async fn add_note_info() -> Json<MessageResponse> {
    Json(MessageResponse::new(
        "GET request received. This route is for POSTing notes.",
    ))
}

/// Add a note, or preview it without storing when `store` is `false`.
#[utoipa::path(
    post,
    path = "/Addnotes",
    request_body = AddNoteRequest,
    responses(
        (status = 200, description = "Successfully saved or previewed a note", body = AddNoteResponse),
        (status = 400, description = "Title, content, or category is missing")
    )
)]
#[axum::debug_handler]
pub async fn add_note(
    State(store): State<Arc<dyn NoteStore>>,
    JsonBody(body): JsonBody<AddNoteRequest>,
) -> Result<Json<AddNoteResponse>, ApiError> {
    let AddNoteRequest {
        title,
        content,
        category,
        store: persist,
    } = body;
    let new_note = NewNote::new(title, content, category)?;
    if !persist {
        return Ok(Json(AddNoteResponse::Preview { preview: new_note }));
    }
    let note = store.create(new_note).await?;
    info!("saved note {}", note.id);
    Ok(Json(AddNoteResponse::Saved {
        message: "Note saved".to_string(),
        note,
    }))
}

/// List all notes.
#[utoipa::path(
    post,
    path = "/Notes",
    responses(
        (status = 200, description = "Successfully listed notes", body = [Note])
    )
)]
#[axum::debug_handler]
pub async fn list_notes(
    State(store): State<Arc<dyn NoteStore>>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = store.list().await?;
    Ok(Json(notes))
}

/// Get a note to edit.
#[utoipa::path(
    get,
    path = "/edit/{id}",
    params(
        ("id" = i32, Path, description = "Database ID of the note"),
    ),
    responses(
        (status = 200, description = "Successfully got note", body = Note),
        (status = 404, description = "Note not found")
    )
)]
#[axum::debug_handler]
pub async fn get_note_for_edit(
    State(store): State<Arc<dyn NoteStore>>,
    NoteId(id): NoteId,
) -> Result<Json<Note>, ApiError> {
    let note = store.get(id).await?;
    Ok(Json(note))
}

/// Overwrite the supplied fields of a note. The note's `created_at` is
/// always reset to the time of the edit.
#[utoipa::path(
    post,
    path = "/edit/{id}",
    params(
        ("id" = i32, Path, description = "Database ID of the note"),
    ),
    request_body = EditNoteRequest,
    responses(
        (status = 200, description = "Successfully updated note", body = Note),
        (status = 400, description = "A supplied field is empty"),
        (status = 404, description = "Note not found")
    )
)]
#[axum::debug_handler]
pub async fn edit_note(
    State(store): State<Arc<dyn NoteStore>>,
    NoteId(id): NoteId,
    body: Result<JsonBody<EditNoteRequest>, ApiError>,
) -> Result<Json<Note>, ApiError> {
    // A missing note is reported before anything about the body.
    store.get(id).await?;
    let JsonBody(EditNoteRequest {
        title,
        content,
        category,
    }) = body?;
    let changes = NoteChanges::new(title, content, category)?;
    let note = store.update(id, changes).await?;
    info!("updated note {id}");
    Ok(Json(note))
}

/// Count stored notes.
#[utoipa::path(
    get,
    path = "/debug",
    responses(
        (status = 200, description = "Number of stored notes", body = String)
    )
)]
#[axum::debug_handler]
pub async fn count_notes(State(store): State<Arc<dyn NoteStore>>) -> Result<String, ApiError> {
    let count = store.count().await?;
    Ok(count.to_string())
}

/// Delete a note.
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    params(
        ("id" = i32, Path, description = "Database ID of the note"),
    ),
    responses(
        (status = 200, description = "Successfully deleted note", body = MessageResponse),
        (status = 404, description = "Note not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_note(
    State(store): State<Arc<dyn NoteStore>>,
    NoteId(id): NoteId,
) -> Result<Json<MessageResponse>, ApiError> {
    store.delete(id).await?;
    info!("deleted note {id}");
    Ok(Json(MessageResponse::new("Note deleted successfully")))
}

/// Get a note.
#[utoipa::path(
    get,
    path = "/show/{id}",
    params(
        ("id" = i32, Path, description = "Database ID of the note"),
    ),
    responses(
        (status = 200, description = "Successfully got note", body = Note),
        (status = 404, description = "Note not found")
    )
)]
#[axum::debug_handler]
pub async fn show_note(
    State(store): State<Arc<dyn NoteStore>>,
    NoteId(id): NoteId,
) -> Result<Json<Note>, ApiError> {
    let note = store.get(id).await?;
    Ok(Json(note))
}
