//! Note persistence.
//!
//! Handlers receive the store as an `Arc<dyn NoteStore>` through router
//! state. [`PgNoteStore`] is the production backend; [`MemoryNoteStore`]
//! keeps notes in process for tests and database-less local runs.

use async_trait::async_trait;

use crate::{
    error::ApiError,
    models::notes::{NewNote, Note, NoteChanges},
};

mod memory;
mod postgres;

pub use memory::MemoryNoteStore;
pub use postgres::PgNoteStore;

#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Insert a note, assigning its id and timestamp.
    async fn create(&self, note: NewNote) -> Result<Note, ApiError>;

    /// All notes in storage order.
    async fn list(&self) -> Result<Vec<Note>, ApiError>;

    async fn get(&self, id: i32) -> Result<Note, ApiError>;

    /// Overwrite the supplied fields and refresh `created_at` to now.
    async fn update(&self, id: i32, changes: NoteChanges) -> Result<Note, ApiError>;

    async fn delete(&self, id: i32) -> Result<(), ApiError>;

    async fn count(&self) -> Result<i64, ApiError>;
}
