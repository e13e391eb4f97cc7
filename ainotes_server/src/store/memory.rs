use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::{
    error::ApiError,
    models::notes::{NewNote, Note, NoteChanges},
};

use super::NoteStore;

#[derive(Default)]
struct Notes {
    last_id: i32,
    by_id: BTreeMap<i32, Note>,
}

/// In-process store. Ids are never reused, matching a database sequence.
#[derive(Default)]
pub struct MemoryNoteStore {
    notes: RwLock<Notes>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn create(&self, note: NewNote) -> Result<Note, ApiError> {
        let mut notes = self.notes.write().await;
        notes.last_id += 1;
        let NewNote {
            title,
            content,
            category,
        } = note;
        let note = Note {
            id: notes.last_id,
            title,
            content,
            category,
            created_at: Some(Utc::now()),
        };
        notes.by_id.insert(note.id, note.clone());
        Ok(note)
    }

    async fn list(&self) -> Result<Vec<Note>, ApiError> {
        Ok(self.notes.read().await.by_id.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Note, ApiError> {
        self.notes
            .read()
            .await
            .by_id
            .get(&id)
            .cloned()
            .ok_or_else(ApiError::note_not_found)
    }

    async fn update(&self, id: i32, changes: NoteChanges) -> Result<Note, ApiError> {
        let mut notes = self.notes.write().await;
        let note = notes
            .by_id
            .get_mut(&id)
            .ok_or_else(ApiError::note_not_found)?;
        changes.apply(note);
        note.created_at = Some(Utc::now());
        Ok(note.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), ApiError> {
        self.notes
            .write()
            .await
            .by_id
            .remove(&id)
            .map(|_| ())
            .ok_or_else(ApiError::note_not_found)
    }

    async fn count(&self) -> Result<i64, ApiError> {
        Ok(self.notes.read().await.by_id.len() as i64)
    }
}
