use axum::extract::FromRef;
use std::sync::Arc;

use crate::{dispatch::AiDispatcher, store::NoteStore};

#[derive(Clone)]
pub struct AiNotesState {
    pub store: Arc<dyn NoteStore>,
    pub dispatcher: AiDispatcher,
}

impl FromRef<AiNotesState> for Arc<dyn NoteStore> {
    fn from_ref(state: &AiNotesState) -> Arc<dyn NoteStore> {
        state.store.clone()
    }
}

impl FromRef<AiNotesState> for AiDispatcher {
    fn from_ref(state: &AiNotesState) -> AiDispatcher {
        state.dispatcher.clone()
    }
}
