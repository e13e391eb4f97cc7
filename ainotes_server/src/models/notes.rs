use bon::Builder;
use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::ApiError, utils};

pub const MAX_TITLE_CHARS: usize = 150;
pub const MAX_CATEGORY_CHARS: usize = 50;

#[derive(Clone, Debug, Deserialize, PartialEq, Queryable, Selectable, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::notes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Note {
    /// Unique note ID.
    pub id: i32,
    /// Note title.
    pub title: String,
    /// Note content.
    pub content: String,
    /// Note category.
    pub category: String,
    /// Datetime the note was last written in ISO format.
    pub created_at: Option<DateTime<Utc>>,
}

/// A validated note that hasn't been stored yet. Doubles as the preview
/// returned when a caller asks not to store.
#[derive(Clone, Debug, Deserialize, Insertable, PartialEq, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::notes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub category: String,
}

impl NewNote {
    /// All three fields must be present and non-empty.
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        category: Option<String>,
    ) -> Result<Self, ApiError> {
        let (Some(title), Some(content), Some(category)) = (
            non_empty(title),
            non_empty(content),
            non_empty(category),
        ) else {
            return Err(ApiError::validation("Missing fields"));
        };
        check_title(&title)?;
        check_category(&category)?;
        Ok(Self {
            title,
            content,
            category,
        })
    }
}

/// Fields to overwrite on an existing note. `None` leaves a field as is.
#[derive(AsChangeset, Clone, Debug, Default, PartialEq)]
#[diesel(table_name = crate::schema::notes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NoteChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
}

impl NoteChanges {
    /// Supplied fields must be non-empty since stored notes never have
    /// empty fields.
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        category: Option<String>,
    ) -> Result<Self, ApiError> {
        for (name, value) in [
            ("title", &title),
            ("content", &content),
            ("category", &category),
        ] {
            if value.as_deref().is_some_and(str::is_empty) {
                return Err(ApiError::validation(format!("{name} must not be empty")));
            }
        }
        if let Some(title) = &title {
            check_title(title)?;
        }
        if let Some(category) = &category {
            check_category(category)?;
        }
        Ok(Self {
            title,
            content,
            category,
        })
    }

    pub fn apply(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
        if let Some(category) = self.category {
            note.category = category;
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

fn check_title(title: &str) -> Result<(), ApiError> {
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(ApiError::validation(format!(
            "title must be at most {MAX_TITLE_CHARS} characters"
        )));
    }
    Ok(())
}

fn check_category(category: &str) -> Result<(), ApiError> {
    if category.chars().count() > MAX_CATEGORY_CHARS {
        return Err(ApiError::validation(format!(
            "category must be at most {MAX_CATEGORY_CHARS} characters"
        )));
    }
    Ok(())
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AddNoteRequest {
    /// Note title.
    pub title: Option<String>,
    /// Note content.
    pub content: Option<String>,
    /// Note category.
    pub category: Option<String>,
    /// Whether to store the note or only preview it. Defaults to `true`.
    #[builder(default = utils::default_store())]
    #[serde(default = "utils::default_store")]
    pub store: bool,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(untagged)]
pub enum AddNoteResponse {
    Saved { message: String, note: Note },
    Preview { preview: NewNote },
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct EditNoteRequest {
    /// New note title.
    pub title: Option<String>,
    /// New note content.
    pub content: Option<String>,
    /// New note category.
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn new_note_requires_every_field() {
        assert!(NewNote::new(some("T"), some("C"), some("Cat")).is_ok());
        for (title, content, category) in [
            (None, some("C"), some("Cat")),
            (some("T"), some(""), some("Cat")),
            (some("T"), some("C"), some("")),
        ] {
            let err = NewNote::new(title, content, category).unwrap_err();
            assert_eq!(err.to_string(), "Missing fields");
        }
    }

    #[test]
    fn new_note_enforces_column_lengths() {
        let long_title = "t".repeat(MAX_TITLE_CHARS + 1);
        assert!(NewNote::new(Some(long_title), some("C"), some("Cat")).is_err());
        let long_category = "c".repeat(MAX_CATEGORY_CHARS + 1);
        assert!(NewNote::new(some("T"), some("C"), Some(long_category)).is_err());
        let max_title = "é".repeat(MAX_TITLE_CHARS);
        assert!(NewNote::new(Some(max_title), some("C"), some("Cat")).is_ok());
    }

    #[test]
    fn changes_only_touch_supplied_fields() {
        let mut note = Note {
            id: 1,
            title: "T".to_string(),
            content: "C".to_string(),
            category: "Cat".to_string(),
            created_at: None,
        };
        NoteChanges::new(None, some("C2"), None)
            .unwrap()
            .apply(&mut note);
        assert_eq!(note.title, "T");
        assert_eq!(note.content, "C2");
        assert_eq!(note.category, "Cat");
    }

    #[test]
    fn changes_reject_empty_fields() {
        let err = NoteChanges::new(some(""), None, None).unwrap_err();
        assert_eq!(err.to_string(), "title must not be empty");
    }

    #[test]
    fn whitespace_counts_as_content() {
        let note = NewNote::new(some("T"), some("   "), some("Cat")).unwrap();
        assert_eq!(note.content, "   ");
        let changes = NoteChanges::new(None, None, some(" ")).unwrap();
        assert_eq!(changes.category.as_deref(), Some(" "));
    }

    #[test]
    fn add_note_request_stores_by_default() {
        let request: AddNoteRequest =
            serde_json::from_str(r#"{"title": "T", "content": "C", "category": "Cat"}"#).unwrap();
        assert!(request.store);
    }
}
