use serial_test::serial;

use ainotes_server::{
    error::ApiError,
    models::notes::{NewNote, NoteChanges},
    store::{NoteStore, PgNoteStore},
};

mod utils;

use utils::TestResult;

/// Connect to the test database, or `None` when `DATABASE_URL` doesn't name
/// one. Existing notes are cleared.
async fn test_store() -> Result<Option<PgNoteStore>, utils::TestError> {
    let Ok(db_connection_url) = dotenvy::var("DATABASE_URL") else {
        return Ok(None);
    };
    if !db_connection_url.ends_with("/test") {
        return Ok(None);
    }
    let store = PgNoteStore::connect(&db_connection_url).await?;
    for note in store.list().await? {
        store.delete(note.id).await?;
    }
    Ok(Some(store))
}

#[tokio::test]
#[serial]
async fn postgres_store_lifecycle() -> TestResult {
    let Some(store) = test_store().await? else {
        return Ok(());
    };

    let note = store
        .create(NewNote::new(
            Some("T".to_string()),
            Some("C".to_string()),
            Some("Cat".to_string()),
        )?)
        .await?;
    assert_eq!(store.count().await?, 1);
    assert_eq!(store.get(note.id).await?, note);
    assert!(note.created_at.is_some());

    let changes = NoteChanges::new(Some("T2".to_string()), None, None)?;
    let edited = store.update(note.id, changes).await?;
    assert_eq!(edited.title, "T2");
    assert_eq!(edited.content, "C");
    assert!(edited.created_at >= note.created_at);
    assert_eq!(store.list().await?, vec![edited]);

    store.delete(note.id).await?;
    assert!(matches!(
        store.get(note.id).await,
        Err(ApiError::NotFound(_))
    ));
    assert!(matches!(
        store.delete(note.id).await,
        Err(ApiError::NotFound(_))
    ));
    assert!(matches!(
        store.update(note.id, NoteChanges::default()).await,
        Err(ApiError::NotFound(_))
    ));
    assert_eq!(store.count().await?, 0);
    Ok(())
}
