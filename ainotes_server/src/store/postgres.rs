use async_trait::async_trait;
use chrono::Utc;
use diesel::{Connection, ExpressionMethods, PgConnection, QueryDsl, SelectableHelper};
use diesel_async::{AsyncPgConnection, RunQueryDsl, pooled_connection::AsyncDieselConnectionManager};
use diesel_migrations::MigrationHarness;
use tracing::info;

use crate::{
    MIGRATIONS,
    error::ApiError,
    models::notes::{NewNote, Note, NoteChanges},
    schema, utils,
};

use super::NoteStore;

#[derive(Clone)]
pub struct PgNoteStore {
    pool: utils::Pool,
}

impl PgNoteStore {
    pub fn new(pool: utils::Pool) -> Self {
        Self { pool }
    }

    /// Run pending migrations and build a connection pool.
    pub async fn connect(db_connection_url: &str) -> Result<Self, utils::BoxError> {
        // Migrations run on a plain connection before the async pool exists
        // so the table is ready before the first request.
        let mut conn = PgConnection::establish(db_connection_url)?;
        let applied = conn.run_pending_migrations(MIGRATIONS)?;
        for migration in applied {
            info!("applied migration {migration}");
        }

        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(db_connection_url);
        let pool = bb8::Pool::builder().build(manager).await?;
        Ok(Self::new(pool))
    }

    async fn conn(&self) -> Result<utils::Conn<'_>, ApiError> {
        self.pool.get().await.map_err(utils::internal_error)
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn create(&self, note: NewNote) -> Result<Note, ApiError> {
        let mut conn = self.conn().await?;
        diesel::insert_into(schema::notes::table)
            .values(&note)
            .returning(Note::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(utils::diesel_error)
    }

    async fn list(&self) -> Result<Vec<Note>, ApiError> {
        let mut conn = self.conn().await?;
        schema::notes::table
            .select(Note::as_select())
            .load(&mut conn)
            .await
            .map_err(utils::diesel_error)
    }

    async fn get(&self, id: i32) -> Result<Note, ApiError> {
        let mut conn = self.conn().await?;
        schema::notes::table
            .select(Note::as_select())
            .filter(schema::notes::id.eq(id))
            .first(&mut conn)
            .await
            .map_err(utils::diesel_error)
    }

    async fn update(&self, id: i32, changes: NoteChanges) -> Result<Note, ApiError> {
        let mut conn = self.conn().await?;
        diesel::update(schema::notes::table.filter(schema::notes::id.eq(id)))
            .set((&changes, schema::notes::created_at.eq(Utc::now())))
            .returning(Note::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(utils::diesel_error)
    }

    async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let mut conn = self.conn().await?;
        let deleted = diesel::delete(schema::notes::table.filter(schema::notes::id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(utils::diesel_error)?;
        if deleted == 0 {
            return Err(ApiError::note_not_found());
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, ApiError> {
        let mut conn = self.conn().await?;
        schema::notes::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(utils::diesel_error)
    }
}
