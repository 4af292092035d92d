use sqlx::PgPool;
use uuid::Uuid;

use super::manager::DatabaseError;
use super::models::Note;

const NOTE_COLUMNS: &str = "id, user_id, heading, description, tag, created_at, updated_at";

/// Data access for the notes table
#[derive(Clone)]
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        user_id: Uuid,
        heading: &str,
        description: &str,
        tag: &str,
    ) -> Result<Note, DatabaseError> {
        let sql = format!(
            "INSERT INTO notes (id, user_id, heading, description, tag) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {NOTE_COLUMNS}"
        );

        let note = sqlx::query_as::<_, Note>(&sql)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(heading)
            .bind(description)
            .bind(tag)
            .fetch_one(&self.pool)
            .await?;

        Ok(note)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, DatabaseError> {
        let sql = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = $1");

        let note = sqlx::query_as::<_, Note>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(note)
    }

    pub async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Note>, DatabaseError> {
        let sql = format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE user_id = $1 ORDER BY created_at DESC"
        );

        let notes = sqlx::query_as::<_, Note>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(notes)
    }

    /// Partial note update; absent fields keep their stored values.
    /// Returns false when no note with that id exists.
    pub async fn update(
        &self,
        id: Uuid,
        heading: Option<&str>,
        description: Option<&str>,
        tag: Option<&str>,
    ) -> Result<bool, DatabaseError> {
        let result = sqlx::query(
            "UPDATE notes \
             SET heading = COALESCE($2, heading), \
                 description = COALESCE($3, description), \
                 tag = COALESCE($4, tag), \
                 updated_at = now() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(heading)
        .bind(description)
        .bind(tag)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
