//! Repository for the `entries` table.

use marquee_core::entry::{EntryChanges, NewEntry};
use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::entry::Entry;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, kind, director, budget, location, duration, year, \
                       poster_url, notes, created_at, updated_at";

/// Provides CRUD operations for media entries.
pub struct EntryRepo;

impl EntryRepo {
    /// Insert a new entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewEntry) -> Result<Entry, sqlx::Error> {
        let query = format!(
            "INSERT INTO entries
                (title, kind, director, budget, location, duration, year, poster_url, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(&input.title)
            .bind(input.kind.as_str())
            .bind(&input.director)
            .bind(&input.budget)
            .bind(&input.location)
            .bind(&input.duration)
            .bind(&input.year)
            .bind(&input.poster_url)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Entry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entries WHERE id = $1");
        sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one window of entries, newest (highest id) first.
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> Result<Vec<Entry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entries ORDER BY id DESC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Entry>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of entries.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM entries")
            .fetch_one(pool)
            .await
    }

    /// Update an entry. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &EntryChanges,
    ) -> Result<Option<Entry>, sqlx::Error> {
        let query = format!(
            "UPDATE entries SET
                title = COALESCE($2, title),
                kind = COALESCE($3, kind),
                director = COALESCE($4, director),
                budget = COALESCE($5, budget),
                location = COALESCE($6, location),
                duration = COALESCE($7, duration),
                year = COALESCE($8, year),
                poster_url = COALESCE($9, poster_url),
                notes = COALESCE($10, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.kind.map(|k| k.as_str()))
            .bind(&input.director)
            .bind(&input.budget)
            .bind(&input.location)
            .bind(&input.duration)
            .bind(&input.year)
            .bind(&input.poster_url)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
