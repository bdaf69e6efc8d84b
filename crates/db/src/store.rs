//! The entry store seam used by the HTTP service.
//!
//! Absence is reported through `Option` / `bool`; `Err` is reserved for
//! infrastructure failures (connection loss, constraint violations).

use std::collections::BTreeMap;

use async_trait::async_trait;
use marquee_core::entry::{EntryChanges, NewEntry};
use marquee_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::entry::Entry;
use crate::repositories::EntryRepo;
use crate::DbPool;

/// Durable storage for media entries.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Insert a new entry and return it with its assigned id.
    async fn create(&self, input: &NewEntry) -> Result<Entry, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Entry>, sqlx::Error>;

    /// One window of entries ordered by descending id, plus the total count.
    async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<Entry>, i64), sqlx::Error>;

    /// Apply the supplied fields. `None` if the id does not exist.
    async fn update(&self, id: DbId, input: &EntryChanges) -> Result<Option<Entry>, sqlx::Error>;

    /// Hard delete. `false` if the id does not exist.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    async fn health_check(&self) -> Result<(), sqlx::Error>;
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

/// [`EntryStore`] backed by PostgreSQL through [`EntryRepo`].
#[derive(Clone)]
pub struct PgEntryStore {
    pool: DbPool,
}

impl PgEntryStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl EntryStore for PgEntryStore {
    async fn create(&self, input: &NewEntry) -> Result<Entry, sqlx::Error> {
        EntryRepo::create(&self.pool, input).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Entry>, sqlx::Error> {
        EntryRepo::find_by_id(&self.pool, id).await
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<Entry>, i64), sqlx::Error> {
        tokio::try_join!(
            EntryRepo::list(&self.pool, offset, limit),
            EntryRepo::count(&self.pool),
        )
    }

    async fn update(&self, id: DbId, input: &EntryChanges) -> Result<Option<Entry>, sqlx::Error> {
        EntryRepo::update(&self.pool, id, input).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        EntryRepo::delete(&self.pool, id).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// Process-local [`EntryStore`]. Contents are lost on restart.
///
/// Ids are assigned from a monotonically increasing counter and are never
/// reused, matching `BIGSERIAL` semantics.
#[derive(Default)]
pub struct MemoryEntryStore {
    inner: RwLock<MemoryRows>,
}

#[derive(Default)]
struct MemoryRows {
    last_id: DbId,
    rows: BTreeMap<DbId, Entry>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn create(&self, input: &NewEntry) -> Result<Entry, sqlx::Error> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let entry = Entry::from_new(inner.last_id, input, chrono::Utc::now());
        inner.rows.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Entry>, sqlx::Error> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<Entry>, i64), sqlx::Error> {
        let inner = self.inner.read().await;
        let items = inner
            .rows
            .values()
            .rev()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect();
        Ok((items, inner.rows.len() as i64))
    }

    async fn update(&self, id: DbId, input: &EntryChanges) -> Result<Option<Entry>, sqlx::Error> {
        let mut inner = self.inner.write().await;
        let Some(entry) = inner.rows.get_mut(&id) else {
            return Ok(None);
        };

        fn apply(target: &mut Option<String>, value: &Option<String>) {
            if let Some(value) = value {
                *target = Some(value.clone());
            }
        }

        if let Some(title) = &input.title {
            entry.title = title.clone();
        }
        if let Some(kind) = input.kind {
            entry.kind = kind;
        }
        apply(&mut entry.director, &input.director);
        apply(&mut entry.budget, &input.budget);
        apply(&mut entry.location, &input.location);
        apply(&mut entry.duration, &input.duration);
        apply(&mut entry.year, &input.year);
        apply(&mut entry.poster_url, &input.poster_url);
        apply(&mut entry.notes, &input.notes);
        entry.updated_at = chrono::Utc::now();

        Ok(Some(entry.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
