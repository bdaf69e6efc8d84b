//! Entry row model.

use marquee_core::entry::{MediaKind, NewEntry};
use marquee_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An entry row from the `entries` table.
///
/// Optional text columns serialize as `null` when unset.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: DbId,
    pub title: String,
    #[serde(rename = "type")]
    #[sqlx(try_from = "String")]
    pub kind: MediaKind,
    pub director: Option<String>,
    pub budget: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub year: Option<String>,
    pub poster_url: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entry {
    /// Materialize a new row outside the database (in-memory store).
    pub fn from_new(id: DbId, input: &NewEntry, now: Timestamp) -> Self {
        Self {
            id,
            title: input.title.clone(),
            kind: input.kind,
            director: input.director.clone(),
            budget: input.budget.clone(),
            location: input.location.clone(),
            duration: input.duration.clone(),
            year: input.year.clone(),
            poster_url: input.poster_url.clone(),
            notes: input.notes.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}
