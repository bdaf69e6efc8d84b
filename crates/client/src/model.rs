//! Client-side entry representation and response normalization.
//!
//! Every entry the service returns goes through [`normalize_entry`], so the
//! rest of the client only ever sees [`MediaEntry`] with text `budget` /
//! `year` and a numeric `id`, whatever the wire shape was.

use marquee_core::display::format_budget;
use marquee_core::entry::MediaKind;
use marquee_core::text::{canonical_id, canonical_text};
use marquee_core::types::DbId;
use serde::Serialize;
use serde_json::Value;

use crate::error::ClientError;

/// Canonical client-side entry.
///
/// Free-text fields are always present (possibly empty). `poster_url` and
/// `notes` are `None` when the service did not return them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    pub id: DbId,
    pub title: String,
    pub kind: MediaKind,
    pub director: String,
    pub budget: String,
    pub location: String,
    pub duration: String,
    pub year: String,
    pub poster_url: Option<String>,
    pub notes: Option<String>,
}

impl MediaEntry {
    pub fn display_budget(&self) -> String {
        format_budget(&self.budget)
    }

    pub fn kind_label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub director: String,
    pub budget: String,
    pub location: String,
    pub duration: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of an update request. Only `Some` fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MediaKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&EntryDraft> for EntryPatch {
    fn from(draft: &EntryDraft) -> Self {
        Self {
            title: Some(draft.title.clone()),
            kind: Some(draft.kind),
            director: Some(draft.director.clone()),
            budget: Some(draft.budget.clone()),
            location: Some(draft.location.clone()),
            duration: Some(draft.duration.clone()),
            year: Some(draft.year.clone()),
            poster_url: draft.poster_url.clone(),
            notes: draft.notes.clone(),
        }
    }
}

/// One page of entries as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPage {
    pub items: Vec<MediaEntry>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub has_more: bool,
    pub message: String,
}

/// Result of a create or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
    pub item: MediaEntry,
    pub message: String,
}

/// Result of a delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deleted {
    pub message: String,
}

/// Pull the payload out of an envelope, tolerating `data.item`, `data`, or
/// an un-enveloped body.
pub fn unwrap_envelope(body: &Value) -> &Value {
    let data = match body.get("data") {
        Some(Value::Null) | None => body,
        Some(data) => data,
    };
    data.get("item").unwrap_or(data)
}

pub fn envelope_message(body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Normalize one wire entry into a [`MediaEntry`].
pub fn normalize_entry(value: &Value) -> Result<MediaEntry, ClientError> {
    let id = value
        .get("id")
        .and_then(canonical_id)
        .ok_or_else(|| ClientError::Malformed(format!("entry without a usable id: {value}")))?;

    let raw_kind = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| ClientError::Malformed(format!("entry {id} without a type")))?;
    let kind = MediaKind::coerce(raw_kind)
        .map_err(|e| ClientError::Malformed(format!("entry {id}: {e}")))?;

    let text = |key: &str| value.get(key).and_then(canonical_text).unwrap_or_default();
    let optional = |key: &str| value.get(key).and_then(canonical_text);

    Ok(MediaEntry {
        id,
        title: text("title"),
        kind,
        director: text("director"),
        budget: text("budget"),
        location: text("location"),
        duration: text("duration"),
        year: text("year"),
        poster_url: optional("posterUrl"),
        notes: optional("notes"),
    })
}

/// Normalize a list response body into an [`EntryPage`].
///
/// `page` and `limit` are the values that were requested; they stand in for
/// fields the response leaves out. A missing `total` reads as `0`.
pub fn normalize_page(body: &Value, page: u32, limit: u32) -> Result<EntryPage, ClientError> {
    let data = unwrap_envelope(body);
    let items = match data.get("items") {
        Some(Value::Array(items)) => items
            .iter()
            .map(normalize_entry)
            .collect::<Result<Vec<_>, _>>()?,
        _ => return Err(ClientError::Malformed("list response without items".into())),
    };

    let number = |key: &str, fallback: i64| data.get(key).and_then(canonical_id).unwrap_or(fallback);
    let limit = number("limit", i64::from(limit));
    let has_more = data
        .get("hasMore")
        .and_then(Value::as_bool)
        .unwrap_or(items.len() as i64 == limit);

    Ok(EntryPage {
        total: number("total", 0),
        page: number("page", i64::from(page)),
        limit,
        has_more,
        message: envelope_message(body),
        items,
    })
}
