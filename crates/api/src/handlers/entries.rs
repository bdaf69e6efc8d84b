//! Handlers for the `/entries` resource.
//!
//! Every response is wrapped in the `{success, message, data|error}`
//! envelope; decoding failures are routed through [`AppError`] as well.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::pagination::Page;
use marquee_core::types::DbId;
use marquee_core::validation::{validate_entry_changes, validate_new_entry};
use marquee_db::models::entry::Entry;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult, EntryOp, StoreResultExt};
use crate::query::PaginationParams;
use crate::response::Envelope;
use crate::state::AppState;

type JsonObject = Result<Json<Map<String, Value>>, JsonRejection>;
type EntryId = Result<Path<DbId>, PathRejection>;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Entry", id })
}

/// Load an entry or fail with 404.
async fn require_entry(state: &AppState, id: DbId, op: EntryOp) -> AppResult<Entry> {
    state
        .store
        .find_by_id(id)
        .await
        .during(op)?
        .ok_or_else(|| not_found(id))
}

/// POST /api/entries
pub async fn create(
    State(state): State<AppState>,
    payload: JsonObject,
) -> AppResult<(StatusCode, Json<Envelope<Entry>>)> {
    let Json(payload) = payload?;
    let input = validate_new_entry(&payload).map_err(CoreError::from)?;

    let entry = state.store.create(&input).await.during(EntryOp::Create)?;
    tracing::info!(id = entry.id, kind = %entry.kind, "Entry created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(entry, "Entry created successfully")),
    ))
}

/// GET /api/entries?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<Json<Envelope<Page<Entry>>>> {
    let Query(params) = params?;
    let request = params.resolve();

    let (items, total) = state
        .store
        .list(request.skip(), request.limit)
        .await
        .during(EntryOp::List)?;
    let page = Page::new(request, items, total);
    tracing::debug!(
        page = page.page,
        limit = page.limit,
        returned = page.items.len(),
        total,
        "Entries listed"
    );

    Ok(Json(Envelope::ok(page, "Entries fetched successfully")))
}

/// GET /api/entries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: EntryId,
) -> AppResult<Json<Envelope<Entry>>> {
    let Path(id) = id?;
    let entry = require_entry(&state, id, EntryOp::Get).await?;
    Ok(Json(Envelope::ok(entry, "Entry fetched successfully")))
}

/// PUT /api/entries/{id}
///
/// The existence check runs before validation, so an unknown id is a 404
/// even when the payload is also invalid.
pub async fn update(
    State(state): State<AppState>,
    id: EntryId,
    payload: JsonObject,
) -> AppResult<Json<Envelope<Entry>>> {
    let Path(id) = id?;
    require_entry(&state, id, EntryOp::Update).await?;

    let Json(payload) = payload?;
    let changes = validate_entry_changes(&payload).map_err(CoreError::from)?;

    let entry = state
        .store
        .update(id, &changes)
        .await
        .during(EntryOp::Update)?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Entry updated");

    Ok(Json(Envelope::ok(entry, "Entry updated successfully")))
}

/// DELETE /api/entries/{id}
pub async fn delete(State(state): State<AppState>, id: EntryId) -> AppResult<Json<Envelope<()>>> {
    let Path(id) = id?;
    require_entry(&state, id, EntryOp::Delete).await?;

    let deleted = state.store.delete(id).await.during(EntryOp::Delete)?;
    if !deleted {
        return Err(not_found(id));
    }
    tracing::info!(id, "Entry deleted");

    Ok(Json(Envelope::empty("Entry deleted successfully")))
}
