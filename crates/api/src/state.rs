use std::sync::Arc;

use marquee_db::store::EntryStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Entry persistence (PostgreSQL or in-memory).
    pub store: Arc<dyn EntryStore>,
}
