//! Route definitions for the `/entries` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::entries;
use crate::state::AppState;

/// Routes mounted at `/entries`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(entries::list).post(entries::create))
        .route(
            "/{id}",
            get(entries::get_by_id)
                .put(entries::update)
                .delete(entries::delete),
        )
}
