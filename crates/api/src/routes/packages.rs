//! Route definitions for the `/packages` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::package;
use crate::state::AppState;

/// Routes mounted at `/packages`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create (multipart)
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(package::list).post(package::create))
        .route("/{id}", delete(package::delete))
}
