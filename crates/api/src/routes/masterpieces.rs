//! Route definitions for the `/masterpieces` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::masterpiece;
use crate::state::AppState;

/// Routes mounted at `/masterpieces`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create (multipart)
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(masterpiece::list).post(masterpiece::create))
        .route("/{id}", delete(masterpiece::delete))
}
