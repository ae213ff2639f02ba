//! Route definitions.

pub mod auth;
pub mod health;
pub mod masterpieces;
pub mod packages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// POST   /login                admin login (public)
///
/// GET    /masterpieces         list portfolio entries
/// POST   /masterpieces         create (multipart, optional image)
/// DELETE /masterpieces/{id}    delete by id (idempotent)
///
/// GET    /packages             list service packages
/// POST   /packages             create (multipart, optional image)
/// DELETE /packages/{id}        delete by id (idempotent)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/masterpieces", masterpieces::router())
        .nest("/packages", packages::router())
}
