use std::sync::Arc;

use decor_storage::AssetStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Constructed once at startup and cheaply cloneable (inner data is
/// behind `Arc` or is already reference-counted). There is no lazy
/// global: the store and the upload backend are built in `main` and
/// injected here.
#[derive(Clone)]
pub struct AppState {
    /// Database handle (SQLite or Postgres, fixed at startup).
    pub db: decor_db::Database,
    /// Upload backend (local disk or object storage, fixed at startup).
    pub assets: Arc<dyn AssetStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
