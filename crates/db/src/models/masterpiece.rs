//! Portfolio entry model.

use serde::Serialize;
use sqlx::FromRow;

use crate::types::DbId;

/// A row from the `masterpieces` table: one portfolio photo with a title
/// and a display category.
///
/// `image_url` is either empty (no image was uploaded), a root-relative
/// `/uploads/...` path (local storage), or an absolute URL (object
/// storage). Resolution is the client's job.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Masterpiece {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub image_url: String,
}

/// Fields for a new portfolio entry. `image_url` is resolved by the
/// handler before the insert, never taken from the client directly.
#[derive(Debug, Clone)]
pub struct CreateMasterpiece {
    pub title: String,
    pub category: String,
    pub image_url: String,
}
