//! Admin credential model.

use sqlx::FromRow;

use crate::types::DbId;

/// A row from the `admins` table.
///
/// Passwords are stored in plaintext and compared exactly; this matches
/// the deployed behaviour and is documented as insecure in DESIGN.md.
/// Deliberately not `Serialize`: admin rows never leave the process.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub username: String,
    pub password: String,
}
