//! Repository for the `admins` table.
//!
//! There is no admin management surface: one row is seeded at first
//! startup and the only read path is the login lookup.

use crate::database::{Database, SqlValue};
use crate::models::admin::Admin;

/// Column list for `admins` queries.
const ADMIN_COLUMNS: &str = "id, username, password";

pub struct AdminRepo;

impl AdminRepo {
    /// Look up an admin by exact, case-sensitive username + password
    /// match. Returns `None` on any mismatch; the caller maps that to a
    /// generic 401 without distinguishing unknown user from wrong
    /// password.
    pub async fn find_by_credentials(
        db: &Database,
        username: &str,
        password: &str,
    ) -> Result<Option<Admin>, sqlx::Error> {
        let query =
            format!("SELECT {ADMIN_COLUMNS} FROM admins WHERE username = ? AND password = ?");
        db.fetch_optional(&query, &[SqlValue::text(username), SqlValue::text(password)])
            .await
    }

    /// Look up an admin by username only (the seed existence check).
    pub async fn find_by_username(
        db: &Database,
        username: &str,
    ) -> Result<Option<Admin>, sqlx::Error> {
        let query = format!("SELECT {ADMIN_COLUMNS} FROM admins WHERE username = ?");
        db.fetch_optional(&query, &[SqlValue::text(username)]).await
    }

    /// Insert an admin row, doing nothing if the username already exists.
    ///
    /// The `ON CONFLICT` guard makes the seed insert safe to race across
    /// concurrent first startups on both engines. Returns the number of
    /// rows actually inserted (0 or 1).
    pub async fn create(
        db: &Database,
        username: &str,
        password: &str,
    ) -> Result<u64, sqlx::Error> {
        db.execute(
            "INSERT INTO admins (username, password) VALUES (?, ?) \
             ON CONFLICT (username) DO NOTHING",
            &[SqlValue::text(username), SqlValue::text(password)],
        )
        .await
    }
}
