//! Repository for the `masterpieces` table.

use crate::database::{Database, SqlValue};
use crate::models::masterpiece::{CreateMasterpiece, Masterpiece};
use crate::types::DbId;

/// Column list for `masterpieces` queries.
const MASTERPIECE_COLUMNS: &str = "id, title, category, image_url";

/// CRUD operations for portfolio entries. No update: editing is
/// delete-and-recreate.
pub struct MasterpieceRepo;

impl MasterpieceRepo {
    /// List the full table in default scan order. No pagination, no
    /// filtering; the landing page renders everything.
    pub async fn list_all(db: &Database) -> Result<Vec<Masterpiece>, sqlx::Error> {
        let query = format!("SELECT {MASTERPIECE_COLUMNS} FROM masterpieces");
        db.fetch_all(&query, &[]).await
    }

    /// Insert a new entry and return it with its assigned id.
    pub async fn create(
        db: &Database,
        input: &CreateMasterpiece,
    ) -> Result<Masterpiece, sqlx::Error> {
        let id = db
            .insert(
                "INSERT INTO masterpieces (title, category, image_url) VALUES (?, ?, ?)",
                &[
                    SqlValue::text(&input.title),
                    SqlValue::text(&input.category),
                    SqlValue::text(&input.image_url),
                ],
            )
            .await?;

        Ok(Masterpiece {
            id,
            title: input.title.clone(),
            category: input.category.clone(),
            image_url: input.image_url.clone(),
        })
    }

    /// Delete by id. Returns the number of rows removed; callers treat
    /// deletion as idempotent and do not distinguish 0 from 1.
    pub async fn delete(db: &Database, id: DbId) -> Result<u64, sqlx::Error> {
        db.execute(
            "DELETE FROM masterpieces WHERE id = ?",
            &[SqlValue::int(id)],
        )
        .await
    }
}
