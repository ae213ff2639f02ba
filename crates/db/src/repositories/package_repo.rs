//! Repository for the `packages` table.

use crate::database::{Database, SqlValue};
use crate::models::package::{CreatePackage, Package};
use crate::types::DbId;

/// Column list for `packages` queries.
const PACKAGE_COLUMNS: &str = "id, title, price, description, features, image_url";

/// CRUD operations for service packages. Same lifecycle as masterpieces:
/// create, list, delete-by-id.
pub struct PackageRepo;

impl PackageRepo {
    /// List the full table in default scan order.
    pub async fn list_all(db: &Database) -> Result<Vec<Package>, sqlx::Error> {
        let query = format!("SELECT {PACKAGE_COLUMNS} FROM packages");
        db.fetch_all(&query, &[]).await
    }

    /// Insert a new package and return it with its assigned id.
    ///
    /// `features` is stored verbatim as comma-separated text.
    pub async fn create(db: &Database, input: &CreatePackage) -> Result<Package, sqlx::Error> {
        let id = db
            .insert(
                "INSERT INTO packages (title, price, description, features, image_url) \
                 VALUES (?, ?, ?, ?, ?)",
                &[
                    SqlValue::text(&input.title),
                    SqlValue::text(&input.price),
                    SqlValue::text(&input.description),
                    SqlValue::text(&input.features),
                    SqlValue::text(&input.image_url),
                ],
            )
            .await?;

        Ok(Package {
            id,
            title: input.title.clone(),
            price: input.price.clone(),
            description: input.description.clone(),
            features: input.features.clone(),
            image_url: input.image_url.clone(),
        })
    }

    /// Delete by id. Idempotent from the caller's perspective.
    pub async fn delete(db: &Database, id: DbId) -> Result<u64, sqlx::Error> {
        db.execute("DELETE FROM packages WHERE id = ?", &[SqlValue::int(id)])
            .await
    }
}
