//! Handlers for the `/api/packages` resource.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use decor_db::models::package::{CreatePackage, Package};
use decor_db::repositories::PackageRepo;
use decor_db::DbId;

use crate::error::{AppError, AppResult};
use crate::handlers::{read_file, read_text, store_image, DeleteAck, UploadedFile};
use crate::state::AppState;

/// GET /api/packages
///
/// Full unfiltered table contents in default scan order. `features`
/// comes back as the comma-separated text it was submitted with; the
/// client splits it for display.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Package>>> {
    let items = PackageRepo::list_all(&state.db).await?;
    Ok(Json(items))
}

/// POST /api/packages
///
/// Multipart form with `title`, `price`, `description`, and `features`
/// text fields plus an optional `image` file. `price` is free-form text
/// and `features` is stored verbatim; neither is validated.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Package>)> {
    let mut title = String::new();
    let mut price = String::new();
    let mut description = String::new();
    let mut features = String::new();
    let mut image: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" => title = read_text(field).await?,
            "price" => price = read_text(field).await?,
            "description" => description = read_text(field).await?,
            "features" => features = read_text(field).await?,
            "image" => image = Some(read_file(field).await?),
            _ => {}
        }
    }

    let image_url = store_image(&state, image).await?;

    let input = CreatePackage {
        title,
        price,
        description,
        features,
        image_url,
    };
    let row = PackageRepo::create(&state.db, &input).await?;

    tracing::info!(id = row.id, title = %row.title, "Package created");

    Ok((StatusCode::CREATED, Json(row)))
}

/// DELETE /api/packages/{id}
///
/// Idempotent: acknowledges success whether or not a row matched.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteAck>> {
    let deleted = PackageRepo::delete(&state.db, id).await?;

    tracing::info!(id, deleted, "Package delete requested");

    Ok(Json(DeleteAck { success: true }))
}
