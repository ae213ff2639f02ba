//! Handlers for the `/api/masterpieces` resource.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use decor_db::models::masterpiece::{CreateMasterpiece, Masterpiece};
use decor_db::repositories::MasterpieceRepo;
use decor_db::DbId;

use crate::error::{AppError, AppResult};
use crate::handlers::{read_file, read_text, store_image, DeleteAck, UploadedFile};
use crate::state::AppState;

/// GET /api/masterpieces
///
/// Full unfiltered table contents in default scan order.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Masterpiece>>> {
    let items = MasterpieceRepo::list_all(&state.db).await?;
    Ok(Json(items))
}

/// POST /api/masterpieces
///
/// Multipart form with `title` and `category` text fields plus an
/// optional `image` file. A present image goes through the active upload
/// backend and its URL is persisted; otherwise `image_url` stays empty.
/// Text fields are stored as submitted -- there is no field validation.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Masterpiece>)> {
    let mut title = String::new();
    let mut category = String::new();
    let mut image: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" => title = read_text(field).await?,
            "category" => category = read_text(field).await?,
            "image" => image = Some(read_file(field).await?),
            _ => {}
        }
    }

    let image_url = store_image(&state, image).await?;

    let input = CreateMasterpiece {
        title,
        category,
        image_url,
    };
    let row = MasterpieceRepo::create(&state.db, &input).await?;

    tracing::info!(id = row.id, title = %row.title, "Masterpiece created");

    Ok((StatusCode::CREATED, Json(row)))
}

/// DELETE /api/masterpieces/{id}
///
/// Idempotent: acknowledges success whether or not a row matched.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteAck>> {
    let deleted = MasterpieceRepo::delete(&state.db, id).await?;

    tracing::info!(id, deleted, "Masterpiece delete requested");

    Ok(Json(DeleteAck { success: true }))
}
