//! HTTP-level integration tests for the masterpiece and package
//! endpoints: multipart creation (with and without image), listing,
//! idempotent deletion, and local upload serving.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, multipart_body, post_multipart};

// ---------------------------------------------------------------------------
// Masterpieces
// ---------------------------------------------------------------------------

/// Creating without an image stores an empty image_url and the row shows
/// up in the list.
#[tokio::test]
async fn test_create_masterpiece_without_image() {
    let env = common::test_env().await;

    let body = multipart_body(&[("title", "Floral Arch"), ("category", "Wedding")], None);
    let response = post_multipart(env.app(), "/api/masterpieces", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["title"], "Floral Arch");
    assert_eq!(created["category"], "Wedding");
    assert_eq!(created["image_url"], "");
    assert!(created["id"].is_number());

    let response = get(env.app(), "/api/masterpieces").await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    let items = list.as_array().expect("response body should be an array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], created["id"]);
    assert_eq!(items[0]["title"], "Floral Arch");
}

/// Creating with an image writes the file to the uploads directory,
/// persists a root-relative URL, and the file is served back.
#[tokio::test]
async fn test_create_masterpiece_with_image() {
    let env = common::test_env().await;

    let image_bytes = b"not really a jpeg, but bytes are bytes";
    let body = multipart_body(
        &[("title", "Balloon Wall"), ("category", "Birthday")],
        Some(("image", "wall.jpg", "image/jpeg", image_bytes)),
    );
    let response = post_multipart(env.app(), "/api/masterpieces", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let image_url = created["image_url"].as_str().expect("image_url is a string");
    assert!(image_url.starts_with("/uploads/"), "got: {image_url}");
    assert!(image_url.ends_with(".jpg"), "got: {image_url}");

    // The file landed in the configured uploads directory.
    let name = image_url.trim_start_matches("/uploads/");
    let on_disk = std::fs::read(env.uploads.join(name)).expect("uploaded file should exist");
    assert_eq!(on_disk, image_bytes);

    // And it is served back at its URL.
    let response = get(env.app(), image_url).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// After deletion the row disappears; deleting a nonexistent id still
/// acknowledges success.
#[tokio::test]
async fn test_delete_masterpiece_is_idempotent() {
    let env = common::test_env().await;

    let body = multipart_body(&[("title", "Stage Backdrop"), ("category", "Corporate")], None);
    let created = body_json(post_multipart(env.app(), "/api/masterpieces", body).await).await;
    let id = created["id"].as_i64().expect("id should be a number");

    let response = delete(env.app(), &format!("/api/masterpieces/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let list = body_json(get(env.app(), "/api/masterpieces").await).await;
    assert!(
        !list
            .as_array()
            .unwrap()
            .iter()
            .any(|item| item["id"].as_i64() == Some(id)),
        "deleted row must not be listed"
    );

    // No 404 distinction: the same acknowledgment for a missing row.
    let response = delete(env.app(), &format!("/api/masterpieces/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
}

// ---------------------------------------------------------------------------
// Packages
// ---------------------------------------------------------------------------

/// The full creation scenario: empty database, one multipart POST with
/// an image, response echoes every submitted field plus the assigned id
/// and resolved URL, and the list then contains exactly that row.
#[tokio::test]
async fn test_create_package_full_scenario() {
    let env = common::test_env().await;

    let body = multipart_body(
        &[
            ("title", "Gold"),
            ("price", "₹5000"),
            ("description", "d"),
            ("features", "Balloons,Lights"),
        ],
        Some(("image", "gold.png", "image/png", b"png bytes".as_slice())),
    );
    let response = post_multipart(env.app(), "/api/packages", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["title"], "Gold");
    assert_eq!(created["price"], "₹5000");
    assert_eq!(created["description"], "d");
    assert_eq!(created["features"], "Balloons,Lights");
    let image_url = created["image_url"].as_str().unwrap();
    assert!(image_url.starts_with("/uploads/"), "got: {image_url}");

    let list = body_json(get(env.app(), "/api/packages").await).await;
    let items = list.as_array().expect("response body should be an array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0], created);
}

/// Features text round-trips verbatim and splits client-side into the
/// submitted sequence.
#[tokio::test]
async fn test_package_features_round_trip() {
    let env = common::test_env().await;

    let body = multipart_body(
        &[
            ("title", "Silver"),
            ("price", "₹2500"),
            ("description", "Smaller venues"),
            ("features", "A, B, C"),
        ],
        None,
    );
    let created = body_json(post_multipart(env.app(), "/api/packages", body).await).await;
    assert_eq!(created["features"], "A, B, C");

    let list = body_json(get(env.app(), "/api/packages").await).await;
    let features_text = list[0]["features"].as_str().unwrap();
    let features: Vec<&str> = features_text.split(',').map(str::trim).collect();
    assert_eq!(features, vec!["A", "B", "C"]);
}

/// Package deletion is idempotent, like masterpieces.
#[tokio::test]
async fn test_delete_package_is_idempotent() {
    let env = common::test_env().await;

    let response = delete(env.app(), "/api/packages/424242").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
}

/// Missing text fields are accepted and stored as empty strings -- the
/// API does not validate field presence.
#[tokio::test]
async fn test_create_masterpiece_accepts_missing_fields() {
    let env = common::test_env().await;

    let body = multipart_body(&[("title", "")], None);
    let response = post_multipart(env.app(), "/api/masterpieces", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["title"], "");
    assert_eq!(created["category"], "");
}
