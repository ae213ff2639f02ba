//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the real router (full middleware stack, local-disk upload
//! backend) via `tower::ServiceExt::oneshot`, without a TCP listener.
//! Each test gets its own scratch directory holding a SQLite database
//! file and an uploads directory.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use decor_api::config::ServerConfig;
use decor_api::router::build_app_router;
use decor_api::state::AppState;
use decor_db::Database;
use decor_storage::{AssetStore, LocalDiskStore};

/// Boundary used by [`multipart_body`].
pub const MULTIPART_BOUNDARY: &str = "test-boundary-4a1f9c";

/// Scratch environment backing a test app.
pub struct TestEnv {
    pub db: Database,
    pub uploads: PathBuf,
    _tmp: tempfile::TempDir,
}

/// Create an initialized environment: fresh SQLite database (schema
/// created, default admin seeded) and an empty uploads directory.
pub async fn test_env() -> TestEnv {
    let tmp = tempfile::tempdir().expect("tempdir should be created");
    let url = format!("sqlite://{}", tmp.path().join("test.sqlite").display());

    let db = Database::connect(&url).await.expect("connect should succeed");
    db.initialize().await.expect("initialize should succeed");

    TestEnv {
        db,
        uploads: tmp.path().join("uploads"),
        _tmp: tmp,
    }
}

impl TestEnv {
    /// Build the full application router, mirroring `main.rs`: same
    /// middleware stack, local-disk upload backend, `/uploads` serving.
    pub fn app(&self) -> Router {
        let config = test_config();
        let assets: Arc<dyn AssetStore> =
            Arc::new(LocalDiskStore::new(&self.uploads).expect("uploads dir should be created"));

        let state = AppState {
            db: self.db.clone(),
            assets,
            config: Arc::new(config.clone()),
        };

        build_app_router(state, &config, Some(&self.uploads))
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should complete")
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
    .expect("request should complete")
}

pub async fn post_multipart(app: Router, uri: &str, body: Vec<u8>) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("request should build"),
    )
    .await
    .expect("request should complete")
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should complete")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Build a `multipart/form-data` body from text fields plus an optional
/// `(field_name, filename, content_type, bytes)` file part.
pub fn multipart_body(
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &str, &[u8])>,
) -> Vec<u8> {
    let b = MULTIPART_BOUNDARY;
    let mut body: Vec<u8> = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{b}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((name, filename, content_type, data)) = file {
        body.extend_from_slice(
            format!(
                "--{b}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                 filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{b}--\r\n").as_bytes());
    body
}
