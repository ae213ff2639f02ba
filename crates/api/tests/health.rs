//! Health endpoint test.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

/// The health check reports ok with a reachable database.
#[tokio::test]
async fn test_health_returns_ok() {
    let env = common::test_env().await;

    let response = get(env.app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
}
