//! Test fixtures and common test helpers.
//!
//! Provides a small in-process map service so the map client and the refresh
//! flow can be exercised over real HTTP.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::spawn_map_server;
//!
//! #[tokio::test]
//! async fn test_fetches_vault() {
//!     let addr = spawn_map_server().await;
//!     let client = MapClient::new(Some(&format!("http://{}/map/v1/sites", addr)));
//!     // ... test logic
//! }
//! ```

use std::net::SocketAddr;

use axum::extract::Path;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;

// =============================================================================
// Map Service
// =============================================================================

/// Sites known to the fake map service:
///
/// - `vault` - only a full name
/// - `hall` - every field plus extras the client should ignore
/// - `echo` - name is the requested id, description is the `Accept` header
/// - `broken` - 500
/// - `garbled` - 200 with a body that is not JSON
/// - anything else - 404
async fn site(Path(room_id): Path<String>, headers: HeaderMap) -> Response {
    match room_id.as_str() {
        "vault" => Json(json!({"fullName": "The Vault"})).into_response(),
        "hall" => Json(json!({
            "name": "hall",
            "fullName": "Great Hall",
            "description": "A long hall lined with banners.",
            "doors": {"n": "A heavy oak door"},
        }))
        .into_response(),
        "echo" => {
            let accept = headers
                .get(header::ACCEPT)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            Json(json!({"name": room_id, "description": accept})).into_response()
        }
        "broken" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        "garbled" => (StatusCode::OK, "this is not json").into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Start the fake map service on an ephemeral port.
///
/// Sites are served under `/map/v1/sites/{room_id}`.
pub(crate) async fn spawn_map_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let router = Router::new().route("/map/v1/sites/{room_id}", get(site));

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

/// A local address nothing is listening on.
pub(crate) async fn unused_local_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
