//! HTTP transport for voting-server.
//!
//! Translates requests into action descriptors, dispatches them on the
//! [`Store`], and answers with the resulting state.
//!
//! | Route          | Action                                  |
//! |----------------|-----------------------------------------|
//! | `GET /state`   | none, returns the current state         |
//! | `POST /action` | the JSON action descriptor in the body  |
//! | `POST /next`   | `NEXT`                                  |
//! | `POST /vote`   | `VOTE` with `{"entry": ...}` from body  |
//! | `GET /health`  | none, returns [`HealthStatus`]          |

pub mod health;

use crate::store::Store;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use voting_types::{Action, AppState, Entry};

pub use health::HealthStatus;

/// Build the HTTP router with all endpoints.
pub fn build_router(store: Arc<Store>) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/state", get(state_handler))
        .route("/action", post(action_handler))
        .route("/next", post(next_handler))
        .route("/vote", post(vote_handler))
        .layer(Extension(store))
}

/// Error body for rejected requests.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Human-readable reason.
    pub error: String,
}

/// Body of `POST /vote`.
#[derive(Debug, Clone, Deserialize)]
pub struct VoteRequest {
    /// The chosen contestant.
    pub entry: Entry,
}

async fn state_handler(Extension(store): Extension<Arc<Store>>) -> Json<Arc<AppState>> {
    Json(store.state())
}

async fn action_handler(
    Extension(store): Extension<Arc<Store>>,
    body: String,
) -> Result<Json<Arc<AppState>>, (StatusCode, Json<ErrorBody>)> {
    let action = Action::from_json(&body).map_err(|e| {
        tracing::warn!("Rejected action body: {}", e);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(Json(store.dispatch(&action)))
}

async fn next_handler(Extension(store): Extension<Arc<Store>>) -> Json<Arc<AppState>> {
    Json(store.dispatch(&Action::Next))
}

async fn vote_handler(
    Extension(store): Extension<Arc<Store>>,
    Json(request): Json<VoteRequest>,
) -> Json<Arc<AppState>> {
    Json(store.dispatch(&Action::Vote {
        entry: request.entry,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::atomic::Ordering;
    use tower::util::ServiceExt;

    fn test_store() -> Arc<Store> {
        Arc::new(Store::new())
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let app = build_router(test_store());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["phase"], "empty");
    }

    #[tokio::test]
    async fn state_endpoint_returns_current_state() {
        let store = test_store();
        store.dispatch(&Action::set_entries(["X", "28DL"]));
        let app = build_router(store);

        let response = app
            .oneshot(Request::builder().uri("/state").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({"entries": ["X", "28DL"]}));
    }

    #[tokio::test]
    async fn action_endpoint_dispatches() {
        let store = test_store();
        store.dispatch(&Action::set_entries(["X", "28DL", "Sunshine"]));
        let app = build_router(store.clone());

        let response = app
            .oneshot(post_json("/action", r#"{"type": "NEXT"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "entries": ["Sunshine"],
                "vote": {"round": 1, "pair": ["X", "28DL"]}
            })
        );
        assert!(store.state().vote.is_some());
    }

    #[tokio::test]
    async fn unknown_action_type_is_noop() {
        let store = test_store();
        store.dispatch(&Action::set_entries(["X"]));
        let app = build_router(store);

        let response = app
            .oneshot(post_json("/action", r#"{"type": "RESTART"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({"entries": ["X"]}));
    }

    #[tokio::test]
    async fn malformed_action_is_bad_request() {
        let app = build_router(test_store());

        let response = app
            .oneshot(post_json("/action", r#"{"entry": "X"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().starts_with("deserialization failed"));
    }

    #[tokio::test]
    async fn vote_without_entry_field_is_rejected() {
        let store = test_store();
        store.dispatch(&Action::set_entries(["X", "28DL"]));
        store.dispatch(&Action::Next);
        let before = store.state();

        let app = build_router(store.clone());
        let response = app
            .oneshot(post_json("/vote", r#"{"choice": "X"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(Arc::ptr_eq(&store.state(), &before));
        assert_eq!(store.metrics().dispatched_total.load(Ordering::Relaxed), 2);
    }

    #[tokio::test]
    async fn vote_with_invalid_json_is_bad_request() {
        let store = test_store();
        store.dispatch(&Action::set_entries(["X", "28DL"]));
        store.dispatch(&Action::Next);
        let before = store.state();

        let app = build_router(store.clone());
        let response = app.oneshot(post_json("/vote", "not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(Arc::ptr_eq(&store.state(), &before));
        assert_eq!(store.metrics().dispatched_total.load(Ordering::Relaxed), 2);
    }

    #[tokio::test]
    async fn next_and_vote_endpoints_run_a_contest() {
        let store = test_store();
        store.dispatch(&Action::set_entries(["X", "28DL"]));

        let app = build_router(store.clone());
        app.oneshot(post_json("/next", "")).await.unwrap();

        for entry in ["X", "28DL", "X"] {
            let app = build_router(store.clone());
            let response = app
                .oneshot(post_json("/vote", &format!(r#"{{"entry": "{entry}"}}"#)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let app = build_router(store);
        let response = app.oneshot(post_json("/next", "")).await.unwrap();

        assert_eq!(body_json(response).await, serde_json::json!({"winner": "X"}));
    }
}
