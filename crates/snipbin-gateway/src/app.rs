use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_snippet_handler, delete_snippet_handler, get_snippet_handler, health_handler,
    latest_snippets_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/api/snippets", post(create_snippet_handler))
            .route("/api/snippets/latest", get(latest_snippets_handler))
            .route(
                "/api/snippets/{id}",
                get(get_snippet_handler).delete(delete_snippet_handler),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use snipbin_service::PastebinService;
    use snipbin_storage::FsSnippetStore;
    use tempfile::TempDir;
    use tower::ServiceExt;

    async fn test_router() -> (TempDir, Router) {
        let dir = TempDir::new().unwrap();
        let store = FsSnippetStore::open(dir.path().join("snippets"))
            .await
            .unwrap();
        let service = PastebinService::new(store);
        (dir, App::router(AppState::new(service)))
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn delete_req(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn create(router: &Router, body: Value) -> String {
        let (status, body) = send(router, post_json("/api/snippets", body)).await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn health() {
        let (_dir, router) = test_router().await;

        let (status, body) = send(&router, get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn create_then_fetch() {
        let (_dir, router) = test_router().await;

        let id = create(
            &router,
            json!({ "content": "fn main() {}", "name": "hello" }),
        )
        .await;

        let (status, body) = send(&router, get_req(&format!("/api/snippets/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], id.as_str());
        assert_eq!(body["content"], "fn main() {}");
        assert_eq!(body["name"], "hello");
    }

    #[tokio::test]
    async fn missing_snippet_is_not_found() {
        let (_dir, router) = test_router().await;

        let (status, _) = send(&router, get_req("/api/snippets/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn empty_content_is_rejected() {
        let (_dir, router) = test_router().await;

        let (status, body) = send(
            &router,
            post_json("/api/snippets", json!({ "content": "  " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn latest_lists_newest_first() {
        let (_dir, router) = test_router().await;

        create(&router, json!({ "content": "older" })).await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        create(&router, json!({ "content": "newer" })).await;

        let (status, body) = send(&router, get_req("/api/snippets/latest")).await;
        assert_eq!(status, StatusCode::OK);

        let listed = body.as_array().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0]["content"], "newer");
    }

    #[tokio::test]
    async fn view_limited_snippet_goes_dead_over_http() {
        let (_dir, router) = test_router().await;

        let id = create(&router, json!({ "content": "once", "view_limit": 1 })).await;
        let uri = format!("/api/snippets/{id}");

        let (status, body) = send(&router, get_req(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["views_left"], 0);

        let (status, _) = send(&router, get_req(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let (_dir, router) = test_router().await;

        let id = create(&router, json!({ "content": "bye" })).await;
        let uri = format!("/api/snippets/{id}");

        let (status, _) = send(&router, delete_req(&uri)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&router, delete_req(&uri)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&router, get_req(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
