use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn app() -> Router {
    api_routes(ProxyState::new("http://127.0.0.1:1", Duration::from_secs(1)).unwrap())
}

#[tokio::test]
async fn healthz_is_ok() {
    let response = app().oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn api_paths_reach_the_proxy() {
    let request = Request::builder().method("DELETE").uri("/api/vivas/3").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let response = app().oneshot(Request::builder().uri("/nowhere").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
