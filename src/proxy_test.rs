use axum::Json;
use axum::Router;
use axum::routing::{any, get};
use serde_json::Value;
use tower::ServiceExt;

use super::*;

/// Backend stand-in that echoes what it received.
async fn echo(request: Request) -> Json<Value> {
    let (parts, body) = request.into_parts();
    let body = axum::body::to_bytes(body, 1024).await.unwrap();
    let value_of = |name: header::HeaderName| parts.headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    Json(json!({
        "method": parts.method.as_str(),
        "uri": parts.uri.to_string(),
        "authorization": value_of(header::AUTHORIZATION),
        "cookie": value_of(header::COOKIE),
        "body": String::from_utf8_lossy(&body),
    }))
}

async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn proxy_app(api_url: &str) -> Router {
    let state = ProxyState::new(api_url, Duration::from_secs(5)).unwrap();
    Router::new().route("/api/{*rest}", any(forward)).with_state(state)
}

async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), MAX_BODY_BYTES).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Forwarding
// =============================================================================

#[test]
fn upstream_url_appends_path_and_query() {
    let state = ProxyState::new("http://backend:8000", Duration::from_secs(1)).unwrap();
    assert_eq!(state.upstream_url("/api/students?skip=0&limit=100"), "http://backend:8000/api/students?skip=0&limit=100");
}

#[test]
fn only_listed_headers_are_forwarded() {
    let mut incoming = HeaderMap::new();
    incoming.insert(header::AUTHORIZATION, "Bearer abc".parse().unwrap());
    incoming.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
    incoming.insert(header::COOKIE, "session=1".parse().unwrap());
    let forwarded = forwarded_headers(&incoming);
    assert_eq!(forwarded.len(), 2);
    assert!(forwarded.get(header::COOKIE).is_none());
}

#[tokio::test]
async fn forwards_method_query_headers_and_body() {
    let upstream = spawn_upstream(Router::new().fallback(echo)).await;
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/registrations/7/request-extension?dry=1")
        .header(header::AUTHORIZATION, "Bearer tok")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, "session=1")
        .body(Body::from(r#"{"extension_length_days":30}"#))
        .unwrap();

    let response = proxy_app(&upstream).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let echoed = read_json(response).await;
    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["uri"], "/api/registrations/7/request-extension?dry=1");
    assert_eq!(echoed["authorization"], "Bearer tok");
    assert_eq!(echoed["cookie"], Value::Null);
    assert_eq!(echoed["body"], r#"{"extension_length_days":30}"#);
}

#[tokio::test]
async fn relays_upstream_error_status_and_body() {
    let backend = Router::new().route(
        "/api/students/{id}",
        get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "detail": "Student not found" }))) }),
    );
    let upstream = spawn_upstream(backend).await;
    let request = axum::http::Request::builder().uri("/api/students/404").body(Body::empty()).unwrap();

    let response = proxy_app(&upstream).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(read_json(response).await, json!({ "detail": "Student not found" }));
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway_with_detail() {
    let request = axum::http::Request::builder().uri("/api/auth/me").body(Body::empty()).unwrap();
    let response = proxy_app("http://127.0.0.1:1").oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(read_json(response).await, json!({ "detail": "Backend unavailable" }));
}
