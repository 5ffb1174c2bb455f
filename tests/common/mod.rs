use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use tower::ServiceExt;

/// Full application router over the in-memory store. Clones of the router
/// share the store, so one instance carries state across requests in a test.
pub fn test_app() -> Router {
    roster::app::build_app(roster::state::AppState::in_memory())
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.expect("request failed")
}

#[allow(dead_code)]
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request build failed");
    let res = send(app, req).await;
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("read body failed");
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[allow(dead_code)]
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request build failed");
    let res = send(app, req).await;
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("read body failed");
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[allow(dead_code)]
pub async fn get_page(app: &Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request build failed");
    let res = send(app, req).await;
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("read body failed");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

/// POST a urlencoded form, returning the status and Location header if any.
#[allow(dead_code)]
pub async fn post_form(app: &Router, uri: &str, body: &str) -> (StatusCode, Option<String>) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request build failed");
    let res = send(app, req).await;
    let location = res
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    (res.status(), location)
}
