use axum::Router;
use axum::http::{HeaderValue, Request, StatusCode, header};
use axum::routing::{get, post};
use axum::Json;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use super::*;
use crate::config::AppConfig;
use crate::routes::base_routes;

/// Minimal stand-in for the TIX API on an ephemeral port.
async fn spawn_upstream() -> String {
    let app = Router::new()
        .route(
            "/api/v1/auth/profile",
            get(|headers: HeaderMap| async move {
                let cookie = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()).unwrap_or_default().to_owned();
                ([(header::SET_COOKIE, "sid=renewed; Path=/")], Json(json!({ "code": 200, "data": { "cookie": cookie } })))
            }),
        )
        .route(
            "/api/v1/events",
            post(|RawQuery(query): RawQuery, body: String| async move {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "code": 422, "data": format!("{}|{body}", query.unwrap_or_default()) })),
                )
            }),
        );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/v1")
}

fn router_for(upstream: String) -> Router {
    base_routes(&AppConfig { api_upstream: Some(upstream), ..AppConfig::default() }).unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn upstream_url_joins_path_and_query() {
    assert_eq!(upstream_url("http://api/v1", "events", None), "http://api/v1/events");
    assert_eq!(upstream_url("http://api/v1", "/events", Some("")), "http://api/v1/events");
    assert_eq!(upstream_url("http://api/v1", "users", Some("q=a")), "http://api/v1/users?q=a");
}

#[test]
fn hop_by_hop_headers_are_dropped() {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("admin.tix.test"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::COOKIE, HeaderValue::from_static("sid=1"));
    headers.append(header::SET_COOKIE, HeaderValue::from_static("a=1"));
    headers.append(header::SET_COOKIE, HeaderValue::from_static("b=2"));

    let kept = forwardable_headers(&headers);
    assert!(kept.get(header::HOST).is_none());
    assert!(kept.get(header::CONNECTION).is_none());
    assert_eq!(kept.get(header::COOKIE).unwrap(), "sid=1");
    assert_eq!(kept.get_all(header::SET_COOKIE).iter().count(), 2);
}

#[tokio::test]
async fn forwards_cookie_and_returns_set_cookie() {
    let app = router_for(spawn_upstream().await);
    let request = Request::builder()
        .uri("/api/v1/auth/profile")
        .header(header::COOKIE, "sid=abc")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::SET_COOKIE).unwrap(), "sid=renewed; Path=/");
    let json = body_json(response).await;
    assert_eq!(json["data"]["cookie"], "sid=abc");
}

#[tokio::test]
async fn forwards_method_query_and_body_and_keeps_error_status() {
    let app = router_for(spawn_upstream().await);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/events?draft=1")
        .body(Body::from("{\"name\":\"Gala\"}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], 422);
    assert_eq!(json["data"], "draft=1|{\"name\":\"Gala\"}");
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = router_for(format!("http://{addr}/api/v1"));
    let request = Request::builder().uri("/api/v1/events").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], 502);
}
