use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;
use crate::config::ServerConfig;

fn state(backend_url: Option<String>) -> AppState {
    let config = ServerConfig { port: 0, backend_url, backend_timeout_secs: 5 };
    AppState::new(&config).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn healthz_reports_backend_configuration() {
    let app = api_routes(state(None));
    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({ "status": "ok", "backend": false }));
}

#[tokio::test]
async fn api_without_backend_is_unavailable() {
    let app = api_routes(state(None));
    let response = app
        .oneshot(Request::builder().uri("/api/companies").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["message"], "backend forwarding is not configured");
}

#[tokio::test]
async fn api_forwards_method_path_query_and_bearer() {
    use axum::extract::RawQuery;
    use axum::http::HeaderMap;
    use axum::routing::post;

    // Upstream echoes what it received.
    let upstream = Router::new().route(
        "/v1/assets/{id}/qr",
        post(|headers: HeaderMap, RawQuery(query): RawQuery, body: String| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let cookie = headers.get("cookie").is_some();
            (
                StatusCode::CREATED,
                Json(serde_json::json!({
                    "auth": auth,
                    "query": query.unwrap_or_default(),
                    "body": body,
                    "cookie": cookie,
                })),
            )
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });

    let app = api_routes(state(Some(format!("http://{addr}/v1"))));
    let request = Request::builder()
        .method("POST")
        .uri("/api/assets/7/qr?size=256")
        .header("authorization", "Bearer tok")
        .header("cookie", "session=secret")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"x":1}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "auth": "Bearer tok", "query": "size=256", "body": "{\"x\":1}", "cookie": false })
    );
}

#[tokio::test]
async fn api_with_unreachable_backend_is_bad_gateway() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = api_routes(state(Some(format!("http://{addr}"))));
    let response = app
        .oneshot(Request::builder().uri("/api/companies").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}


#[tokio::test]
async fn api_forwards_encoded_path_segments_unchanged() {
    use axum::http::Uri;

    let upstream = Router::new().fallback(|uri: Uri| async move { uri.path().to_owned() });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });

    let app = api_routes(state(Some(format!("http://{addr}/v1"))));
    let response = app
        .oneshot(Request::builder().uri("/api/assets/a%2Fb/qr").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"/v1/assets/a%2Fb/qr");
}
