use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use site_doctor::app::{AppState, build_router};
use site_doctor::config::db::StorageConfig;
use site_doctor::config::environment::AppConfig;
use site_doctor::infra::init_infra;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tower::util::ServiceExt;

pub struct TestContext {
    pub app: Router,
    #[allow(dead_code)]
    pub data_root: PathBuf,
    _data_dir: TempDir,
}

pub fn test_config(data_dir: &Path) -> AppConfig {
    AppConfig {
        rust_env: "test".to_string(),
        api_host: "127.0.0.1".to_string(),
        api_port: 0,
        data_dir: data_dir.display().to_string(),
        fetch_timeout_seconds: 5,
        ai_api_url: None,
        ai_api_token: None,
        ai_model: None,
        ai_timeout_seconds: 5,
    }
}

pub async fn build_test_context() -> TestContext {
    let data_dir = tempfile::tempdir().expect("create temp data dir");
    let config = test_config(data_dir.path());
    let infra = init_infra(&StorageConfig::from_app(&config))
        .await
        .expect("init storage for integration tests");
    let app = build_router(AppState::new(config, infra));

    TestContext {
        app,
        data_root: data_dir.path().to_path_buf(),
        _data_dir: data_dir,
    }
}

pub async fn send(app: &mut Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.expect("request failed");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, body.to_vec())
}

#[allow(dead_code)]
pub async fn post_audit(
    app: &mut Router,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/audit")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request");
    let (status, bytes) = send(app, request).await;
    let payload = serde_json::from_slice(&bytes).expect("deserialize audit response");
    (status, payload)
}

pub async fn get_json(app: &mut Router, path: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .expect("build request");
    let (status, bytes) = send(app, request).await;
    let payload = serde_json::from_slice(&bytes).expect("deserialize response");
    (status, payload)
}

/// Serves `html` (with no security headers beyond axum's defaults) on an
/// ephemeral local port; returns the bound authority.
#[allow(dead_code)]
pub async fn spawn_target(html: &'static str) -> String {
    use axum::response::Html;
    use axum::routing::get;

    let target = Router::new().route("/", get(move || async move { Html(html) }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind target server");
    let addr = listener.local_addr().expect("target addr");
    tokio::spawn(async move {
        axum::serve(listener, target).await.expect("target server");
    });
    format!("{}:{}", addr.ip(), addr.port())
}
