// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::AUTHORIZATION};
use inkpot::application::services::ApplicationServices;
use inkpot::domain::{
    article::ArticleRepository,
    comment::{CommentRepository, LikeRepository},
};
use inkpot::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

/// Services wired to in-memory stores, with the stores kept reachable for
/// seeding and assertions.
pub struct TestApp {
    pub articles: Arc<mocks::InMemoryArticles>,
    pub relational: Arc<mocks::InMemoryRelational>,
    pub events: Arc<mocks::CapturingEvents>,
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    pub fn new() -> Self {
        let articles = Arc::new(mocks::InMemoryArticles::default());
        let relational = Arc::new(mocks::InMemoryRelational::default());
        let events = Arc::new(mocks::CapturingEvents::default());

        let article_repo: Arc<dyn ArticleRepository> = articles.clone();
        let comment_repo: Arc<dyn CommentRepository> = relational.clone();
        let like_repo: Arc<dyn LikeRepository> = relational.clone();

        let services = Arc::new(ApplicationServices::new(
            article_repo,
            comment_repo,
            like_repo,
            Arc::new(mocks::StaticTokenVerifier),
            Arc::new(mocks::FixedClock),
            events.clone(),
        ));

        Self {
            articles,
            relational,
            events,
            services,
        }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, &[])
    }
}

pub async fn make_test_router() -> axum::Router {
    TestApp::new().router()
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Reads a JSON body and checks the status on the way.
pub async fn json_body(resp: axum::response::Response, expected_status: StatusCode) -> Value {
    let status = resp.status();
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    assert_eq!(
        status,
        expected_status,
        "unexpected status, body: {}",
        String::from_utf8_lossy(&body_bytes)
    );
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = json_body(resp, expected_status).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}
