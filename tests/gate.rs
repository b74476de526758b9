use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use axum::routing::get;
use axum::{Extension, Router};
use chrono::Utc;
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header};
use serde_json::{Value, json};
use tower::ServiceExt;

use token_auth_gate::app::build_router;
use token_auth_gate::config::Config;
use token_auth_gate::{AppState, AuthUser, TokenVerifier, apply};

const SECRET: &str = "integration-secret";

fn config() -> Config {
    Config::from_lookup(|key| match key {
        "JWT_SECRET" => Some(SECRET.to_string()),
        _ => None,
    })
    .unwrap()
}

fn state() -> AppState {
    AppState::new(Arc::new(TokenVerifier::new(SECRET.as_bytes(), 0)))
}

fn app() -> Router {
    build_router(state(), &config())
}

fn sign(secret: &str, claims: &Value) -> String {
    jsonwebtoken::encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

fn valid_claims() -> Value {
    json!({
        "sub": "6f1c1a0e-2d43-4a53-9a53-1f5b1c9d7e10",
        "email": "someone@example.com",
        "roles": ["reader"],
        "exp": Utc::now().timestamp() + 3600,
    })
}

fn get_me(authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri("/api/v1/me");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

async fn json_body(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

async fn assert_rejected(response: Response, message: &str) {
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        json_body(response).await,
        json!({"success": false, "message": message})
    );
}

/// Router whose only handler counts how often it runs.
fn counting_app(hits: Arc<AtomicUsize>) -> Router {
    let protected = Router::new().route(
        "/protected",
        get(|Extension(hits): Extension<Arc<AtomicUsize>>, user: AuthUser| async move {
            hits.fetch_add(1, Ordering::SeqCst);
            axum::Json(user)
        }),
    );

    apply(protected, state())
        .layer(Extension(hits))
        .with_state(state())
}

#[tokio::test]
async fn missing_header_is_rejected() {
    let response = app().oneshot(get_me(None)).await.unwrap();

    assert_rejected(response, "No token provided").await;
}

#[tokio::test]
async fn empty_header_is_rejected_as_missing() {
    let response = app().oneshot(get_me(Some(""))).await.unwrap();

    assert_rejected(response, "No token provided").await;
}

#[tokio::test]
async fn raw_token_is_accepted_and_claims_are_attached() {
    let claims = valid_claims();
    let token = sign(SECRET, &claims);

    let response = app().oneshot(get_me(Some(&token))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"success": true, "user": claims})
    );
}

#[tokio::test]
async fn bearer_token_is_accepted() {
    let claims = valid_claims();
    let token = sign(SECRET, &claims);

    let response = app()
        .oneshot(get_me(Some(&format!("Bearer {token}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["user"], claims);
}

#[tokio::test]
async fn token_signed_with_other_secret_is_rejected() {
    let token = sign("not-the-configured-secret", &valid_claims());

    let response = app()
        .oneshot(get_me(Some(&format!("Bearer {token}"))))
        .await
        .unwrap();

    assert_rejected(response, "Invalid token").await;
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let mut claims = valid_claims();
    claims["exp"] = json!(Utc::now().timestamp() - 3600);
    let token = sign(SECRET, &claims);

    let response = app().oneshot(get_me(Some(&token))).await.unwrap();

    assert_rejected(response, "Invalid token").await;
}

#[tokio::test]
async fn malformed_token_is_rejected() {
    let response = app()
        .oneshot(get_me(Some("Bearer not.a.token")))
        .await
        .unwrap();

    assert_rejected(response, "Invalid token").await;
}

#[tokio::test]
async fn bare_bearer_prefix_is_rejected_as_invalid() {
    let response = app().oneshot(get_me(Some("Bearer "))).await.unwrap();

    assert_rejected(response, "Invalid token").await;
}

#[tokio::test]
async fn same_token_verifies_identically_twice() {
    let app = app();
    let token = sign(SECRET, &valid_claims());

    let first = app.clone().oneshot(get_me(Some(&token))).await.unwrap();
    let second = app.oneshot(get_me(Some(&token))).await.unwrap();

    assert_eq!(json_body(first).await, json_body(second).await);
}

#[tokio::test]
async fn handler_runs_only_when_token_is_valid() {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = counting_app(hits.clone());
    let token = sign(SECRET, &valid_claims());

    for authorization in [None, Some("Bearer "), Some("garbage")] {
        let mut builder = Request::builder().uri("/protected");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let response = app
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    let request = Request::builder()
        .uri("/protected")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn health_is_not_gated() {
    let request = Request::builder()
        .uri("/api/v1/health")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn unknown_path_is_not_found_rather_than_unauthorized() {
    let request = Request::builder()
        .uri("/api/v1/nope")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rejections_carry_request_id_and_security_headers() {
    let request = Request::builder()
        .uri("/api/v1/me")
        .header("x-request-id", "req-123")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let headers = response.headers();
    assert_eq!(headers["x-request-id"], "req-123");
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["cache-control"], "no-store");
}
