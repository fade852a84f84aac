//! Handler tests: drive the real router end to end and assert the exact
//! status codes and JSON bodies of the HTTP surface.

use crate::auth::{hasher::PasswordHasher, store::CredentialStore, AuthService};
use crate::sezamo::router;
use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    // Reduced bcrypt cost keeps the suite fast; semantics are unchanged
    let service = AuthService::new(CredentialStore::new(), PasswordHasher::with_cost(4));
    router(service)
}

async fn post_json(app: &Router, uri: &str, payload: &Value) -> Result<(StatusCode, Value)> {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))?,
        )
        .await?;

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&body)?;

    Ok((status, body))
}

#[tokio::test]
async fn signup_registers_then_conflicts() -> Result<()> {
    let app = app();

    let (status, body) = post_json(
        &app,
        "/api/signup",
        &json!({"email": "a@x.com", "password": "secret123"}),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"message": "User registered successfully!"}));

    // Same email with a different password still conflicts
    let (status, body) = post_json(
        &app,
        "/api/signup",
        &json!({"email": "a@x.com", "password": "other"}),
    )
    .await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"error": "Email already exists."}));

    Ok(())
}

#[tokio::test]
async fn login_returns_authenticated_identity() -> Result<()> {
    let app = app();

    let (status, _) = post_json(
        &app,
        "/api/signup",
        &json!({"email": "a@x.com", "password": "secret123"}),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(
        &app,
        "/api/login",
        &json!({"email": "a@x.com", "password": "secret123"}),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Login successful!", "user": {"email": "a@x.com"}})
    );

    Ok(())
}

#[tokio::test]
async fn login_failures_are_indistinguishable() -> Result<()> {
    let app = app();

    let (status, _) = post_json(
        &app,
        "/api/signup",
        &json!({"email": "a@x.com", "password": "secret123"}),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);

    // Wrong password for a registered email
    let (wrong_status, wrong_body) = post_json(
        &app,
        "/api/login",
        &json!({"email": "a@x.com", "password": "wrong"}),
    )
    .await?;
    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);

    // Never-registered email
    let (unknown_status, unknown_body) = post_json(
        &app,
        "/api/login",
        &json!({"email": "b@x.com", "password": "whatever"}),
    )
    .await?;
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);

    // Identical bodies, nothing reveals which half of the pair was wrong
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body, json!({"error": "Invalid email or password."}));

    Ok(())
}

#[tokio::test]
async fn missing_fields_return_bad_request() -> Result<()> {
    let app = app();
    let expected = json!({"error": "Email and password are required."});

    for uri in ["/api/signup", "/api/login"] {
        let (status, body) =
            post_json(&app, uri, &json!({"email": "", "password": "secret123"})).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "empty email on {uri}");
        assert_eq!(body, expected);

        let (status, body) =
            post_json(&app, uri, &json!({"email": "a@x.com", "password": ""})).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "empty password on {uri}");
        assert_eq!(body, expected);

        // Absent fields behave like empty ones
        let (status, body) = post_json(&app, uri, &json!({"email": "a@x.com"})).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "absent password on {uri}");
        assert_eq!(body, expected);

        let (status, body) = post_json(&app, uri, &json!({})).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "empty object on {uri}");
        assert_eq!(body, expected);
    }

    Ok(())
}

#[tokio::test]
async fn missing_payload_returns_bad_request() -> Result<()> {
    let app = app();

    // No content type and no body at all
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/signup")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = to_bytes(response.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&body)?;
    assert_eq!(body, json!({"error": "Email and password are required."}));

    // Malformed JSON
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/login")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn fresh_store_has_no_accounts() -> Result<()> {
    // A fresh router has a fresh store: nothing registered elsewhere exists
    let (status, body) = post_json(
        &app(),
        "/api/login",
        &json!({"email": "a@x.com", "password": "secret123"}),
    )
    .await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"error": "Invalid email or password."}));

    Ok(())
}
