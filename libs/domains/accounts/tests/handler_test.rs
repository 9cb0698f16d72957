//! Handler tests for the accounts domain
//!
//! These drive the sign-up flow end to end through the axum router with
//! in-memory repositories: request deserialization, the validation
//! composite, the use case, and the response envelope, including the
//! logging decorator's behavior on server errors.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_accounts::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

// Helper to parse the JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_signup(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/signup")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn signup_app() -> (Router, InMemoryAccountRepository, InMemoryLogRepository) {
    let accounts = InMemoryAccountRepository::new();
    let logs = InMemoryLogRepository::new();

    let validation = CompositeValidation::for_sign_up(Arc::new(EmailValidatorAdapter::new()));
    let service = AddAccountService::new(accounts.clone(), Argon2Hasher::new());
    let controller = SignUpController::new(Box::new(validation), service);
    let decorated = LogControllerDecorator::new(controller, logs.clone());

    (handlers::router(Arc::new(decorated)), accounts, logs)
}

fn valid_body() -> Value {
    json!({
        "name": "any_name",
        "email": "any_email@mail.com",
        "password": "any_password",
        "passwordConfirmation": "any_password"
    })
}

#[tokio::test]
async fn signs_up_a_new_account_with_200() {
    let (app, accounts, _) = signup_app();

    let response = app.oneshot(post_signup(valid_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["name"], "any_name");
    assert_eq!(body["email"], "any_email@mail.com");
    // The stored (and returned) password is the hash, never the plain text.
    assert_ne!(body["password"], "any_password");

    let stored = accounts
        .find_by_email("any_email@mail.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.password, body["password"].as_str().unwrap());
}

#[tokio::test]
async fn rejects_a_missing_name_with_400() {
    let (app, _, _) = signup_app();

    let response = app
        .oneshot(post_signup(json!({
            "email": "any_email@mail.com",
            "password": "any_password",
            "passwordConfirmation": "any_password"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "error": "Missing param: name" }));
}

#[tokio::test]
async fn reports_the_first_missing_field_in_declared_order() {
    let (app, _, _) = signup_app();

    // Everything is missing; "name" is declared first.
    let response = app.oneshot(post_signup(json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "error": "Missing param: name" }));
}

#[tokio::test]
async fn rejects_a_mismatched_confirmation_with_400() {
    let (app, _, _) = signup_app();

    let response = app
        .oneshot(post_signup(json!({
            "name": "any_name",
            "email": "any_email@mail.com",
            "password": "any_password",
            "passwordConfirmation": "different"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "error": "Invalid param: passwordConfirmation" }));
}

#[tokio::test]
async fn rejects_a_malformed_email_with_400() {
    let (app, _, _) = signup_app();

    let response = app
        .oneshot(post_signup(json!({
            "name": "any_name",
            "email": "not-an-email",
            "password": "any_password",
            "passwordConfirmation": "any_password"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "error": "Invalid param: email" }));
}

#[tokio::test]
async fn rejects_a_duplicate_email_with_400() {
    let (app, _, _) = signup_app();

    let first = app.clone().oneshot(post_signup(valid_body())).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.oneshot(post_signup(valid_body())).await.unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body = json_body(second.into_body()).await;
    assert_eq!(body, json!({ "error": "Invalid param: email" }));
}

/// Hasher that always fails, to force the 500 path through the stack.
struct FailingHasher;

impl Hasher for FailingHasher {
    fn hash(&self, _plain: &str) -> AccountResult<String> {
        Err(AccountError::PasswordHash("out of entropy".to_string()))
    }
}

#[tokio::test]
async fn server_errors_are_generic_to_the_client_and_logged_once() {
    let logs = InMemoryLogRepository::new();

    let validation = CompositeValidation::for_sign_up(Arc::new(EmailValidatorAdapter::new()));
    let service = AddAccountService::new(InMemoryAccountRepository::new(), FailingHasher);
    let controller = SignUpController::new(Box::new(validation), service);
    let decorated = LogControllerDecorator::new(controller, logs.clone());
    let app = handlers::router(Arc::new(decorated));

    let response = app.oneshot(post_signup(valid_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "error": "Internal server error" }));
    assert!(body.get("stack").is_none());

    let entries = logs.entries().await;
    assert_eq!(entries.len(), 1);
    assert!(entries[0].contains("out of entropy"));
}

#[tokio::test]
async fn successful_requests_log_nothing() {
    let (app, _, logs) = signup_app();

    let response = app.oneshot(post_signup(valid_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert!(logs.entries().await.is_empty());
}
