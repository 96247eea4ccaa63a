//! Integration tests for the registration endpoint.
//!
//! These tests run the real router and registration service against an
//! in-memory user store, without requiring a database connection.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;

use user_registry::api::{create_router, AppState};
use user_registry::domain::User;
use user_registry::errors::{AppError, AppResult};
use user_registry::infra::{Database, UserRepository};
use user_registry::services::Registrar;

/// In-memory user store enforcing email uniqueness at write time.
#[derive(Default)]
struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.email == email).cloned())
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.email == user.email) {
            return Err(AppError::DuplicateEmail);
        }
        rows.push(user.clone());
        Ok(user)
    }
}

/// Build the full application router over an in-memory store.
///
/// The database handle stays disconnected; no test here touches /health.
fn test_app() -> Router {
    let service = Arc::new(Registrar::new(Arc::new(InMemoryUsers::default())));
    let database = Arc::new(Database::from_connection(DatabaseConnection::Disconnected));
    create_router(AppState::new(service, database))
}

async fn post_json(app: &Router, body: String) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

fn valid_body() -> Value {
    json!({
        "firstName": "Ana",
        "lastName": "Gomez",
        "birthDate": "1990-01-01",
        "address": "Street 1",
        "phone": "123",
        "email": "ana@example.com",
        "baseSalary": 5000000
    })
}

#[tokio::test]
async fn register_returns_200_with_generated_id() {
    let app = test_app();

    let (status, body) = post_json(&app, valid_body().to_string()).await;

    assert_eq!(status, StatusCode::OK);

    // Canonical hyphenated lowercase UUID string
    let id = body["id"].as_str().expect("id should be a string");
    assert_eq!(id.len(), 36);
    assert_eq!(id, id.to_lowercase());
    assert_eq!(id.matches('-').count(), 4);

    // All input fields preserved verbatim
    assert_eq!(body["firstName"], "Ana");
    assert_eq!(body["lastName"], "Gomez");
    assert_eq!(body["birthDate"], "1990-01-01");
    assert_eq!(body["address"], "Street 1");
    assert_eq!(body["phone"], "123");
    assert_eq!(body["email"], "ana@example.com");
    assert_eq!(body["baseSalary"].as_f64(), Some(5_000_000.0));
}

#[tokio::test]
async fn duplicate_email_returns_409() {
    let app = test_app();

    let (first, _) = post_json(&app, valid_body().to_string()).await;
    assert_eq!(first, StatusCode::OK);

    let (second, body) = post_json(&app, valid_body().to_string()).await;
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "DUPLICATE_EMAIL");
    assert_eq!(body["error"]["message"], "Email already registered");
}

#[tokio::test]
async fn missing_required_field_returns_400() {
    let app = test_app();

    let mut draft = valid_body();
    draft.as_object_mut().unwrap().remove("firstName");

    let (status, body) = post_json(&app, draft.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Field 'firstName' is required");
}

#[tokio::test]
async fn invalid_email_returns_400() {
    let app = test_app();

    let mut draft = valid_body();
    draft["email"] = json!("not-an-email");

    let (status, body) = post_json(&app, draft.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Invalid email format");
}

#[tokio::test]
async fn out_of_range_salary_returns_400() {
    let app = test_app();

    let mut draft = valid_body();
    draft["baseSalary"] = json!(15000001);

    let (status, body) = post_json(&app, draft.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "Field 'baseSalary' must be between 0 and 15,000,000"
    );
}

#[tokio::test]
async fn malformed_json_returns_400() {
    let app = test_app();

    let (status, body) = post_json(&app, "{not json".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn root_endpoint_is_reachable() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
