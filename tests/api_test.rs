//! Integration tests for API endpoints.
//!
//! These tests drive the full router with a mock user service and a
//! mocked database connection, so no real Postgres is required.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use serde_json::{json, Value};
use tower::ServiceExt;

use users_api::api::{create_router, AppState};
use users_api::domain::{CreateUser, UpdateUser, User};
use users_api::errors::{AppError, AppResult};
use users_api::infra::Database;
use users_api::services::UserService;

// =============================================================================
// Mock Services for Testing
// =============================================================================

/// Mock user service with a fixed record at id 1
struct MockUserService;

fn alice() -> User {
    User {
        id: 1,
        username: "alice".to_string(),
        slug: "alice".to_string(),
        firstname: Some("Alice".to_string()),
        lastname: Some("Smith".to_string()),
        age: Some(30),
    }
}

#[async_trait]
impl UserService for MockUserService {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(vec![
            alice(),
            User {
                id: 2,
                username: "bob".to_string(),
                slug: "bob".to_string(),
                firstname: None,
                lastname: None,
                age: None,
            },
        ])
    }

    async fn get_user(&self, id: i64) -> AppResult<User> {
        if id == 1 {
            Ok(alice())
        } else {
            Err(AppError::NotFound)
        }
    }

    async fn create_user(&self, payload: CreateUser) -> AppResult<User> {
        Ok(User {
            id: 1,
            slug: slug::slugify(&payload.username),
            username: payload.username,
            firstname: payload.firstname,
            lastname: payload.lastname,
            age: payload.age,
        })
    }

    async fn update_user(&self, id: i64, changes: UpdateUser) -> AppResult<User> {
        if id != 1 {
            return Err(AppError::NotFound);
        }
        let mut user = alice();
        if let Some(username) = changes.username {
            user.username = username;
        }
        if let Some(firstname) = changes.firstname {
            user.firstname = Some(firstname);
        }
        if let Some(lastname) = changes.lastname {
            user.lastname = Some(lastname);
        }
        if let Some(age) = changes.age {
            user.age = Some(age);
        }
        Ok(user)
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        if id == 1 {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

/// Build the app router with mock service and mock database
fn test_app() -> axum::Router {
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let state = AppState::new(
        Arc::new(MockUserService),
        Arc::new(Database::from_connection(conn)),
    );
    create_router(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_root_returns_welcome_message() {
    let response = test_app()
        .oneshot(empty_request("GET", "/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Welcome to Users API");
}

#[tokio::test]
async fn test_health_reports_healthy_database() {
    let response = test_app()
        .oneshot(empty_request("GET", "/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_users_returns_all_records() {
    let response = test_app()
        .oneshot(empty_request("GET", "/users/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["username"], "alice");
    assert_eq!(users[1]["username"], "bob");
}

#[tokio::test]
async fn test_get_user_returns_record() {
    let response = test_app()
        .oneshot(empty_request("GET", "/users/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["slug"], "alice");
}

#[tokio::test]
async fn test_get_missing_user_returns_404() {
    let response = test_app()
        .oneshot(empty_request("GET", "/users/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "User was not found");
}

#[tokio::test]
async fn test_create_user_returns_201_with_slug() {
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/users/create",
            json!({"username": "Charlie Brown", "age": 8}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["username"], "Charlie Brown");
    assert_eq!(body["slug"], "charlie-brown");
    assert_eq!(body["age"], 8);
}

#[tokio::test]
async fn test_create_user_with_empty_username_is_rejected() {
    let response = test_app()
        .oneshot(json_request("POST", "/users/create", json!({"username": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_user_merges_only_supplied_fields() {
    let response = test_app()
        .oneshot(json_request(
            "PUT",
            "/users/1",
            json!({"username": "alice2"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["username"], "alice2");
    // Omitted fields keep their values, slug is not regenerated
    assert_eq!(body["slug"], "alice");
    assert_eq!(body["firstname"], "Alice");
    assert_eq!(body["age"], 30);
}

#[tokio::test]
async fn test_update_missing_user_returns_404() {
    let response = test_app()
        .oneshot(json_request(
            "PUT",
            "/users/999",
            json!({"username": "ghost"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_returns_204_with_empty_body() {
    let response = test_app()
        .oneshot(empty_request("DELETE", "/users/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_delete_missing_user_returns_404() {
    let response = test_app()
        .oneshot(empty_request("DELETE", "/users/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "User was not found");
}
