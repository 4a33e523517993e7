//! Authentication test helpers
//!
//! Shortcuts for creating accounts through the public API and building
//! the `Authorization` header.

use serde_json::json;

use super::TestApp;

pub const TEST_PASSWORD: &str = "password123";
pub const TEST_AVATAR: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=test";

/// Test user credentials
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Email derived from the username so each account is unique per test
pub fn email_for(username: &str) -> String {
    format!("{}@example.com", username.to_lowercase())
}

/// Sign up `username` through `POST /api/auth/signup`
pub async fn create_test_user(app: &TestApp, username: &str) -> TestUser {
    let email = email_for(username);
    let response = app
        .post(
            "/api/auth/signup",
            json!({
                "username": username,
                "email": email,
                "password": TEST_PASSWORD,
                "avatar": TEST_AVATAR,
            }),
            None,
        )
        .await;

    assert_eq!(
        response.status,
        axum::http::StatusCode::CREATED,
        "signup of {} failed: {}",
        username,
        response.body
    );

    TestUser {
        id: response.body["user"]["id"]
            .as_str()
            .expect("user id should be a string")
            .to_string(),
        username: username.to_string(),
        email,
        password: TEST_PASSWORD.to_string(),
        token: response.body["token"]
            .as_str()
            .expect("token should be present")
            .to_string(),
    }
}

/// Log in and return the new token
pub async fn login(app: &TestApp, user: &TestUser) -> String {
    let response = app
        .post(
            "/api/auth/login",
            json!({ "email": user.email, "password": user.password }),
            None,
        )
        .await;

    assert_eq!(response.status, axum::http::StatusCode::OK, "{}", response.body);
    response.body["token"]
        .as_str()
        .expect("token should be present")
        .to_string()
}

/// Submit a finished game and return the response body
pub async fn submit_score(
    app: &TestApp,
    user: &TestUser,
    score: i64,
    mode: &str,
) -> serde_json::Value {
    let response = app
        .post(
            "/api/games/score",
            json!({ "score": score, "mode": mode, "duration": 60 }),
            Some(&user.token),
        )
        .await;

    assert_eq!(response.status, axum::http::StatusCode::OK, "{}", response.body);
    response.body
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
