//! User profile API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{create_test_user, TestApp};
use crate::{assert_error, assert_status, for_each_backend};

async fn test_get_user_public_profile(app: TestApp) {
    let user = create_test_user(&app, "Visible").await;

    let anonymous = app.get(&format!("/api/users/{}", user.id), None).await;
    assert_status!(anonymous, StatusCode::OK);
    assert_eq!(anonymous.body["username"], json!("Visible"));
    assert_eq!(anonymous.body["id"], json!(user.id));
    assert!(anonymous.body.get("password").is_none());

    let own = app
        .get(&format!("/api/users/{}", user.id), Some(&user.token))
        .await;
    assert_eq!(own.body, anonymous.body);

    let other = create_test_user(&app, "Onlooker").await;
    let by_other = app
        .get(&format!("/api/users/{}", user.id), Some(&other.token))
        .await;
    assert_eq!(by_other.body, anonymous.body);

    // A bad token on a public route is the same as no token
    let bad_token = app
        .get(&format!("/api/users/{}", user.id), Some("garbage"))
        .await;
    assert_status!(bad_token, StatusCode::OK);
}

async fn test_get_user_not_found(app: TestApp) {
    let missing = app.get("/api/users/9999", None).await;
    assert_error!(missing, StatusCode::NOT_FOUND, "User not found");

    let malformed = app.get("/api/users/not-a-number", None).await;
    assert_error!(malformed, StatusCode::NOT_FOUND, "User not found");
}

async fn test_update_avatar(app: TestApp) {
    let user = create_test_user(&app, "Painter").await;
    let avatar = "https://api.dicebear.com/7.x/avataaars/svg?seed=Felix";

    let response = app
        .patch("/api/users/profile", json!({ "avatar": avatar }), Some(&user.token))
        .await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["success"], json!(true));
    assert_eq!(response.body["user"]["avatar"], json!(avatar));
    assert_eq!(response.body["user"]["username"], json!("Painter"));

    let me = app.get("/api/auth/me", Some(&user.token)).await;
    assert_eq!(me.body["avatar"], json!(avatar));

    let uri = format!("/api/users/{}", user.id);
    let own = app.get(&uri, Some(&user.token)).await;
    let anonymous = app.get(&uri, None).await;
    assert_eq!(own.body["avatar"], json!(avatar));
    assert_eq!(own.body, anonymous.body);
}

async fn test_update_username(app: TestApp) {
    let user = create_test_user(&app, "OldName").await;

    let response = app
        .patch("/api/users/profile", json!({ "username": "NewName" }), Some(&user.token))
        .await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["user"]["username"], json!("NewName"));

    let public = app.get(&format!("/api/users/{}", user.id), None).await;
    assert_eq!(public.body["username"], json!("NewName"));
}

async fn test_update_empty_returns_current_user(app: TestApp) {
    let user = create_test_user(&app, "Unchanged").await;

    let response = app
        .patch("/api/users/profile", json!({}), Some(&user.token))
        .await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["user"]["username"], json!("Unchanged"));
}

async fn test_update_username_conflicts(app: TestApp) {
    create_test_user(&app, "Holder").await;
    let user = create_test_user(&app, "Wanter").await;

    let taken = app
        .patch("/api/users/profile", json!({ "username": "Holder" }), Some(&user.token))
        .await;
    assert_error!(taken, StatusCode::BAD_REQUEST, "Username already taken");

    let invalid = app
        .patch("/api/users/profile", json!({ "username": "ab" }), Some(&user.token))
        .await;
    assert_status!(invalid, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(invalid.body["field"], json!("username"));

    let me = app.get("/api/auth/me", Some(&user.token)).await;
    assert_eq!(me.body["username"], json!("Wanter"));
}

for_each_backend!(
    test_get_user_public_profile,
    test_get_user_not_found,
    test_update_avatar,
    test_update_username,
    test_update_empty_returns_current_user,
    test_update_username_conflicts,
);
