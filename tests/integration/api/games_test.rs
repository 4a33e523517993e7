//! Score submission API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{create_test_user, submit_score, TestApp};
use crate::{assert_contains, assert_error, assert_status, for_each_backend};

async fn test_high_score_tracking(app: TestApp) {
    let user = create_test_user(&app, "Climber").await;

    let first = submit_score(&app, &user, 100, "walls").await;
    assert_eq!(first["success"], json!(true));
    assert_eq!(first["newHighScore"], json!(true));
    assert_eq!(first["rank"], json!(1));

    let second = submit_score(&app, &user, 50, "walls").await;
    assert_eq!(second["newHighScore"], json!(false));

    let profile = app.get(&format!("/api/users/{}", user.id), None).await;
    assert_eq!(profile.body["highScore"], json!(100));
    assert_eq!(profile.body["gamesPlayed"], json!(2));
}

async fn test_equal_score_is_not_new_high(app: TestApp) {
    let user = create_test_user(&app, "Steady").await;

    submit_score(&app, &user, 70, "pass-through").await;
    let tie = submit_score(&app, &user, 70, "pass-through").await;
    assert_eq!(tie["newHighScore"], json!(false));
}

async fn test_high_score_spans_modes(app: TestApp) {
    let user = create_test_user(&app, "Versatile").await;

    submit_score(&app, &user, 300, "walls").await;
    let other_mode = submit_score(&app, &user, 200, "pass-through").await;
    assert_eq!(other_mode["newHighScore"], json!(false));
    assert_eq!(other_mode["rank"], json!(1));
}

async fn test_zero_score_first_game(app: TestApp) {
    let user = create_test_user(&app, "Unlucky").await;

    let response = submit_score(&app, &user, 0, "walls").await;
    assert_eq!(response["newHighScore"], json!(false));

    let me = app.get("/api/auth/me", Some(&user.token)).await;
    assert_eq!(me.body["gamesPlayed"], json!(1));
    assert_eq!(me.body["highScore"], json!(0));
}

async fn test_rank_reflects_other_players(app: TestApp) {
    let leader = create_test_user(&app, "Leader").await;
    let chaser = create_test_user(&app, "Chaser").await;

    submit_score(&app, &leader, 500, "walls").await;
    let response = submit_score(&app, &chaser, 400, "walls").await;
    assert_eq!(response["rank"], json!(2));
}

async fn test_invalid_submissions(app: TestApp) {
    let user = create_test_user(&app, "Cheater").await;

    let negative = app
        .post(
            "/api/games/score",
            json!({ "score": -5, "mode": "walls", "duration": 10 }),
            Some(&user.token),
        )
        .await;
    assert_status!(negative, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(negative.body["field"], json!("score"));

    let negative_duration = app
        .post(
            "/api/games/score",
            json!({ "score": 5, "mode": "walls", "duration": -1 }),
            Some(&user.token),
        )
        .await;
    assert_status!(negative_duration, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(negative_duration.body["field"], json!("duration"));

    let bad_mode = app
        .post(
            "/api/games/score",
            json!({ "score": 5, "mode": "classic", "duration": 10 }),
            Some(&user.token),
        )
        .await;
    assert_status!(bad_mode, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(bad_mode.body["field"], json!("mode"));
    assert_contains!(bad_mode.error(), "classic");

    let me = app.get("/api/auth/me", Some(&user.token)).await;
    assert_eq!(me.body["gamesPlayed"], json!(0));
}

async fn test_submit_requires_auth(app: TestApp) {
    let response = app
        .post(
            "/api/games/score",
            json!({ "score": 5, "mode": "walls", "duration": 10 }),
            None,
        )
        .await;
    assert_error!(response, StatusCode::UNAUTHORIZED, "Authentication required");
}

for_each_backend!(
    test_high_score_tracking,
    test_equal_score_is_not_new_high,
    test_high_score_spans_modes,
    test_zero_score_first_game,
    test_rank_reflects_other_players,
    test_invalid_submissions,
    test_submit_requires_auth,
);
