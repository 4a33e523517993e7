//! Live game API integration tests
//!
//! Games are placed in the registry directly; the API only reads them.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

use snake_arena::backend::games::LiveGame;
use snake_arena::backend::store::seed::{seed_sample_data, SAMPLE_LIVE_GAME_ID};
use snake_arena::shared::GameMode;

use crate::common::{create_test_user, TestApp};
use crate::{assert_error, assert_status, for_each_backend};

fn live_game(id: &str, player_id: i64, mode: GameMode, minutes_ago: i64) -> LiveGame {
    LiveGame {
        id: id.to_string(),
        player_id,
        score: 150,
        mode,
        viewers: 4,
        started_at: Utc::now() - Duration::minutes(minutes_ago),
    }
}

fn player_id(user: &crate::common::TestUser) -> i64 {
    user.id.parse().expect("user ids are numeric")
}

async fn test_no_live_games(app: TestApp) {
    let response = app.get("/api/games/live", None).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

async fn test_list_live_games(app: TestApp) {
    let first = create_test_user(&app, "Streamer").await;
    let second = create_test_user(&app, "Newcomer").await;

    let registry = &app.state.live_games;
    registry
        .upsert(live_game("late", player_id(&second), GameMode::PassThrough, 1))
        .await;
    registry
        .upsert(live_game("early", player_id(&first), GameMode::Walls, 10))
        .await;

    let response = app.get("/api/games/live", None).await;
    assert_status!(response, StatusCode::OK);

    let games = response.body.as_array().expect("array");
    assert_eq!(games.len(), 2);
    assert_eq!(games[0]["id"], json!("early"));
    assert_eq!(games[0]["player"]["username"], json!("Streamer"));
    assert_eq!(games[0]["viewers"], json!(4));
    assert!(games[0]["startedAt"].is_string());
    assert!(games[0]["player"].get("password").is_none());
    assert_eq!(games[1]["id"], json!("late"));

    let walls = app.get("/api/games/live?mode=walls", None).await;
    assert_eq!(walls.body.as_array().map(Vec::len), Some(1));
    assert_eq!(walls.body[0]["mode"], json!("walls"));

    let bad = app.get("/api/games/live?mode=classic", None).await;
    assert_status!(bad, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(bad.body["field"], json!("mode"));
}

async fn test_get_live_game(app: TestApp) {
    let user = create_test_user(&app, "Watched").await;
    app.state
        .live_games
        .upsert(live_game("g1", player_id(&user), GameMode::Walls, 2))
        .await;

    let response = app.get("/api/games/live/g1", None).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["id"], json!("g1"));
    assert_eq!(response.body["score"], json!(150));
    assert_eq!(response.body["player"]["id"], json!(user.id));

    let missing = app.get("/api/games/live/nope", None).await;
    assert_error!(missing, StatusCode::NOT_FOUND, "Game not found");
}

async fn test_live_game_with_missing_player(app: TestApp) {
    app.state
        .live_games
        .upsert(live_game("ghost", 4242, GameMode::Walls, 3))
        .await;

    let single = app.get("/api/games/live/ghost", None).await;
    assert_error!(single, StatusCode::NOT_FOUND, "Player not found");

    let listed = app.get("/api/games/live", None).await;
    assert_eq!(listed.body, json!([]));
}

async fn test_seeded_live_game(app: TestApp) {
    let report = seed_sample_data(app.state.store.as_ref(), &app.state.live_games, 4)
        .await
        .expect("seeding should succeed")
        .expect("store starts empty");
    assert_eq!(report.live_games, 1);

    let response = app
        .get(&format!("/api/games/live/{}", SAMPLE_LIVE_GAME_ID), None)
        .await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["player"]["username"], json!("ProGamer"));
    assert_eq!(response.body["mode"], json!("walls"));
    assert!(response.body["player"].get("password").is_none());

    let leaderboard = app.get("/api/leaderboard?limit=1", None).await;
    assert_eq!(leaderboard.body[0]["user"]["username"], json!("HowlWizard"));
    assert_eq!(leaderboard.body[0]["score"], json!(2800));
}

for_each_backend!(
    test_no_live_games,
    test_list_live_games,
    test_get_live_game,
    test_live_game_with_missing_player,
    test_seeded_live_game,
);
