//! Live game endpoints.
//!
//! - `GET /games/live?mode=` - active games, oldest first
//! - `GET /games/live/{id}` - one game, 404 when unknown
//!
//! Each game is returned with its player's public profile. Games whose
//! player cannot be found are left out of the list.

use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::error::BackendError;
use crate::backend::extract::ValidatedQuery;
use crate::backend::games::registry::LiveGame;
use crate::backend::server::state::AppState;
use crate::backend::store::User;
use crate::shared::{GameMode, LiveGamesQuery};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LiveGameResponse {
    pub id: String,
    pub player: UserResponse,
    pub score: i64,
    pub mode: GameMode,
    pub viewers: i64,
    pub started_at: DateTime<Utc>,
}

impl LiveGameResponse {
    fn new(game: LiveGame, player: &User) -> Self {
        Self {
            id: game.id,
            player: UserResponse::from(player),
            score: game.score,
            mode: game.mode,
            viewers: game.viewers,
            started_at: game.started_at,
        }
    }
}

pub async fn list_live_games(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<LiveGamesQuery>,
) -> Result<Json<Vec<LiveGameResponse>>, BackendError> {
    let games = state.live_games.list(query.game_mode()?).await;

    let mut listed = Vec::with_capacity(games.len());
    for game in games {
        match state.store.find_user_by_id(game.player_id).await? {
            Some(player) => listed.push(LiveGameResponse::new(game, &player)),
            None => tracing::warn!("Live game {} has no player {}", game.id, game.player_id),
        }
    }

    Ok(Json(listed))
}

pub async fn get_live_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<LiveGameResponse>, BackendError> {
    let game = state
        .live_games
        .get(&game_id)
        .await
        .ok_or_else(|| BackendError::not_found("Game not found"))?;

    let player = state
        .store
        .find_user_by_id(game.player_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Live game {} has no player {}", game.id, game.player_id);
            BackendError::not_found("Player not found")
        })?;

    Ok(Json(LiveGameResponse::new(game, &player)))
}
