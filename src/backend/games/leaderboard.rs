/**
 * Leaderboard
 *
 * GET /leaderboard?mode=&limit=&offset=
 *
 * Entries come from `GameStore::rank`, best score first. `rank` numbering
 * starts at `offset + 1`. An entry whose player no longer resolves is left
 * out, but keeps its number, so ranks stay stable across pages.
 */

use axum::{extract::State, response::Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::error::BackendError;
use crate::backend::extract::ValidatedQuery;
use crate::backend::server::state::AppState;
use crate::backend::store::{GameStore, RankQuery, StoreError, User};
use crate::shared::{GameMode, LeaderboardQuery};

/// One row of the leaderboard
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub user: UserResponse,
    pub score: i64,
    pub mode: GameMode,
    pub date: DateTime<Utc>,
}

/// Build one leaderboard page
///
/// Ranks count from `query.offset + 1` and saturate at `i64::MAX`.
pub async fn build_leaderboard(
    store: &dyn GameStore,
    query: RankQuery,
) -> Result<Vec<LeaderboardEntry>, StoreError> {
    let events = store.rank(query).await?;

    // a player usually holds several entries on a page
    let mut players: HashMap<i64, Option<User>> = HashMap::new();
    let mut entries = Vec::with_capacity(events.len());

    for (index, event) in (1i64..).zip(events) {
        let position = query.offset.saturating_add(index);
        let player = match players.get(&event.user_id) {
            Some(cached) => cached.clone(),
            None => {
                let found = store.find_user_by_id(event.user_id).await?;
                players.insert(event.user_id, found.clone());
                found
            }
        };

        let Some(player) = player else {
            tracing::warn!("Score {} references missing user {}", event.id, event.user_id);
            continue;
        };

        entries.push(LeaderboardEntry {
            rank: position,
            user: UserResponse::from(&player),
            score: event.score,
            mode: event.mode,
            date: event.date,
        });
    }

    Ok(entries)
}

/// Get leaderboard handler
pub async fn get_leaderboard(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<LeaderboardQuery>,
) -> Result<Json<Vec<LeaderboardEntry>>, BackendError> {
    let rank_query = RankQuery::new(query.game_mode()?, query.limit(), query.offset());
    let entries = build_leaderboard(state.store.as_ref(), rank_query).await?;

    tracing::debug!(
        mode = ?rank_query.mode,
        limit = query.limit(),
        offset = query.offset(),
        returned = entries.len(),
        "Leaderboard served"
    );

    Ok(Json(entries))
}
