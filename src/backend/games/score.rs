/**
 * Score Submission
 *
 * POST /games/score
 *
 * Records a finished game for the authenticated player, then reports whether
 * it beat their previous best and where the player now stands in that mode.
 *
 * # Rank
 *
 * The rank is the position of the player's best entry among the top
 * `RANK_SCAN_LIMIT` scores of the mode. Players outside that window get
 * `rank: null`.
 */

use axum::{extract::State, response::Json};

use crate::backend::error::BackendError;
use crate::backend::extract::ValidatedJson;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::store::{GameStore, NewScore, RankQuery, StoreError};
use crate::shared::{GameMode, ScoreSubmission, ScoreSubmissionResponse};

/// How many top scores are scanned to find a player's rank
pub const RANK_SCAN_LIMIT: i64 = 1000;

/// 1-based leaderboard position of the player's best score in `mode`
pub async fn leaderboard_position(
    store: &dyn GameStore,
    user_id: i64,
    mode: GameMode,
) -> Result<Option<i64>, StoreError> {
    let ranked = store
        .rank(RankQuery::new(Some(mode), RANK_SCAN_LIMIT, 0))
        .await?;

    Ok(ranked
        .iter()
        .position(|event| event.user_id == user_id)
        .and_then(|index| i64::try_from(index + 1).ok()))
}

/// Submit score handler
///
/// # Example Response
///
/// ```json
/// { "success": true, "newHighScore": true, "rank": 3 }
/// ```
pub async fn submit_score(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    ValidatedJson(submission): ValidatedJson<ScoreSubmission>,
) -> Result<Json<ScoreSubmissionResponse>, BackendError> {
    let new_score = NewScore::try_from(&submission)?;
    let mode = new_score.mode;

    let recorded = state
        .store
        .record_score(auth.user.id, new_score)
        .await
        .map_err(|e| {
            tracing::error!("Failed to record score for {}: {}", auth.user.id, e);
            BackendError::from(e)
        })?;

    let new_high_score = recorded.is_new_high_score();
    let rank = leaderboard_position(state.store.as_ref(), auth.user.id, mode).await?;

    tracing::info!(
        user_id = auth.user.id,
        score = submission.score,
        mode = %mode,
        new_high_score,
        ?rank,
        "Score recorded"
    );

    Ok(Json(ScoreSubmissionResponse {
        success: true,
        new_high_score,
        rank,
    }))
}
