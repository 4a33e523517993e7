/**
 * Storage Models
 *
 * Records held by the stores and the payloads used to write them.
 * `User` carries the password hash and is therefore never serialised
 * directly; handlers convert it into `UserResponse` first.
 */

use chrono::{DateTime, Utc};

use crate::shared::error::SharedError;
use crate::shared::game::{GameMode, ScoreSubmission};

/// User struct representing a user in the store
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Username (unique, 3-20 chars)
    pub username: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Avatar image URL
    pub avatar: String,
    /// Best score over all submissions
    pub high_score: i64,
    /// Number of submitted games
    pub games_played: i64,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields needed to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub avatar: String,
}

/// Partial profile update; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub avatar: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.avatar.is_none()
    }
}

/// One recorded game result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEvent {
    pub id: i64,
    pub user_id: i64,
    pub score: i64,
    pub mode: GameMode,
    /// Game duration in seconds
    pub duration: i64,
    pub date: DateTime<Utc>,
}

/// Score to append for a user
#[derive(Debug, Clone, Copy)]
pub struct NewScore {
    pub score: i64,
    pub mode: GameMode,
    pub duration: i64,
}

impl TryFrom<&ScoreSubmission> for NewScore {
    type Error = SharedError;

    fn try_from(submission: &ScoreSubmission) -> Result<Self, Self::Error> {
        Ok(Self {
            score: submission.score,
            mode: submission.game_mode()?,
            duration: submission.duration,
        })
    }
}

/// Outcome of `record_score`
#[derive(Debug, Clone)]
pub struct RecordedScore {
    pub event: ScoreEvent,
    /// The player's high score before this event was applied
    pub previous_high_score: i64,
}

impl RecordedScore {
    /// A tie with the previous best does not count
    pub fn is_new_high_score(&self) -> bool {
        self.event.score > self.previous_high_score
    }
}

/// Leaderboard slice request
#[derive(Debug, Clone, Copy)]
pub struct RankQuery {
    pub mode: Option<GameMode>,
    pub limit: i64,
    pub offset: i64,
}

impl RankQuery {
    pub fn new(mode: Option<GameMode>, limit: i64, offset: i64) -> Self {
        Self {
            mode,
            limit: limit.max(0),
            offset: offset.max(0),
        }
    }
}
