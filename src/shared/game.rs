//! Game Types
//!
//! Game modes and the payloads exchanged by the score and leaderboard
//! endpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::{validate_non_negative, Validate};

/// Default number of leaderboard entries per page
pub const DEFAULT_LEADERBOARD_LIMIT: i64 = 50;

/// Largest page a leaderboard query may request
pub const MAX_LEADERBOARD_LIMIT: i64 = 100;

/// Game-rule variant that partitions scores and leaderboards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// The snake wraps around the board edges
    PassThrough,
    /// Touching a board edge ends the game
    Walls,
}

impl GameMode {
    /// Wire and storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PassThrough => "pass-through",
            Self::Walls => "walls",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = SharedError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pass-through" => Ok(Self::PassThrough),
            "walls" => Ok(Self::Walls),
            other => Err(SharedError::unknown_mode(other)),
        }
    }
}

/// Result of a finished game, submitted by the player
///
/// `mode` is kept as sent and checked by `validate`, so an unknown mode is
/// reported against the `mode` field like any other bad value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSubmission {
    /// Final score (>= 0)
    pub score: i64,
    /// Mode the game was played in
    pub mode: String,
    /// Game duration in seconds (>= 0)
    pub duration: i64,
}

impl ScoreSubmission {
    pub fn game_mode(&self) -> Result<GameMode, SharedError> {
        self.mode.parse()
    }
}

impl Validate for ScoreSubmission {
    fn validate(&self) -> Result<(), SharedError> {
        validate_non_negative("score", self.score)?;
        self.game_mode()?;
        validate_non_negative("duration", self.duration)
    }
}

/// Response to a score submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmissionResponse {
    pub success: bool,
    /// True only when the score beats the previous high score
    pub new_high_score: bool,
    /// Best position of the player on the leaderboard for this mode
    pub rank: Option<i64>,
}

/// Query string of `GET /leaderboard`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaderboardQuery {
    pub mode: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl LeaderboardQuery {
    /// Mode filter; `None` ranks both modes together
    pub fn game_mode(&self) -> Result<Option<GameMode>, SharedError> {
        parse_mode_filter(self.mode.as_deref())
    }

    /// Page size, defaulting to 50
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT)
    }

    /// Number of ranked entries to skip, defaulting to 0
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }
}

impl Validate for LeaderboardQuery {
    fn validate(&self) -> Result<(), SharedError> {
        let limit = self.limit();
        if !(1..=MAX_LEADERBOARD_LIMIT).contains(&limit) {
            return Err(SharedError::validation(
                "limit",
                format!("limit must be between 1 and {}", MAX_LEADERBOARD_LIMIT),
            ));
        }
        validate_non_negative("offset", self.offset())?;
        self.game_mode().map(|_| ())
    }
}

/// Query string of `GET /games/live`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveGamesQuery {
    pub mode: Option<String>,
}

impl LiveGamesQuery {
    pub fn game_mode(&self) -> Result<Option<GameMode>, SharedError> {
        parse_mode_filter(self.mode.as_deref())
    }
}

impl Validate for LiveGamesQuery {
    fn validate(&self) -> Result<(), SharedError> {
        self.game_mode().map(|_| ())
    }
}

fn parse_mode_filter(mode: Option<&str>) -> Result<Option<GameMode>, SharedError> {
    mode.map(str::parse).transpose()
}
