//! Shared Types Module
//!
//! Types that describe the public API surface independently of the server:
//! game modes, request payloads for scores and leaderboard queries, and the
//! validation rules applied to incoming fields.
//!
//! # Module Structure
//!
//! ```text
//! shared/
//! ├── mod.rs         - Module exports
//! ├── error.rs       - SharedError (validation failures)
//! ├── game.rs        - GameMode and game payloads
//! └── validation.rs  - Validate trait and field rules
//! ```

pub mod error;
pub mod game;
pub mod validation;

pub use error::SharedError;
pub use game::{GameMode, LeaderboardQuery, LiveGamesQuery, ScoreSubmission, ScoreSubmissionResponse};
pub use validation::Validate;
