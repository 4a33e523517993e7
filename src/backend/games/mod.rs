//! Games Module
//!
//! Score submission, leaderboard and live-game spectating.
//!
//! # Module Structure
//!
//! ```text
//! games/
//! ├── mod.rs          - Module exports
//! ├── registry.rs     - LiveGameRegistry (in-memory active games)
//! ├── score.rs        - POST /games/score
//! ├── leaderboard.rs  - GET /leaderboard
//! └── live.rs         - GET /games/live, GET /games/live/{id}
//! ```

pub mod leaderboard;
pub mod live;
pub mod registry;
pub mod score;

pub use leaderboard::{get_leaderboard, LeaderboardEntry};
pub use live::{get_live_game, list_live_games, LiveGameResponse};
pub use registry::{LiveGame, LiveGameRegistry};
pub use score::{submit_score, RANK_SCAN_LIMIT};
