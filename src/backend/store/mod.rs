//! Storage Module
//!
//! Users and score events live behind the [`GameStore`] trait. Handlers only
//! see `Arc<dyn GameStore>`; which implementation backs it is decided once at
//! startup from `DATABASE_URL`.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs          - GameStore trait and StoreError
//! ├── models.rs       - User, ScoreEvent and write payloads
//! ├── memory.rs       - In-process implementation (tests, local runs)
//! ├── sql.rs          - SQLite implementation via sqlx
//! └── seed.rs         - Optional demo data
//! ```
//!
//! # Consistency
//!
//! - Username and email are unique. `SqlStore` enforces this with `UNIQUE`
//!   constraints; `MemoryStore` checks under its write lock.
//! - Recording a score appends the event and updates the player's
//!   `games_played` / `high_score` as one unit.
//! - Ranking orders by score descending, ties by insertion order.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

pub mod memory;
pub mod models;
pub mod seed;
pub mod sql;


pub use memory::MemoryStore;
pub use models::{NewScore, NewUser, ProfileUpdate, RankQuery, RecordedScore, ScoreEvent, User};
pub use sql::SqlStore;

/// Unique user attribute that collided on insert or update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    Email,
    Username,
}

impl fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => f.write_str("email"),
            Self::Username => f.write_str("username"),
        }
    }
}

/// Storage errors shared by both implementations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} already in use")]
    Duplicate(DuplicateField),

    #[error("User {0} does not exist")]
    UnknownUser(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

/// Credential and score storage
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Short name for logs (`memory` or `sqlite`)
    fn backend_name(&self) -> &'static str;

    /// Insert a user, failing with `Duplicate` on an email or username clash
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError>;

    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Apply the fields present in `update`; `None` when the user is absent
    async fn update_user(&self, id: i64, update: ProfileUpdate)
        -> Result<Option<User>, StoreError>;

    /// Append a score and update the player's counters in one step
    async fn record_score(&self, user_id: i64, score: NewScore)
        -> Result<RecordedScore, StoreError>;

    /// Scores for `query.mode` ordered best first, then sliced by offset/limit
    async fn rank(&self, query: RankQuery) -> Result<Vec<ScoreEvent>, StoreError>;
}
