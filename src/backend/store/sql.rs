/**
 * SQLite Store
 *
 * Relational `GameStore` backed by a sqlx SQLite pool. The schema lives in
 * `migrations/` and is applied on connect.
 *
 * # Consistency
 *
 * - `users.username` and `users.email` carry `UNIQUE` constraints; a
 *   violation is translated into `StoreError::Duplicate`, so signup has no
 *   check-then-insert window.
 * - `record_score` runs in one transaction. It starts with the `INSERT`, so
 *   the connection holds SQLite's write lock before it reads the previous
 *   high score.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::backend::store::models::{
    NewScore, NewUser, ProfileUpdate, RankQuery, RecordedScore, ScoreEvent, User,
};
use crate::backend::store::{DuplicateField, GameStore, StoreError};
use crate::shared::GameMode;

/// `GameStore` backed by SQLite
#[derive(Debug, Clone)]
pub struct SqlStore {
    pool: SqlitePool,
}

/// Raw `scores` row; `mode` is stored as text
#[derive(Debug, sqlx::FromRow)]
struct ScoreRow {
    id: i64,
    user_id: i64,
    score: i64,
    mode: String,
    duration: i64,
    date: DateTime<Utc>,
}

impl TryFrom<ScoreRow> for ScoreEvent {
    type Error = StoreError;

    fn try_from(row: ScoreRow) -> Result<Self, Self::Error> {
        let mode = GameMode::from_str(&row.mode)
            .map_err(|e| StoreError::Corrupt(format!("score {}: {}", row.id, e)))?;

        Ok(ScoreEvent {
            id: row.id,
            user_id: row.user_id,
            score: row.score,
            mode,
            duration: row.duration,
            date: row.date,
        })
    }
}

impl SqlStore {
    /// Open (or create) the database at `database_url` and run migrations
    ///
    /// `database_url` is a sqlx SQLite URL such as `sqlite://snake_arena.db`
    /// or `sqlite::memory:`.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        let in_memory = database_url.contains(":memory:");
        let mut pool_options = SqlitePoolOptions::new();
        if in_memory {
            // an in-memory database lives exactly as long as its one connection
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        } else {
            pool_options = pool_options.max_connections(5);
        }

        let pool = pool_options.connect_with(options).await?;

        let store = Self { pool };
        store.run_migrations().await?;

        info!(in_memory, "SQLite store opened");
        Ok(store)
    }

    /// Private in-memory database (tests)
    pub async fn in_memory() -> Result<Self, StoreError> {
        Self::connect("sqlite::memory:").await
    }

    async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations completed");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Translate constraint violations into domain errors
fn map_write_error(err: sqlx::Error, user_id: Option<i64>) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let field = if db_err.message().contains("users.email") {
                DuplicateField::Email
            } else {
                DuplicateField::Username
            };
            return StoreError::Duplicate(field);
        }
        if db_err.is_foreign_key_violation() {
            if let Some(id) = user_id {
                return StoreError::UnknownUser(id);
            }
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl GameStore for SqlStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash, avatar, high_score, games_played, created_at)
            VALUES (?, ?, ?, ?, 0, 0, ?)
            RETURNING id, username, email, password_hash, avatar, high_score, games_played, created_at
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(&new_user.avatar)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, None))?;

        Ok(user)
    }

    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, avatar, high_score, games_played, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, avatar, high_score, games_played, created_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, avatar, high_score, games_played, created_at
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn update_user(
        &self,
        id: i64,
        update: ProfileUpdate,
    ) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = COALESCE(?, username), avatar = COALESCE(?, avatar)
            WHERE id = ?
            RETURNING id, username, email, password_hash, avatar, high_score, games_played, created_at
            "#,
        )
        .bind(update.username)
        .bind(update.avatar)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, Some(id)))?;

        Ok(user)
    }

    async fn record_score(
        &self,
        user_id: i64,
        score: NewScore,
    ) -> Result<RecordedScore, StoreError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ScoreRow>(
            r#"
            INSERT INTO scores (user_id, score, mode, duration, date)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, user_id, score, mode, duration, date
            "#,
        )
        .bind(user_id)
        .bind(score.score)
        .bind(score.mode.as_str())
        .bind(score.duration)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, Some(user_id)))?;

        let previous_high_score: i64 =
            sqlx::query_scalar("SELECT high_score FROM users WHERE id = ?")
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or(StoreError::UnknownUser(user_id))?;

        sqlx::query(
            r#"
            UPDATE users
            SET games_played = games_played + 1, high_score = MAX(high_score, ?)
            WHERE id = ?
            "#,
        )
        .bind(score.score)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(RecordedScore {
            event: ScoreEvent::try_from(row)?,
            previous_high_score,
        })
    }

    async fn rank(&self, query: RankQuery) -> Result<Vec<ScoreEvent>, StoreError> {
        let rows = match query.mode {
            Some(mode) => {
                sqlx::query_as::<_, ScoreRow>(
                    r#"
                    SELECT id, user_id, score, mode, duration, date
                    FROM scores
                    WHERE mode = ?
                    ORDER BY score DESC, id ASC
                    LIMIT ? OFFSET ?
                    "#,
                )
                .bind(mode.as_str())
                .bind(query.limit)
                .bind(query.offset)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ScoreRow>(
                    r#"
                    SELECT id, user_id, score, mode, duration, date
                    FROM scores
                    ORDER BY score DESC, id ASC
                    LIMIT ? OFFSET ?
                    "#,
                )
                .bind(query.limit)
                .bind(query.offset)
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter().map(ScoreEvent::try_from).collect()
    }
}
