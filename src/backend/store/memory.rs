/**
 * In-Memory Store
 *
 * Keeps users and scores in process memory behind a single
 * `tokio::sync::RwLock`. Every write takes the write lock for its whole
 * duration, which makes uniqueness checks and score recording atomic with
 * respect to other requests. Contents are lost on restart.
 */

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::backend::store::models::{
    NewScore, NewUser, ProfileUpdate, RankQuery, RecordedScore, ScoreEvent, User,
};
use crate::backend::store::{DuplicateField, GameStore, StoreError};

#[derive(Debug, Default)]
struct MemoryTables {
    users: BTreeMap<i64, User>,
    /// Append-only, in arrival order
    scores: Vec<ScoreEvent>,
    last_user_id: i64,
    last_score_id: i64,
}

/// `GameStore` backed by process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<MemoryTables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every user and score and restart id numbering
    pub async fn reset(&self) {
        *self.tables.write().await = MemoryTables::default();
        tracing::debug!("Memory store reset");
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.email == new_user.email) {
            return Err(StoreError::Duplicate(DuplicateField::Email));
        }
        if tables.users.values().any(|u| u.username == new_user.username) {
            return Err(StoreError::Duplicate(DuplicateField::Username));
        }

        tables.last_user_id += 1;
        let user = User {
            id: tables.last_user_id,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            avatar: new_user.avatar,
            high_score: 0,
            games_played: 0,
            created_at: Utc::now(),
        };
        tables.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.username == username).cloned())
    }

    async fn update_user(
        &self,
        id: i64,
        update: ProfileUpdate,
    ) -> Result<Option<User>, StoreError> {
        let mut tables = self.tables.write().await;

        if !tables.users.contains_key(&id) {
            return Ok(None);
        }

        if let Some(username) = &update.username {
            let taken = tables
                .users
                .values()
                .any(|u| u.id != id && &u.username == username);
            if taken {
                return Err(StoreError::Duplicate(DuplicateField::Username));
            }
        }

        let Some(user) = tables.users.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(avatar) = update.avatar {
            user.avatar = avatar;
        }

        Ok(Some(user.clone()))
    }

    async fn record_score(
        &self,
        user_id: i64,
        score: NewScore,
    ) -> Result<RecordedScore, StoreError> {
        let mut guard = self.tables.write().await;
        let tables = &mut *guard;

        let user = tables
            .users
            .get_mut(&user_id)
            .ok_or(StoreError::UnknownUser(user_id))?;

        let previous_high_score = user.high_score;
        user.games_played += 1;
        if score.score > user.high_score {
            user.high_score = score.score;
        }

        tables.last_score_id += 1;
        let event = ScoreEvent {
            id: tables.last_score_id,
            user_id,
            score: score.score,
            mode: score.mode,
            duration: score.duration,
            date: Utc::now(),
        };
        tables.scores.push(event.clone());

        Ok(RecordedScore {
            event,
            previous_high_score,
        })
    }

    async fn rank(&self, query: RankQuery) -> Result<Vec<ScoreEvent>, StoreError> {
        let tables = self.tables.read().await;

        let mut ranked: Vec<&ScoreEvent> = tables
            .scores
            .iter()
            .filter(|event| query.mode.map_or(true, |mode| event.mode == mode))
            .collect();
        // stable sort: equal scores stay in arrival order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        let offset = usize::try_from(query.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.limit).unwrap_or(0);

        Ok(ranked
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}
