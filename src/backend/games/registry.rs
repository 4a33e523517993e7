/**
 * Live Game Registry
 *
 * Transient, in-memory set of games currently being played. Entries are
 * written by whatever process runs the game sessions (and by sample-data
 * seeding); the HTTP API only reads them.
 *
 * Nothing here is persisted. A restart starts with an empty registry.
 */

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::shared::GameMode;

/// One active game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveGame {
    pub id: String,
    pub player_id: i64,
    pub score: i64,
    pub mode: GameMode,
    pub viewers: i64,
    pub started_at: DateTime<Utc>,
}

/// Shared map of live games keyed by id
///
/// Cheap to clone; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct LiveGameRegistry {
    games: Arc<RwLock<HashMap<String, LiveGame>>>,
}

impl LiveGameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a game, replacing any entry with the same id
    pub async fn upsert(&self, game: LiveGame) {
        tracing::debug!(game_id = %game.id, player_id = game.player_id, "Live game updated");
        self.games.write().await.insert(game.id.clone(), game);
    }

    pub async fn remove(&self, id: &str) -> Option<LiveGame> {
        self.games.write().await.remove(id)
    }

    pub async fn get(&self, id: &str) -> Option<LiveGame> {
        self.games.read().await.get(id).cloned()
    }

    /// Games in `mode` (all when `None`), oldest first
    pub async fn list(&self, mode: Option<GameMode>) -> Vec<LiveGame> {
        let games = self.games.read().await;

        let mut listed: Vec<LiveGame> = games
            .values()
            .filter(|game| mode.map_or(true, |m| game.mode == m))
            .cloned()
            .collect();
        listed.sort_by(|a, b| {
            a.started_at
                .cmp(&b.started_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        listed
    }

    pub async fn clear(&self) {
        self.games.write().await.clear();
    }
}
