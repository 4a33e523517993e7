/**
 * Application State Management
 *
 * `AppState` is the single container handed to the router. Everything a
 * handler needs is injected through it; there are no globals.
 *
 * # Contents
 *
 * - `store` - the `GameStore` chosen at startup (memory or SQLite)
 * - `tokens` - token issuer/validator and the revocation set
 * - `live_games` - in-memory registry of active games
 * - `config` - the loaded `ServerConfig`
 *
 * All fields are cheap to clone and share their underlying data.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the part they
 * need, e.g. `State(registry): State<LiveGameRegistry>`.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::sessions::TokenService;
use crate::backend::games::registry::LiveGameRegistry;
use crate::backend::server::config::ServerConfig;
use crate::backend::store::GameStore;

/// Shared state of the HTTP application
#[derive(Clone)]
pub struct AppState {
    /// User and score storage
    pub store: Arc<dyn GameStore>,

    /// Session tokens; clones share the revocation set
    pub tokens: TokenService,

    /// Active games
    pub live_games: LiveGameRegistry,

    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Assemble state around `store`, deriving the token service from `config`
    pub fn new(store: Arc<dyn GameStore>, config: ServerConfig) -> Self {
        let tokens = TokenService::new(config.jwt_secret.as_bytes(), config.token_ttl());

        Self {
            store,
            tokens,
            live_games: LiveGameRegistry::new(),
            config: Arc::new(config),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store.backend_name())
            .field("tokens", &self.tokens)
            .field("live_games", &self.live_games)
            .finish_non_exhaustive()
    }
}

impl FromRef<AppState> for Arc<dyn GameStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for LiveGameRegistry {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.live_games.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
