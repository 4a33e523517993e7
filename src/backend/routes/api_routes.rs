/**
 * API Route Handlers
 *
 * Routes below are relative to the API prefix (`/api` by default).
 *
 * # Routes
 *
 * ## Public
 * - `POST /auth/signup` - User registration
 * - `POST /auth/login` - User login
 * - `GET /users/{id}` - Public profile (optional auth)
 * - `GET /avatars` - Avatar catalog
 * - `GET /leaderboard` - Ranked scores
 * - `GET /games/live` - Active games
 * - `GET /games/live/{id}` - One active game
 *
 * ## Authenticated (`require_auth` route layer)
 * - `POST /auth/logout` - Revoke the presented token
 * - `GET /auth/me` - Current user
 * - `PATCH /users/profile` - Update username/avatar
 * - `POST /games/score` - Submit a finished game
 */

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use crate::backend::auth::{get_me, login, logout, signup};
use crate::backend::avatars::list_avatars;
use crate::backend::games::{get_leaderboard, get_live_game, list_live_games, submit_score};
use crate::backend::middleware::require_auth;
use crate::backend::server::state::AppState;
use crate::backend::users::{get_user, update_profile};

/// Configure API routes
///
/// `app_state` is needed up front because the auth layer reads the store
/// and token service.
pub fn configure_api_routes(app_state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/users/{id}", get(get_user))
        .route("/avatars", get(list_avatars))
        .route("/leaderboard", get(get_leaderboard))
        .route("/games/live", get(list_live_games))
        .route("/games/live/{id}", get(get_live_game));

    let protected = Router::new()
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(get_me))
        .route("/users/profile", patch(update_profile))
        .route("/games/score", post(submit_score))
        .route_layer(middleware::from_fn_with_state(app_state, require_auth));

    public.merge(protected)
}
