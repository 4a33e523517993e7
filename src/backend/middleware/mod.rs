//! Middleware Module
//!
//! HTTP middleware and the extractors that read what it attaches.
//!
//! - **`auth`** - bearer-token authentication (`require_auth`, `AuthUser`, `MaybeUser`)
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use snake_arena::backend::middleware::{require_auth, AuthUser};
//! use snake_arena::backend::server::state::AppState;
//!
//! async fn whoami(AuthUser(auth): AuthUser) -> String {
//!     auth.user.username
//! }
//!
//! fn routes(state: AppState) -> Router<AppState> {
//!     Router::new()
//!         .route("/whoami", get(whoami))
//!         .route_layer(middleware::from_fn_with_state(state, require_auth))
//! }
//! ```

pub mod auth;

pub use auth::{authenticate, bearer_token, require_auth, AuthUser, AuthenticatedUser, MaybeUser};
