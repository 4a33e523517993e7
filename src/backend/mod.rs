//! Backend Module
//!
//! All server-side code for Snake Arena: an Axum HTTP API for accounts,
//! score submission, leaderboards and live-game spectating.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, state, initialization, tracing
//! - **`routes`** - Router assembly and layers
//! - **`auth`** - Signup, login, logout, session tokens
//! - **`middleware`** - Bearer-token authentication
//! - **`users`** - Profile read and update
//! - **`games`** - Scores, leaderboard, live games
//! - **`avatars`** - Avatar catalog
//! - **`store`** - `GameStore` trait with memory and SQLite implementations
//! - **`extract`** - Validating JSON/query extractors
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── users/          - Profile handlers
//! ├── games/          - Game handlers and live registry
//! ├── store/          - Persistence
//! ├── avatars.rs      - Avatar catalog
//! ├── extract.rs      - Validating extractors
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds `Arc<dyn GameStore>`, the `TokenService`, the
//! `LiveGameRegistry` and the configuration. It is created once in
//! `server::init` and cloned into every handler.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and sessions
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// User profiles
pub mod users;

/// Scores, leaderboard and live games
pub mod games;

/// Avatar catalog
pub mod avatars;

/// User and score storage
pub mod store;

/// Validating extractors
pub mod extract;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
