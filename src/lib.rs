//! Snake Arena - Main Library
//!
//! Snake Arena is the backend for a snake game's leaderboard and profile
//! service. Players sign up, log in with a bearer token, submit the scores of
//! finished games, browse the leaderboard, and look at games that are
//! currently being played.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types that are not tied to the server
//!   - Game modes, score submission and leaderboard query payloads
//!   - Field validation helpers and the `SharedError` type
//!
//! - **`backend`** - The Axum HTTP server
//!   - Configuration, application state, router assembly
//!   - Authentication (bcrypt passwords, JWT sessions, revocation)
//!   - Storage behind the `GameStore` trait (in-memory or SQLite)
//!   - Score, leaderboard and live-game handlers
//!
//! # Usage
//!
//! ```rust,no_run
//! use snake_arena::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for validation failures
//! - `backend::store::StoreError` for storage failures
//! - `backend::error::BackendError` for everything that reaches an HTTP response

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
