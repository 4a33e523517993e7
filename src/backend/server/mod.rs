//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - ServerConfig loaded from the environment
//! ├── init.rs         - Store selection, seeding and app creation
//! └── tracing_init.rs - tracing-subscriber setup
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Tracing**: `init_tracing` with the configured format
//! 3. **Store**: SQLite or memory, chosen from `DATABASE_URL`
//! 4. **State Creation**: token service, live game registry
//! 5. **Router Creation**: routes, auth layer, CORS and request tracing
//!
//! # Example
//!
//! ```rust,no_run
//! use snake_arena::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

/// Logging setup
pub mod tracing_init;

pub use config::{ConfigError, LogFormat, ServerConfig};
pub use init::{build_state, create_app, InitError};
pub use state::AppState;
pub use tracing_init::{init_tracing, DEFAULT_LOG_FILTER};
