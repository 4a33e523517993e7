//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Application router, service endpoints, layers
//! └── api_routes.rs   - API endpoints and the auth route layer
//! ```
//!
//! # Route Organization
//!
//! 1. **Service Routes** - `GET /`, `GET /health`
//! 2. **API Routes** - nested under the configured prefix (`/api`)
//! 3. **Fallback** - JSON 404
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use snake_arena::backend::routes::create_router;
//! use snake_arena::backend::server::{AppState, ServerConfig};
//! use snake_arena::backend::store::MemoryStore;
//!
//! let state = AppState::new(Arc::new(MemoryStore::new()), ServerConfig::default());
//! let router = create_router(state);
//! ```

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
