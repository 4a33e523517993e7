//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── logout.rs   - Token revocation handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /auth/signup - User registration (201)
//! - **`login`** - POST /auth/login - User authentication
//! - **`logout`** - POST /auth/logout - Revoke the presented token
//! - **`get_me`** - GET /auth/me - Get current user info
//!
//! `logout` and `get_me` sit behind `require_auth`.

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Get current user handler
pub mod me;

pub use types::{AuthResponse, LoginRequest, LogoutResponse, SignupRequest, UserResponse};

pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use signup::signup;
