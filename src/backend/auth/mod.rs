//! Authentication Module
//!
//! Registration, login, logout and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - bcrypt hashing and verification
//! ├── sessions.rs     - TokenService (JWT issue/validate, revocation set)
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username, email, password, avatar → user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Me**: token → user info returned
//! 4. **Logout**: token → revoked; later use of it is rejected
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (configurable cost) before storage
//! - Tokens are HS256 JWTs with a configurable lifetime (7 days by default)
//! - Every authentication failure returns the same 401 body

/// Password hashing
pub mod password;

/// JWT token management
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use handlers::{get_me, login, logout, signup};
pub use sessions::TokenService;
