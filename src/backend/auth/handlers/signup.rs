/**
 * Signup Handler
 *
 * POST /auth/signup
 *
 * # Registration Process
 *
 * 1. Validate username, email and password (422 on failure)
 * 2. Hash password using bcrypt
 * 3. Create user; the store rejects an email or username already in use (400)
 * 4. Issue a session token
 * 5. Return 201 with token and user info
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest, UserResponse};
use crate::backend::auth::password::hash_password;
use crate::backend::error::BackendError;
use crate::backend::extract::ValidatedJson;
use crate::backend::server::state::AppState;
use crate::backend::store::NewUser;

/// Sign up handler
///
/// # Errors
///
/// * `422 Unprocessable Entity` - a field broke a validation rule
/// * `400 Bad Request` - "Email already exists" / "Username already taken"
/// * `500 Internal Server Error` - hashing, storage or token signing failed
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "SnakeMaster",
///   "email": "snake@test.com",
///   "password": "password123",
///   "avatar": "https://api.dicebear.com/7.x/lorelei/svg?seed=Chihiro"
/// }
/// ```
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    tracing::info!(
        "Signup request for username: {}, email: {}",
        request.username,
        request.email
    );

    let password_hash = hash_password(&request.password, state.config.bcrypt_cost)?;

    let user = state
        .store
        .create_user(NewUser {
            username: request.username,
            email: request.email,
            password_hash,
            avatar: request.avatar,
        })
        .await
        .map_err(|e| {
            tracing::warn!("Signup rejected: {}", e);
            BackendError::from(e)
        })?;

    let token = state.tokens.issue(user.id)?;

    tracing::info!("User created successfully: {} ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            user: UserResponse::from(&user),
            token,
        }),
    ))
}
