/**
 * Login Handler
 *
 * POST /auth/login
 *
 * An unknown email and a wrong password produce the same 401 body.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::backend::auth::password::verify_password;
use crate::backend::error::BackendError;
use crate::backend::extract::ValidatedJson;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - "Invalid email or password"
/// * `500 Internal Server Error` - storage or token signing failed
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.email);

    let user = state
        .store
        .find_user_by_email(&request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", request.email);
            BackendError::InvalidCredentials
        })?;

    if !verify_password(&request.password, &user.password_hash) {
        tracing::warn!("Invalid password for user: {}", user.username);
        return Err(BackendError::InvalidCredentials);
    }

    let token = state.tokens.issue(user.id)?;

    tracing::info!("User logged in successfully: {} ({})", user.username, user.id);

    Ok(Json(AuthResponse {
        success: true,
        user: UserResponse::from(&user),
        token,
    }))
}
