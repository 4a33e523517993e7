//! POST /auth/logout
//!
//! Revokes the presented token. Other tokens of the same user stay valid.

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::LogoutResponse;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

pub async fn logout(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Json<LogoutResponse> {
    state.tokens.revoke(&auth.token).await;

    tracing::info!("User logged out: {} ({})", auth.user.username, auth.user.id);

    Json(LogoutResponse { success: true })
}
