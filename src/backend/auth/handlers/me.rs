/**
 * Get Current User Handler
 *
 * GET /auth/me
 *
 * Runs behind `require_auth`, which has already resolved the bearer token
 * to a stored user.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Example Response
///
/// ```json
/// {
///   "id": "1",
///   "username": "SnakeMaster",
///   "email": "snake@test.com",
///   "avatar": "https://api.dicebear.com/7.x/lorelei/svg?seed=Chihiro",
///   "highScore": 2450,
///   "gamesPlayed": 4,
///   "createdAt": "2025-01-01T12:00:00Z"
/// }
/// ```
pub async fn get_me(AuthUser(auth): AuthUser) -> Json<UserResponse> {
    Json(UserResponse::from(&auth.user))
}
