/**
 * User Profile Handlers
 *
 * - `GET /users/{id}` - public profile; optional auth, the owner's own
 *   profile comes from the authenticated user
 * - `PATCH /users/profile` - update the caller's username and/or avatar
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::error::BackendError;
use crate::backend::extract::ValidatedJson;
use crate::backend::middleware::{AuthUser, MaybeUser};
use crate::backend::server::state::AppState;
use crate::backend::store::ProfileUpdate;
use crate::shared::validation::validate_username;
use crate::shared::{SharedError, Validate};

/// Profile update request; absent fields are left unchanged
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub avatar: Option<String>,
}

impl Validate for UpdateProfileRequest {
    fn validate(&self) -> Result<(), SharedError> {
        match &self.username {
            Some(username) => validate_username(username),
            None => Ok(()),
        }
    }
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        Self {
            username: request.username,
            avatar: request.avatar,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateProfileResponse {
    pub success: bool,
    pub user: UserResponse,
}

/// Get user by id
///
/// A non-numeric id cannot name a user and is reported as not found. A
/// caller asking for their own profile is answered from the authenticated
/// user without a second store lookup.
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    MaybeUser(viewer): MaybeUser,
) -> Result<Json<UserResponse>, BackendError> {
    let not_found = || BackendError::not_found("User not found");

    let id: i64 = user_id.parse().map_err(|_| {
        tracing::debug!("Non-numeric user id requested: {}", user_id);
        not_found()
    })?;

    if let Some(viewer) = viewer.filter(|viewer| viewer.user.id == id) {
        tracing::debug!(user_id = id, "Own profile viewed");
        return Ok(Json(UserResponse::from(viewer.user)));
    }

    let user = state.store.find_user_by_id(id).await?.ok_or_else(not_found)?;
    Ok(Json(UserResponse::from(&user)))
}

/// Update the authenticated user's profile
///
/// # Errors
///
/// * `422 Unprocessable Entity` - username outside 3-20 characters
/// * `400 Bad Request` - "Username already taken"
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<UpdateProfileResponse>, BackendError> {
    let update = ProfileUpdate::from(request);
    if update.is_empty() {
        return Ok(Json(UpdateProfileResponse {
            success: true,
            user: UserResponse::from(&auth.user),
        }));
    }

    let user = state
        .store
        .update_user(auth.user.id, update)
        .await
        .map_err(|e| {
            tracing::warn!("Profile update rejected for {}: {}", auth.user.id, e);
            BackendError::from(e)
        })?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    tracing::info!("Profile updated: {} ({})", user.username, user.id);

    Ok(Json(UpdateProfileResponse {
        success: true,
        user: UserResponse::from(&user),
    }))
}
