/**
 * Authentication Middleware
 *
 * Resolves `Authorization: Bearer <token>` to a stored user. The pipeline
 * is the same for the required and the optional variant:
 *
 * 1. Header present and using the `Bearer` scheme (case-insensitive)
 * 2. Token not revoked
 * 3. Token signature and expiry valid
 * 4. Subject names an existing user
 *
 * Any failed step rejects with `BackendError::Unauthorized`; the client
 * cannot tell which step failed.
 */

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::store::User;

/// Caller identity attached to request extensions by `require_auth`
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user: User,
    /// The raw bearer token (logout revokes it)
    pub token: String,
}

/// Token part of a `Bearer` authorization header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Run the auth pipeline against request headers
pub async fn authenticate(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<AuthenticatedUser, BackendError> {
    let token = bearer_token(headers).ok_or_else(|| {
        tracing::debug!("Missing or malformed authorization header");
        BackendError::Unauthorized
    })?;

    if state.tokens.is_revoked(token).await {
        tracing::warn!("Revoked token presented");
        return Err(BackendError::Unauthorized);
    }

    let user_id = state.tokens.validate(token).ok_or_else(|| {
        tracing::warn!("Invalid or expired token");
        BackendError::Unauthorized
    })?;

    let user = state
        .store
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token subject {} does not exist", user_id);
            BackendError::Unauthorized
        })?;

    Ok(AuthenticatedUser {
        user,
        token: token.to_string(),
    })
}

/// Authentication middleware
///
/// Attaches `AuthenticatedUser` to request extensions for handlers behind
/// it; rejects with 401 otherwise.
pub async fn require_auth(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let authenticated = authenticate(&app_state, request.headers()).await?;
    request.extensions_mut().insert(authenticated);

    Ok(next.run(request).await)
}

/// Axum extractor for the user set by `require_auth`
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::Unauthorized
            })?;

        Ok(AuthUser(user))
    }
}

/// Optional authentication: `None` wherever `require_auth` would reject
///
/// Storage failures still surface as errors.
#[derive(Clone, Debug)]
pub struct MaybeUser(pub Option<AuthenticatedUser>);

impl<S> FromRequestParts<S> for MaybeUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(MaybeUser(Some(user.clone())));
        }

        let app_state = AppState::from_ref(state);
        match authenticate(&app_state, &parts.headers).await {
            Ok(user) => Ok(MaybeUser(Some(user))),
            Err(BackendError::Unauthorized) => Ok(MaybeUser(None)),
            Err(other) => Err(other),
        }
    }
}
