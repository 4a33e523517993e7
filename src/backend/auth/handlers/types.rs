/**
 * Authentication Handler Types
 *
 * Request and response bodies shared by the auth and user handlers.
 * Field names on the wire are camelCase.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::store::User;
use crate::shared::validation::{validate_email, validate_password, validate_username};
use crate::shared::{SharedError, Validate};

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SignupRequest {
    /// 3-20 characters, unique
    pub username: String,
    /// Unique email address
    pub email: String,
    /// At least 6 characters; hashed before storage
    pub password: String,
    /// Avatar image URL
    pub avatar: String,
}

impl Validate for SignupRequest {
    fn validate(&self) -> Result<(), SharedError> {
        validate_username(&self.username)?;
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), SharedError> {
        // any string may be tried; a bad one just fails to authenticate
        Ok(())
    }
}

/// Auth response
///
/// Returned by signup and login.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub success: bool,
    /// User information (without sensitive data)
    pub user: UserResponse,
    /// Bearer token for the `Authorization` header
    pub token: String,
}

/// Logout response
#[derive(Serialize, Deserialize, Debug)]
pub struct LogoutResponse {
    pub success: bool,
}

/// User response (without sensitive data)
///
/// The only shape in which a user leaves the server. Has no field for the
/// password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User's unique ID, as a string
    pub id: String,
    pub username: String,
    pub email: String,
    pub avatar: String,
    pub high_score: i64,
    pub games_played: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
            high_score: user.high_score,
            games_played: user.games_played,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}
