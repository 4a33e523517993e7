//! Field Validation
//!
//! Request payloads implement [`Validate`] so extractors can reject them with
//! a field-specific error before a handler runs.

use crate::shared::error::SharedError;

/// Minimum username length in characters
pub const USERNAME_MIN_LEN: usize = 3;

/// Maximum username length in characters
pub const USERNAME_MAX_LEN: usize = 20;

/// Minimum password length in characters
pub const PASSWORD_MIN_LEN: usize = 6;

/// Payloads that can check their own fields
pub trait Validate {
    /// Return the first field that violates its rule
    fn validate(&self) -> Result<(), SharedError>;
}

/// Check username length (3-20 characters)
pub fn validate_username(username: &str) -> Result<(), SharedError> {
    let len = username.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return Err(SharedError::validation(
            "username",
            format!(
                "Username must be {}-{} characters",
                USERNAME_MIN_LEN, USERNAME_MAX_LEN
            ),
        ));
    }
    Ok(())
}

/// Check email syntax
///
/// Accepts `local@domain.tld`: exactly one `@`, a non-empty local part, and a
/// domain made of non-empty dot-separated labels with at least one dot.
pub fn validate_email(email: &str) -> Result<(), SharedError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(SharedError::validation("email", "Invalid email format"))
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }

    domain.split('.').all(|label| !label.is_empty())
}

/// Check password length
pub fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {} characters", PASSWORD_MIN_LEN),
        ));
    }
    Ok(())
}

/// Check that a count or score is not negative
pub fn validate_non_negative(field: &str, value: i64) -> Result<(), SharedError> {
    if value < 0 {
        return Err(SharedError::validation(
            field,
            format!("{} must be greater than or equal to 0", field),
        ));
    }
    Ok(())
}
