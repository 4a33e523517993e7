//! User profile endpoints.

pub mod handlers;

pub use handlers::{get_user, update_profile, UpdateProfileRequest, UpdateProfileResponse};
