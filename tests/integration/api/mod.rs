//! API integration tests
//!
//! Integration tests for all API endpoints

mod games_test;
mod live_games_test;
mod users_test;
