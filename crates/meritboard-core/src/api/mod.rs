//! REST API client module for the meritboard backend.
//!
//! This module provides the `ApiClient` for communicating with the
//! platform API: auth, events, achievements, users, and the leaderboard.
//!
//! The API uses JWT bearer token authentication obtained through the
//! `/auth/login` and `/auth/register` endpoints.

pub mod client;
pub mod error;

pub use client::{
    AchievementQuery, ApiClient, EventQuery, HealthStatus, LeaderboardQuery, Page, UserQuery,
};
pub use error::ApiError;
