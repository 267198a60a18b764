//! Core library for meritboard - API client, models, session auth.
//!
//! Everything a meritboard front-end needs to talk to the platform's REST
//! backend:
//!
//! - [`api::ApiClient`]: authenticated HTTP client for auth, events,
//!   achievements, users, and the leaderboard
//! - [`auth::SessionManager`]: the authentication session state machine,
//!   with a pure reducer and a mockable gateway seam
//! - [`auth::TokenStore`]: durable bearer-token persistence across restarts
//! - [`models`]: typed domain records decoded from the server's JSON
//!
//! Dashboard rendering is out of scope; front-ends own routing and
//! role-gating and read session state through [`auth::Session`].

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{ApiClient, ApiError};
pub use auth::{AuthGateway, Session, SessionError, SessionManager, SessionPhase, TokenStore};
pub use config::Config;
