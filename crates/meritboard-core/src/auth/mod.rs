//! Authentication module for session state and token persistence.
//!
//! This module provides:
//! - `Session` / `SessionManager`: the authentication state machine
//! - `AuthGateway`: the seam between session logic and the HTTP client
//! - `TokenStore`: durable single-token storage
//!
//! The bearer token is the only state that survives process restarts; the
//! structured session is rebuilt from it on load.

pub mod gateway;
pub mod session;
pub mod token_store;

pub use gateway::{AuthGateway, AuthPayload};
pub use session::{apply, Session, SessionAction, SessionError, SessionManager, SessionPhase};
pub use token_store::TokenStore;
