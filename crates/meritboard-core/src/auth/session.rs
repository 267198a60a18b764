//! The authentication session state machine.
//!
//! State lives in [`Session`] and changes only through the pure [`apply`]
//! reducer; [`SessionManager`] is the orchestration layer that performs the
//! network calls and dispatches their outcomes. Failed operations record
//! their message in `last_error` *and* re-raise to the caller: one channel
//! drives global UI (banners), the other local form feedback.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::api::ApiError;
use crate::auth::gateway::{AuthGateway, AuthPayload};
use crate::auth::token_store::TokenStore;
use crate::models::{ProfileUpdate, RegisterRequest, Role, User};

/// Message recorded when a persisted token is rejected on restore.
const SESSION_EXPIRED: &str = "Session expired";

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Created at process start; also the in-flight state of auth operations.
    #[default]
    Initializing,
    Authenticated,
    Unauthenticated,
    Failed,
}

/// The in-memory authentication state.
///
/// Invariants: `Authenticated` holds exactly when both `identity` and
/// `token` are present; `Unauthenticated` and `Failed` hold neither, and
/// `Failed` always carries a `last_error`. The structured session is never
/// persisted - only the bearer token survives restarts, via [`TokenStore`].
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub identity: Option<User>,
    pub token: Option<String>,
    pub phase: SessionPhase,
    pub last_error: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    /// The authenticated user's role. Present and trustworthy whenever
    /// `phase` is `Authenticated`; gating on it is the caller's job.
    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|user| user.role)
    }
}

/// A session transition. Every mutation of [`Session`] goes through
/// [`apply`] with one of these.
#[derive(Debug, Clone)]
pub enum SessionAction {
    /// An auth operation went in flight; clears any prior error.
    Started,
    /// Login, registration, or restore succeeded.
    Established { identity: User, token: String },
    /// An auth operation failed with the given message.
    Rejected(String),
    /// Logout, or restore finding no stored token.
    Cleared,
    /// A profile update replaced the identity in place.
    IdentityReplaced(User),
    /// `clear_error` was requested.
    ErrorCleared,
}

/// The pure transition function: no I/O, no side effects.
pub fn apply(session: Session, action: SessionAction) -> Session {
    match action {
        SessionAction::Started => Session {
            phase: SessionPhase::Initializing,
            last_error: None,
            ..session
        },
        SessionAction::Established { identity, token } => Session {
            identity: Some(identity),
            token: Some(token),
            phase: SessionPhase::Authenticated,
            last_error: None,
        },
        // A failed attempt never leaves a partial session behind
        SessionAction::Rejected(message) => Session {
            identity: None,
            token: None,
            phase: SessionPhase::Failed,
            last_error: Some(message),
        },
        SessionAction::Cleared => Session {
            identity: None,
            token: None,
            phase: SessionPhase::Unauthenticated,
            last_error: None,
        },
        SessionAction::IdentityReplaced(identity) => Session {
            identity: Some(identity),
            last_error: None,
            ..session
        },
        SessionAction::ErrorCleared => Session {
            last_error: None,
            ..session
        },
    }
}

/// Errors raised by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Caller-side validation failure, rejected before any network call or
    /// state transition.
    #[error("{0}")]
    Validation(String),

    /// A gateway failure, re-raised after being recorded in `last_error`.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Owns the [`Session`] and drives its transitions.
///
/// Exactly one manager exists per running client; construct it at startup
/// and hand it to the dashboard layer (dependency injection, not a global).
/// Operations take `&mut self`, so a single owner cannot have two of them
/// in flight at once - callers that want overlapping attempts must wrap
/// the manager in a lock, and the later completion then wins.
pub struct SessionManager<G> {
    gateway: G,
    tokens: Arc<TokenStore>,
    session: Session,
}

impl<G: AuthGateway> SessionManager<G> {
    /// Create a manager with a fresh session in the `Initializing` phase.
    pub fn new(gateway: G, tokens: Arc<TokenStore>) -> Self {
        Self {
            gateway,
            tokens,
            session: Session::default(),
        }
    }

    /// The current session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn dispatch(&mut self, action: SessionAction) {
        self.session = apply(std::mem::take(&mut self.session), action);
    }

    /// Restore the session from the persisted token. Invoke once at process
    /// start, and await it before gating anything on `phase`.
    ///
    /// A missing token is the normal cold start, not an error. A token the
    /// server rejects is purged and surfaced as `"Session expired"` through
    /// `last_error` only - there is no caller to re-raise to.
    pub async fn restore_on_load(&mut self) {
        let Some(token) = self.tokens.get() else {
            self.dispatch(SessionAction::Cleared);
            return;
        };

        self.dispatch(SessionAction::Started);
        match self.gateway.current_user().await {
            Ok(identity) => {
                info!(user = %identity.email, "session restored");
                self.dispatch(SessionAction::Established { identity, token });
            }
            Err(error) => {
                warn!(%error, "stored token rejected by server");
                if let Err(error) = self.tokens.clear() {
                    warn!(%error, "failed to purge rejected token");
                }
                self.dispatch(SessionAction::Rejected(SESSION_EXPIRED.to_string()));
            }
        }
    }

    /// Log in and return the identity/token pair. The gateway persists the
    /// token before this returns.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<AuthPayload, SessionError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(SessionError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        self.dispatch(SessionAction::Started);
        match self.gateway.login(email, password).await {
            Ok(payload) => {
                info!(user = %payload.user.email, "login succeeded");
                self.dispatch(SessionAction::Established {
                    identity: payload.user.clone(),
                    token: payload.token.clone(),
                });
                Ok(payload)
            }
            Err(error) => {
                self.dispatch(SessionAction::Rejected(surface_message(
                    &error,
                    "Login failed",
                )));
                Err(error.into())
            }
        }
    }

    /// Register a new account and establish its session.
    pub async fn register(&mut self, request: &RegisterRequest) -> Result<(), SessionError> {
        if request.name.trim().is_empty()
            || request.email.trim().is_empty()
            || request.password.is_empty()
        {
            return Err(SessionError::Validation(
                "Name, email, and password are required".to_string(),
            ));
        }

        self.dispatch(SessionAction::Started);
        match self.gateway.register(request).await {
            Ok(payload) => {
                info!(user = %payload.user.email, "registration succeeded");
                self.dispatch(SessionAction::Established {
                    identity: payload.user,
                    token: payload.token,
                });
                Ok(())
            }
            Err(error) => {
                self.dispatch(SessionAction::Rejected(surface_message(
                    &error,
                    "Registration failed",
                )));
                Err(error.into())
            }
        }
    }

    /// Log out. The server call is best effort - its failure is logged and
    /// swallowed, and the local session and stored token are cleared
    /// unconditionally.
    pub async fn logout(&mut self) {
        if let Err(error) = self.gateway.logout().await {
            warn!(%error, "logout request failed; clearing local session anyway");
        }
        if let Err(error) = self.tokens.clear() {
            warn!(%error, "failed to clear stored token");
        }
        self.dispatch(SessionAction::Cleared);
    }

    /// Update the current user's profile, replacing the identity with the
    /// server-returned record.
    pub async fn update_identity(&mut self, update: &ProfileUpdate) -> Result<(), SessionError> {
        match self.gateway.update_details(update).await {
            Ok(identity) => {
                self.dispatch(SessionAction::IdentityReplaced(identity));
                Ok(())
            }
            Err(error) => {
                self.dispatch(SessionAction::Rejected(surface_message(
                    &error,
                    "Update failed",
                )));
                Err(error.into())
            }
        }
    }

    /// Change the current user's password. When the server rotates the
    /// token, the store is updated; the in-memory session is untouched on
    /// the happy path.
    pub async fn update_credential(
        &mut self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), SessionError> {
        if current_password.is_empty() || new_password.is_empty() {
            return Err(SessionError::Validation(
                "Current and new passwords are required".to_string(),
            ));
        }

        match self
            .gateway
            .update_password(current_password, new_password)
            .await
        {
            Ok(rotated) => {
                if let Some(token) = rotated {
                    if let Err(error) = self.tokens.set(Some(&token)) {
                        warn!(%error, "failed to persist rotated token");
                    }
                }
                Ok(())
            }
            Err(error) => {
                self.dispatch(SessionAction::Rejected(surface_message(
                    &error,
                    "Password update failed",
                )));
                Err(error.into())
            }
        }
    }

    /// Drop `last_error` without touching phase, identity, or token.
    pub fn clear_error(&mut self) {
        self.dispatch(SessionAction::ErrorCleared);
    }
}

/// The failure message surfaced to `last_error`: the error's own text, or
/// the operation's fallback when the server supplied nothing usable.
fn surface_message(error: &ApiError, fallback: &str) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
