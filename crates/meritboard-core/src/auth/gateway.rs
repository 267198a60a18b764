//! Gateway trait between the session state machine and the HTTP client.

use async_trait::async_trait;

use crate::api::ApiError;
use crate::models::{ProfileUpdate, RegisterRequest, User};

/// The identity/token pair returned by a successful login or registration.
#[derive(Debug, Clone)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}

/// The auth slice of the backend API, as consumed by the session layer.
///
/// `ApiClient` is the production implementation; tests substitute stubs.
/// Login and register persist the issued token into the token store as a
/// side effect before returning.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthPayload, ApiError>;

    async fn login(&self, email: &str, password: &str) -> Result<AuthPayload, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;

    /// Fetch the identity the current bearer token belongs to.
    async fn current_user(&self) -> Result<User, ApiError>;

    /// Update the current user's profile, returning the full updated record.
    async fn update_details(&self, update: &ProfileUpdate) -> Result<User, ApiError>;

    /// Change the current user's password. Returns the re-issued token when
    /// the server rotates it.
    async fn update_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<Option<String>, ApiError>;
}
