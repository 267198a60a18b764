//! API client for communicating with the meritboard REST API.
//!
//! This module provides the `ApiClient` struct for making authenticated
//! requests against the platform backend: auth, events, achievements,
//! users, and the leaderboard.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{header, Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::auth::gateway::{AuthGateway, AuthPayload};
use crate::auth::token_store::TokenStore;
use crate::config::Config;
use crate::models::{
    Achievement, AchievementCategory, AchievementGrant, AchievementPatch, AwardOutcome,
    EarnedAchievement, Event, EventPatch, EventStatus, EventType, LeaderboardEntry, NewAchievement,
    NewEvent, ParticipationOutcome, PlatformStats, ProfileUpdate, Rarity, RegisterRequest, Role,
    User, UserPatch, WithdrawalOutcome,
};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Query filters
// ============================================================================

/// Filters for the paged `/events` listing.
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub department: Option<String>,
    pub event_type: Option<EventType>,
    pub status: Option<EventStatus>,
}

impl EventQuery {
    /// Assemble query pairs, omitting unset filters.
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(ref department) = self.department {
            pairs.push(("department", department.clone()));
        }
        if let Some(event_type) = self.event_type {
            pairs.push(("type", event_type.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.to_string()));
        }
        pairs
    }
}

/// Filters for the paged `/achievements` listing.
#[derive(Debug, Clone, Default)]
pub struct AchievementQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<AchievementCategory>,
    pub rarity: Option<Rarity>,
}

impl AchievementQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.to_string()));
        }
        if let Some(rarity) = self.rarity {
            pairs.push(("rarity", rarity.to_string()));
        }
        pairs
    }
}

/// Filters for the paged `/users` listing.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub department: Option<String>,
    pub role: Option<Role>,
}

impl UserQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(ref department) = self.department {
            pairs.push(("department", department.clone()));
        }
        if let Some(role) = self.role {
            pairs.push(("role", role.to_string()));
        }
        pairs
    }
}

/// Filters for `/users/leaderboard`.
#[derive(Debug, Clone, Default)]
pub struct LeaderboardQuery {
    pub department: Option<String>,
    pub limit: Option<u32>,
}

impl LeaderboardQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref department) = self.department {
            pairs.push(("department", department.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

// ============================================================================
// Result projections
// ============================================================================

/// One page of a paged listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub count: u64,
    pub total: u64,
    pub page: u32,
    pub pages: u32,
    pub items: Vec<T>,
}

/// Backend health report from `/health`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
}

// ============================================================================
// Client
// ============================================================================

/// API client for the meritboard backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<TokenStore>,
}

impl ApiClient {
    /// Create a new API client against the given base URL.
    pub fn new(base_url: impl Into<String>, tokens: Arc<TokenStore>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// Create a client from the loaded configuration.
    pub fn from_config(config: &Config, tokens: Arc<TokenStore>) -> Result<Self> {
        Self::new(config.api_base_url(), tokens)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request with the JSON content type and, when the store holds
    /// one, the bearer token. The token is read fresh from the store on
    /// every call, never cached at construction.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self
            .client
            .request(method, self.url(path))
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = self.tokens.get() {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Send a request and normalize the response.
    ///
    /// - non-JSON body + success status: decoded as an empty object
    /// - non-JSON body + failure status: `ApiError::Request` with the
    ///   synthesized `HTTP <status>: <statusText>` message
    /// - JSON body + failure status: `ApiError::Request` carrying the
    ///   server's `message` when present
    /// - JSON body + success status: decoded into `T`
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("application/json"))
            .unwrap_or(false);

        if !is_json {
            if status.is_success() {
                return serde_json::from_str("{}")
                    .map_err(|error| ApiError::InvalidResponse(error.to_string()));
            }
            return Err(ApiError::Request {
                status,
                message: ApiError::status_line(status),
            });
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::from_response(status, &body));
        }

        serde_json::from_str(&body).map_err(|error| {
            ApiError::InvalidResponse(format!("{}: {}", error, ApiError::truncate_body(&body)))
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(Method::GET, path)).await
    }

    async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: Vec<(&'static str, String)>,
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::GET, path).query(&pairs))
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(Method::POST, path)).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::PUT, path).json(body))
            .await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(Method::DELETE, path)).await
    }

    /// Persist the token from a successful login/register response before
    /// handing the payload back. This is the only place a generic request
    /// writes the token store.
    fn store_auth_token(&self, envelope: AuthEnvelope) -> Result<AuthPayload, ApiError> {
        let AuthEnvelope { token, user } = envelope;
        let token = match token.filter(|token| !token.is_empty()) {
            Some(token) => token,
            None => {
                return Err(ApiError::InvalidResponse(
                    "auth response carried no token".to_string(),
                ))
            }
        };
        if let Err(error) = self.tokens.set(Some(&token)) {
            warn!(%error, "failed to persist bearer token");
        }
        Ok(AuthPayload { user, token })
    }

    // ===== Events =====

    /// Fetch a page of events, optionally filtered.
    pub async fn fetch_events(&self, query: &EventQuery) -> Result<Page<Event>, ApiError> {
        let envelope: PagedEnvelope<Event> = self.get_with("/events", query.pairs()).await?;
        Ok(envelope.into())
    }

    /// Fetch upcoming events.
    pub async fn fetch_upcoming_events(&self, limit: Option<u32>) -> Result<Vec<Event>, ApiError> {
        let mut request = self.request(Method::GET, "/events/upcoming");
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit.to_string())]);
        }
        let envelope: ListEnvelope<Event> = self.execute(request).await?;
        Ok(envelope.data)
    }

    /// Fetch events for a department, optionally filtered by status.
    pub async fn fetch_events_by_department(
        &self,
        department: &str,
        status: Option<EventStatus>,
    ) -> Result<Vec<Event>, ApiError> {
        let path = format!("/events/department/{}", department);
        let mut request = self.request(Method::GET, &path);
        if let Some(status) = status {
            request = request.query(&[("status", status.to_string())]);
        }
        let envelope: ListEnvelope<Event> = self.execute(request).await?;
        Ok(envelope.data)
    }

    /// Fetch a single event.
    pub async fn fetch_event(&self, id: &str) -> Result<Event, ApiError> {
        let envelope: ItemEnvelope<Event> = self.get(&format!("/events/{}", id)).await?;
        Ok(envelope.data)
    }

    /// Create an event (admin only).
    pub async fn create_event(&self, event: &NewEvent) -> Result<Event, ApiError> {
        let envelope: ItemEnvelope<Event> = self.post("/events", event).await?;
        Ok(envelope.data)
    }

    /// Update an event (admin only).
    pub async fn update_event(&self, id: &str, patch: &EventPatch) -> Result<Event, ApiError> {
        let envelope: ItemEnvelope<Event> = self.put(&format!("/events/{}", id), patch).await?;
        Ok(envelope.data)
    }

    /// Delete an event (admin only).
    pub async fn delete_event(&self, id: &str) -> Result<(), ApiError> {
        let ack: Acknowledged = self.delete(&format!("/events/{}", id)).await?;
        debug!(success = ack.success, event = id, "event deleted");
        Ok(())
    }

    /// Join an event as the current user.
    pub async fn join_event(&self, id: &str) -> Result<ParticipationOutcome, ApiError> {
        self.post_empty(&format!("/events/{}/participate", id)).await
    }

    /// Withdraw the current user from an event.
    pub async fn leave_event(&self, id: &str) -> Result<WithdrawalOutcome, ApiError> {
        self.delete(&format!("/events/{}/participate", id)).await
    }

    /// Award event points to a user (admin only).
    pub async fn award_event_points(
        &self,
        event_id: &str,
        user_id: &str,
        points: i64,
    ) -> Result<AwardOutcome, ApiError> {
        let body = serde_json::json!({ "userId": user_id, "points": points });
        self.post(&format!("/events/{}/award-points", event_id), &body)
            .await
    }

    // ===== Achievements =====

    /// Fetch a page of the achievement catalog, optionally filtered.
    pub async fn fetch_achievements(
        &self,
        query: &AchievementQuery,
    ) -> Result<Page<Achievement>, ApiError> {
        let envelope: PagedEnvelope<Achievement> =
            self.get_with("/achievements", query.pairs()).await?;
        Ok(envelope.into())
    }

    /// Fetch achievements in a category, optionally filtered by rarity.
    pub async fn fetch_achievements_by_category(
        &self,
        category: AchievementCategory,
        rarity: Option<Rarity>,
    ) -> Result<Vec<Achievement>, ApiError> {
        let path = format!("/achievements/category/{}", category);
        let mut request = self.request(Method::GET, &path);
        if let Some(rarity) = rarity {
            request = request.query(&[("rarity", rarity.to_string())]);
        }
        let envelope: ListEnvelope<Achievement> = self.execute(request).await?;
        Ok(envelope.data)
    }

    /// Fetch the rare-and-above slice of the catalog.
    pub async fn fetch_rare_achievements(&self) -> Result<Vec<Achievement>, ApiError> {
        let envelope: ListEnvelope<Achievement> = self.get("/achievements/rare").await?;
        Ok(envelope.data)
    }

    /// Fetch the achievements a user has earned.
    pub async fn fetch_user_achievements(
        &self,
        user_id: &str,
    ) -> Result<Vec<EarnedAchievement>, ApiError> {
        let envelope: ListEnvelope<EarnedAchievement> =
            self.get(&format!("/achievements/user/{}", user_id)).await?;
        Ok(envelope.data)
    }

    /// Fetch a single achievement.
    pub async fn fetch_achievement(&self, id: &str) -> Result<Achievement, ApiError> {
        let envelope: ItemEnvelope<Achievement> =
            self.get(&format!("/achievements/{}", id)).await?;
        Ok(envelope.data)
    }

    /// Create an achievement (admin only).
    pub async fn create_achievement(
        &self,
        achievement: &NewAchievement,
    ) -> Result<Achievement, ApiError> {
        let envelope: ItemEnvelope<Achievement> = self.post("/achievements", achievement).await?;
        Ok(envelope.data)
    }

    /// Update an achievement (admin only).
    pub async fn update_achievement(
        &self,
        id: &str,
        patch: &AchievementPatch,
    ) -> Result<Achievement, ApiError> {
        let envelope: ItemEnvelope<Achievement> =
            self.put(&format!("/achievements/{}", id), patch).await?;
        Ok(envelope.data)
    }

    /// Delete an achievement (admin only).
    pub async fn delete_achievement(&self, id: &str) -> Result<(), ApiError> {
        let ack: Acknowledged = self.delete(&format!("/achievements/{}", id)).await?;
        debug!(success = ack.success, achievement = id, "achievement deleted");
        Ok(())
    }

    /// Ask the server to re-evaluate the current user's achievements,
    /// returning any newly granted ones.
    pub async fn check_achievements(&self) -> Result<Vec<AchievementGrant>, ApiError> {
        let envelope: NewAchievementsEnvelope = self.post_empty("/achievements/check").await?;
        Ok(envelope.new_achievements)
    }

    // ===== Users =====

    /// Fetch a page of users, optionally filtered (admin only).
    pub async fn fetch_users(&self, query: &UserQuery) -> Result<Page<User>, ApiError> {
        let envelope: PagedEnvelope<User> = self.get_with("/users", query.pairs()).await?;
        Ok(envelope.into())
    }

    /// Fetch the points leaderboard.
    pub async fn fetch_leaderboard(
        &self,
        query: &LeaderboardQuery,
    ) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let envelope: ListEnvelope<LeaderboardEntry> =
            self.get_with("/users/leaderboard", query.pairs()).await?;
        Ok(envelope.data)
    }

    /// Fetch a user's public profile.
    pub async fn fetch_user_profile(&self, id: &str) -> Result<User, ApiError> {
        let envelope: ItemEnvelope<User> = self.get(&format!("/users/profile/{}", id)).await?;
        Ok(envelope.data)
    }

    /// Update a user (admin only).
    pub async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<User, ApiError> {
        let envelope: ItemEnvelope<User> = self.put(&format!("/users/{}", id), patch).await?;
        Ok(envelope.data)
    }

    /// Delete a user (admin only).
    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let ack: Acknowledged = self.delete(&format!("/users/{}", id)).await?;
        debug!(success = ack.success, user = id, "user deleted");
        Ok(())
    }

    /// Fetch aggregate platform statistics (admin only).
    pub async fn fetch_platform_stats(&self) -> Result<PlatformStats, ApiError> {
        let envelope: ItemEnvelope<PlatformStats> = self.get("/users/stats").await?;
        Ok(envelope.data)
    }

    // ===== Health =====

    /// Check backend health.
    pub async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        self.get("/health").await
    }
}

#[async_trait]
impl AuthGateway for ApiClient {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthPayload, ApiError> {
        let envelope: AuthEnvelope = self.post("/auth/register", request).await?;
        self.store_auth_token(envelope)
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthPayload, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let envelope: AuthEnvelope = self.post("/auth/login", &body).await?;
        self.store_auth_token(envelope)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let ack: Acknowledged = self.post_empty("/auth/logout").await?;
        debug!(success = ack.success, "logout acknowledged by server");
        Ok(())
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self.get("/auth/me").await?;
        Ok(envelope.user)
    }

    async fn update_details(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self.put("/auth/updatedetails", update).await?;
        Ok(envelope.user)
    }

    async fn update_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<Option<String>, ApiError> {
        let body = serde_json::json!({
            "currentPassword": current_password,
            "newPassword": new_password,
        });
        let envelope: TokenEnvelope = self.put("/auth/updatepassword", &body).await?;
        Ok(envelope.token.filter(|token| !token.is_empty()))
    }
}

// Internal envelope types for parsing server responses

#[derive(Debug, Deserialize)]
struct AuthEnvelope {
    #[serde(default)]
    token: Option<String>,
    user: User,
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: User,
}

#[derive(Debug, Default, Deserialize)]
struct TokenEnvelope {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Acknowledged {
    #[serde(default)]
    success: bool,
}

#[derive(Debug, Deserialize)]
struct ItemEnvelope<T> {
    data: T,
}

#[derive(Debug, Default, Deserialize)]
struct ListEnvelope<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct PagedEnvelope<T> {
    #[serde(default)]
    count: u64,
    #[serde(default)]
    total: u64,
    #[serde(default)]
    page: u32,
    #[serde(default)]
    pages: u32,
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

impl<T> From<PagedEnvelope<T>> for Page<T> {
    fn from(envelope: PagedEnvelope<T>) -> Self {
        Page {
            count: envelope.count,
            total: envelope.total,
            page: envelope.page,
            pages: envelope.pages,
            items: envelope.data,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct NewAchievementsEnvelope {
    #[serde(rename = "newAchievements", default)]
    new_achievements: Vec<AchievementGrant>,
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    static STORE_SEQ: AtomicUsize = AtomicUsize::new(0);

    fn temp_store() -> Arc<TokenStore> {
        let dir = std::env::temp_dir().join(format!(
            "meritboard-client-test-{}-{}",
            std::process::id(),
            STORE_SEQ.fetch_add(1, Ordering::SeqCst)
        ));
        Arc::new(TokenStore::new(dir))
    }

    fn client(tokens: Arc<TokenStore>) -> ApiClient {
        ApiClient::new("http://localhost:5003/api/", tokens).expect("Failed to build client")
    }

    fn sample_user() -> User {
        serde_json::from_value(serde_json::json!({
            "_id": "64f1c0a2e4b0a5d3c8b40001",
            "name": "Ada Park",
            "email": "ada@university.edu",
            "role": "student"
        }))
        .expect("Failed to build sample user")
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = client(temp_store());
        assert_eq!(api.url("/auth/me"), "http://localhost:5003/api/auth/me");
    }

    #[test]
    fn test_event_query_pairs_omit_unset_filters() {
        let query = EventQuery {
            limit: Some(10),
            status: Some(EventStatus::Upcoming),
            ..EventQuery::default()
        };
        assert_eq!(
            query.pairs(),
            vec![
                ("limit", "10".to_string()),
                ("status", "upcoming".to_string()),
            ]
        );

        assert!(EventQuery::default().pairs().is_empty());
    }

    #[test]
    fn test_leaderboard_query_pairs() {
        let query = LeaderboardQuery {
            department: Some("Computer Science".to_string()),
            limit: Some(10),
        };
        assert_eq!(
            query.pairs(),
            vec![
                ("department", "Computer Science".to_string()),
                ("limit", "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_store_auth_token_persists_token() {
        let tokens = temp_store();
        let api = client(Arc::clone(&tokens));

        let payload = api
            .store_auth_token(AuthEnvelope {
                token: Some("T".to_string()),
                user: sample_user(),
            })
            .expect("auth payload");

        assert_eq!(payload.token, "T");
        assert_eq!(tokens.get().as_deref(), Some("T"));
    }

    #[test]
    fn test_store_auth_token_rejects_missing_token() {
        let tokens = temp_store();
        let api = client(Arc::clone(&tokens));

        let error = api
            .store_auth_token(AuthEnvelope {
                token: None,
                user: sample_user(),
            })
            .expect_err("missing token must be rejected");

        assert!(matches!(error, ApiError::InvalidResponse(_)));
        assert_eq!(tokens.get(), None);
    }

    #[test]
    fn test_parse_paged_envelope() {
        let json = r#"{
            "success": true,
            "count": 2,
            "total": 14,
            "page": 1,
            "pages": 7,
            "data": [
                { "_id": "e1", "title": "Fall Hackathon", "type": "academic" },
                { "_id": "e2", "title": "Intramural Finals", "type": "sports" }
            ]
        }"#;

        let envelope: PagedEnvelope<Event> =
            serde_json::from_str(json).expect("Failed to parse paged envelope");
        let page: Page<Event> = envelope.into();
        assert_eq!(page.total, 14);
        assert_eq!(page.pages, 7);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].title, "Intramural Finals");
    }

    #[test]
    fn test_parse_auth_envelope() {
        let json = r#"{
            "success": true,
            "message": "Login successful",
            "token": "eyJhbGciOi.header.payload",
            "user": { "_id": "u1", "name": "Ada Park", "email": "ada@university.edu", "role": "student" }
        }"#;

        let envelope: AuthEnvelope =
            serde_json::from_str(json).expect("Failed to parse auth envelope");
        assert_eq!(envelope.token.as_deref(), Some("eyJhbGciOi.header.payload"));
        assert_eq!(envelope.user.name, "Ada Park");
    }

    #[test]
    fn test_parse_new_achievements_envelope() {
        let json = r#"{
            "success": true,
            "message": "2 new achievements",
            "newAchievements": [
                { "title": "First Steps", "points": 50 },
                { "title": "Point Collector", "points": 100 }
            ]
        }"#;

        let envelope: NewAchievementsEnvelope =
            serde_json::from_str(json).expect("Failed to parse check envelope");
        assert_eq!(envelope.new_achievements.len(), 2);
        assert_eq!(envelope.new_achievements[0].title, "First Steps");
    }
}
