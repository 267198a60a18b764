//! User and identity models.
//!
//! The server returns Mongo-style documents: camelCase field names and an
//! `_id` key. The structs here carry serde renames so domain code stays
//! snake_case, and satellite references (`eventId`, `achievementId`) accept
//! both the populated document and the bare id, since the server varies by
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::models::achievement::Rarity;
use crate::models::event::EventType;

/// Account role. The server serializes roles in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(rename = "studentId", default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(rename = "totalPoints", default)]
    pub total_points: i64,
    #[serde(default = "default_level")]
    pub level: i64,
    #[serde(default)]
    pub achievements: Vec<EarnedAchievement>,
    #[serde(rename = "eventsParticipated", default)]
    pub events_participated: Vec<Participation>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

fn default_level() -> i64 {
    1
}

fn default_true() -> bool {
    true
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Whether the user has a recorded participation for the given event.
    pub fn participated_in(&self, event_id: &str) -> bool {
        self.events_participated
            .iter()
            .any(|p| p.event.as_ref().map(EventRef::id) == Some(event_id))
    }
}

/// A single event participation on a user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participation {
    #[serde(rename = "eventId", default)]
    pub event: Option<EventRef>,
    #[serde(rename = "pointsEarned", default)]
    pub points_earned: i64,
    #[serde(rename = "participatedAt", default)]
    pub participated_at: Option<String>,
}

/// An `eventId` reference: either the populated event document or a bare id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventRef {
    Populated(ParticipationEvent),
    Id(String),
}

impl EventRef {
    pub fn id(&self) -> &str {
        match self {
            EventRef::Populated(event) => &event.id,
            EventRef::Id(id) => id,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            EventRef::Populated(event) => Some(&event.title),
            EventRef::Id(_) => None,
        }
    }

    pub fn event_type(&self) -> Option<EventType> {
        match self {
            EventRef::Populated(event) => event.event_type,
            EventRef::Id(_) => None,
        }
    }
}

/// The slice of an event document embedded in a populated participation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipationEvent {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "type", default)]
    pub event_type: Option<EventType>,
    #[serde(default)]
    pub points: Option<i64>,
}

/// An earned achievement on a user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarnedAchievement {
    #[serde(rename = "achievementId", default)]
    pub achievement: Option<AchievementRef>,
    #[serde(rename = "earnedAt", default)]
    pub earned_at: Option<String>,
    #[serde(default)]
    pub points: i64,
}

/// An `achievementId` reference: populated document or bare id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AchievementRef {
    Populated(AchievementSummary),
    Id(String),
}

impl AchievementRef {
    pub fn id(&self) -> &str {
        match self {
            AchievementRef::Populated(achievement) => &achievement.id,
            AchievementRef::Id(id) => id,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            AchievementRef::Populated(achievement) => Some(&achievement.title),
            AchievementRef::Id(_) => None,
        }
    }
}

/// The slice of an achievement document embedded in a populated earned entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rarity: Option<Rarity>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub points: Option<i64>,
}

/// A row of the points leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(rename = "totalPoints", default)]
    pub total_points: i64,
    #[serde(default = "default_level")]
    pub level: i64,
}

/// Aggregate platform statistics from `/users/stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformStats {
    #[serde(rename = "totalUsers", default)]
    pub total_users: i64,
    #[serde(rename = "totalStudents", default)]
    pub total_students: i64,
    #[serde(rename = "totalEvents", default)]
    pub total_events: i64,
    #[serde(rename = "totalPointsAwarded", default)]
    pub total_points_awarded: i64,
    #[serde(default)]
    pub departments: i64,
}

/// Payload for the registration endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(rename = "studentId", skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

/// Partial profile update for the current user (`/auth/updatedetails`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

/// Admin-side partial update for any user (`/users/{id}`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(rename = "totalPoints", skip_serializing_if = "Option::is_none")]
    pub total_points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(rename = "isActive", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_with_populated_references() {
        let json = r#"{
            "_id": "64f1c0a2e4b0a5d3c8b40001",
            "name": "Ada Park",
            "email": "ada@university.edu",
            "role": "student",
            "studentId": "S-1044",
            "department": "Computer Science",
            "year": "3",
            "totalPoints": 460,
            "level": 5,
            "achievements": [
                {
                    "achievementId": {
                        "_id": "64f1c0a2e4b0a5d3c8b45678",
                        "title": "Scholar",
                        "rarity": "epic",
                        "icon": "book-open"
                    },
                    "earnedAt": "2025-10-20T10:00:00.000Z",
                    "points": 150
                }
            ],
            "eventsParticipated": [
                {
                    "eventId": {
                        "_id": "64f1c0a2e4b0a5d3c8b41234",
                        "title": "Fall Hackathon",
                        "type": "academic",
                        "points": 120
                    },
                    "pointsEarned": 120,
                    "participatedAt": "2025-10-18T20:00:00.000Z"
                }
            ],
            "isActive": true,
            "createdAt": "2025-09-01T12:00:00.000Z",
            "updatedAt": "2025-10-20T10:00:00.000Z"
        }"#;

        let user: User = serde_json::from_str(json).expect("Failed to parse user JSON");
        assert_eq!(user.name, "Ada Park");
        assert_eq!(user.role, Role::Student);
        assert!(!user.is_admin());
        assert_eq!(user.total_points, 460);
        assert_eq!(user.level, 5);

        let participation = &user.events_participated[0];
        let event = participation.event.as_ref().expect("event ref missing");
        assert_eq!(event.id(), "64f1c0a2e4b0a5d3c8b41234");
        assert_eq!(event.title(), Some("Fall Hackathon"));
        assert_eq!(event.event_type(), Some(EventType::Academic));
        assert!(user.participated_in("64f1c0a2e4b0a5d3c8b41234"));
        assert!(!user.participated_in("64f1c0a2e4b0a5d3c8b49999"));

        let earned = &user.achievements[0];
        let achievement = earned.achievement.as_ref().expect("achievement ref missing");
        assert_eq!(achievement.title(), Some("Scholar"));
        assert_eq!(earned.points, 150);
    }

    #[test]
    fn test_parse_user_with_bare_id_references() {
        let json = r#"{
            "_id": "64f1c0a2e4b0a5d3c8b40002",
            "name": "Sam Ortiz",
            "email": "sam@university.edu",
            "role": "admin",
            "achievements": [
                { "achievementId": "64f1c0a2e4b0a5d3c8b45678", "points": 150 }
            ],
            "eventsParticipated": [
                { "eventId": "64f1c0a2e4b0a5d3c8b41234", "pointsEarned": 120 }
            ]
        }"#;

        let user: User = serde_json::from_str(json).expect("Failed to parse user JSON");
        assert!(user.is_admin());
        // Unset gamification fields fall back to a fresh account
        assert_eq!(user.total_points, 0);
        assert_eq!(user.level, 1);
        assert!(user.is_active);

        let event = user.events_participated[0].event.as_ref().unwrap();
        assert_eq!(event.id(), "64f1c0a2e4b0a5d3c8b41234");
        assert_eq!(event.title(), None);

        let achievement = user.achievements[0].achievement.as_ref().unwrap();
        assert_eq!(achievement.id(), "64f1c0a2e4b0a5d3c8b45678");
    }

    #[test]
    fn test_parse_leaderboard_entry() {
        let json = r#"{
            "_id": "64f1c0a2e4b0a5d3c8b40001",
            "name": "Ada Park",
            "department": "Computer Science",
            "totalPoints": 460,
            "level": 5
        }"#;

        let entry: LeaderboardEntry =
            serde_json::from_str(json).expect("Failed to parse leaderboard entry");
        assert_eq!(entry.name, "Ada Park");
        assert_eq!(entry.total_points, 460);
    }

    #[test]
    fn test_register_request_omits_unset_optionals() {
        let request = RegisterRequest {
            name: "Ada Park".to_string(),
            email: "ada@university.edu".to_string(),
            password: "hunter2hunter2".to_string(),
            role: Role::Student,
            student_id: Some("S-1044".to_string()),
            department: None,
            year: None,
        };

        let json = serde_json::to_value(&request).expect("Failed to serialize register request");
        assert_eq!(json["role"], "student");
        assert_eq!(json["studentId"], "S-1044");
        assert!(json.get("department").is_none());
        assert!(json.get("year").is_none());
    }

    #[test]
    fn test_profile_update_serializes_only_set_fields() {
        let update = ProfileUpdate {
            name: Some("Ada P.".to_string()),
            ..ProfileUpdate::default()
        };
        let json = serde_json::to_value(&update).expect("Failed to serialize profile update");
        assert_eq!(json, serde_json::json!({ "name": "Ada P." }));
    }
}
