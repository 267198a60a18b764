use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::models::achievement::AchievementGrant;

/// Event type. The server serializes types in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Academic,
    Sports,
    Extracurricular,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::Academic => write!(f, "academic"),
            EventType::Sports => write!(f, "sports"),
            EventType::Extracurricular => write!(f, "extracurricular"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
}

impl EventStatus {
    /// Active events still accept participants.
    pub fn is_active(self) -> bool {
        matches!(self, EventStatus::Upcoming | EventStatus::Ongoing)
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventStatus::Upcoming => write!(f, "upcoming"),
            EventStatus::Ongoing => write!(f, "ongoing"),
            EventStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "maxParticipants", default)]
    pub max_participants: Option<u32>,
    #[serde(default)]
    pub participants: Vec<EventParticipant>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(rename = "createdBy", default)]
    pub created_by: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventParticipant {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(rename = "joinedAt", default)]
    pub joined_at: Option<String>,
}

impl Event {
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn is_full(&self) -> bool {
        self.max_participants
            .map(|max| self.participants.len() as u32 >= max)
            .unwrap_or(false)
    }

    /// Remaining capacity, or None when the event is uncapped.
    pub fn spots_remaining(&self) -> Option<u32> {
        self.max_participants
            .map(|max| max.saturating_sub(self.participants.len() as u32))
    }

    pub fn formatted_date(&self) -> String {
        match &self.date {
            Some(date) => {
                if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
                    dt.format("%b %d, %Y").to_string()
                } else {
                    // Fall back to raw date string, truncate if too long
                    date.chars().take(10).collect()
                }
            }
            None => "TBD".to_string(),
        }
    }
}

/// Result of joining an event via `/events/{id}/participate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParticipationOutcome {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "pointsEarned", default)]
    pub points_earned: i64,
}

/// Result of withdrawing from an event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WithdrawalOutcome {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "pointsRemoved", default)]
    pub points_removed: i64,
}

/// Result of an admin awarding event points to a user. The server reports
/// the user's new level and any achievements the award unlocked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AwardOutcome {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "pointsAwarded", default)]
    pub points_awarded: i64,
    #[serde(rename = "newLevel", default)]
    pub new_level: i64,
    #[serde(rename = "newAchievements", default)]
    pub new_achievements: Vec<AchievementGrant>,
}

/// Payload for creating an event (admin only).
#[derive(Debug, Clone, Serialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub points: i64,
    pub department: String,
    pub date: String,
    #[serde(rename = "maxParticipants", skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
}

/// Partial update for an event (admin only).
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "maxParticipants", skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
}
