use serde::{Deserialize, Serialize};

/// Achievement category. The server serializes categories in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Academic,
    Sports,
    Extracurricular,
    Special,
}

impl std::fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AchievementCategory::Academic => write!(f, "academic"),
            AchievementCategory::Sports => write!(f, "sports"),
            AchievementCategory::Extracurricular => write!(f, "extracurricular"),
            AchievementCategory::Special => write!(f, "special"),
        }
    }
}

/// Achievement rarity tier for sorting and display purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
}

impl Rarity {
    /// Get the numeric order for sorting (0 = Common, 3 = Legendary).
    pub fn order(&self) -> usize {
        *self as usize
    }

    /// Get the display name for this rarity.
    pub fn display_name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rarity::Common => write!(f, "common"),
            Rarity::Rare => write!(f, "rare"),
            Rarity::Epic => write!(f, "epic"),
            Rarity::Legendary => write!(f, "legendary"),
        }
    }
}

/// How an achievement is earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementKind {
    Points,
    Events,
    Streak,
    Custom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(rename = "type")]
    pub kind: RequirementKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: AchievementCategory,
    pub rarity: Rarity,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub requirements: Option<Requirement>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// An achievement granted during an operation (event points award or an
/// explicit `/achievements/check`), as echoed back by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementGrant {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub points: i64,
}

/// Payload for creating an achievement (admin only).
#[derive(Debug, Clone, Serialize)]
pub struct NewAchievement {
    pub title: String,
    pub description: String,
    pub category: AchievementCategory,
    pub rarity: Rarity,
    pub points: i64,
    pub requirements: Requirement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Partial update for an achievement (admin only).
#[derive(Debug, Clone, Default, Serialize)]
pub struct AchievementPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<AchievementCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<Rarity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Requirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}
