//! Data models for meritboard entities.
//!
//! This module contains all the data structures used to represent
//! platform data including:
//!
//! - `User`, `Participation`, `EarnedAchievement`: identity and progress
//! - `Event`, `EventParticipant`: campus events and sign-ups
//! - `Achievement`, `Requirement`: the achievement catalog
//! - `LeaderboardEntry`, `PlatformStats`: aggregate views

pub mod achievement;
pub mod event;
pub mod user;

pub use achievement::{
    Achievement, AchievementCategory, AchievementGrant, AchievementPatch, NewAchievement, Rarity,
    Requirement, RequirementKind,
};
pub use event::{
    AwardOutcome, Event, EventParticipant, EventPatch, EventStatus, EventType, NewEvent,
    ParticipationOutcome, WithdrawalOutcome,
};
pub use user::{
    AchievementRef, AchievementSummary, EarnedAchievement, EventRef, LeaderboardEntry,
    Participation, ParticipationEvent, PlatformStats, ProfileUpdate, RegisterRequest, Role, User,
    UserPatch,
};
