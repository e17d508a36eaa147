//! Data models for mood reports, user profiles and session history
//!
//! Defines the core data structures used throughout the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::recommendation::RecommendationBundle;

/// The five closed mood classification outcomes.
///
/// Declaration order is the tie-break priority used by the classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodKind {
    Stressed,
    Calm,
    Energetic,
    Focused,
    Creative,
}

impl MoodKind {
    /// All categories in tie-break priority order
    pub const ALL: [MoodKind; 5] = [
        MoodKind::Stressed,
        MoodKind::Calm,
        MoodKind::Energetic,
        MoodKind::Focused,
        MoodKind::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stressed => "stressed",
            Self::Calm => "calm",
            Self::Energetic => "energetic",
            Self::Focused => "focused",
            Self::Creative => "creative",
        }
    }

    /// Capitalized name for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stressed => "Stressed",
            Self::Calm => "Calm",
            Self::Energetic => "Energetic",
            Self::Focused => "Focused",
            Self::Creative => "Creative",
        }
    }
}

impl std::fmt::Display for MoodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported energy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

/// What the user is doing when they report their mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Studying,
    Working,
    Relaxing,
    Exercising,
    Socializing,
    Creative,
    Commuting,
    Cooking,
    Cleaning,
    Reading,
}

impl Activity {
    pub const ALL: [Activity; 10] = [
        Activity::Studying,
        Activity::Working,
        Activity::Relaxing,
        Activity::Exercising,
        Activity::Socializing,
        Activity::Creative,
        Activity::Commuting,
        Activity::Cooking,
        Activity::Cleaning,
        Activity::Reading,
    ];
}

/// A single mood report submitted from the mood form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MoodInput {
    /// Slider value, 1 (relaxed) to 5 (very stressed)
    #[validate(range(min = 1, max = 5, message = "Stress level must be between 1 and 5"))]
    pub stress_level: u8,

    pub energy_level: EnergyLevel,

    pub current_activity: Activity,

    pub timestamp: DateTime<Utc>,
}

impl MoodInput {
    /// Create a new mood input stamped with the current time
    pub fn new(stress_level: u8, energy_level: EnergyLevel, current_activity: Activity) -> Self {
        Self {
            stress_level,
            energy_level,
            current_activity,
            timestamp: Utc::now(),
        }
    }
}

/// Classification result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCategory {
    pub category: MoodKind,
    /// Percentage in 0..=100
    pub confidence: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// An unlocked achievement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub unlocked_at: DateTime<Utc>,
    pub rarity: Rarity,
}

/// A saved combination of mood and recommendations
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteRoutine {
    pub id: String,
    pub name: String,
    pub mood: MoodCategory,
    pub recommendations: RecommendationBundle,
    pub saved_at: DateTime<Utc>,
    pub times_used: u32,
}

/// Gamification state of the signed-in user
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub vibe_points: u32,
    pub total_submissions: u32,
    pub current_streak: u32,
    pub badges: Vec<Badge>,
    pub level: u32,
    pub favorite_routines: Vec<FavoriteRoutine>,
}

impl UserProfile {
    /// Whether a badge with this id has already been issued
    pub fn has_badge(&self, id: &str) -> bool {
        self.badges.iter().any(|b| b.id == id)
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            vibe_points: 0,
            total_submissions: 0,
            current_streak: 0,
            badges: Vec::new(),
            level: 1,
            favorite_routines: Vec::new(),
        }
    }
}

/// One recorded mood submission
#[derive(Debug, Clone, Serialize)]
pub struct SessionRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    pub mood: MoodCategory,
    pub mood_data: MoodInput,
    pub recommendations: RecommendationBundle,
    pub completed_activities: Vec<String>,
    pub vibe_points_earned: u32,
}

impl SessionRecord {
    pub fn new(
        mood: MoodCategory,
        mood_data: MoodInput,
        recommendations: RecommendationBundle,
        vibe_points_earned: u32,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: format!("session-{}", Uuid::new_v4()),
            date,
            mood,
            mood_data,
            recommendations,
            completed_activities: Vec::new(),
            vibe_points_earned,
        }
    }
}

/// The single identity record persisted between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 80, message = "Name must be between 1 and 80 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
}
