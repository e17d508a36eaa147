//! Gamification rules: levels, badges and motivational copy
//!
//! Badge unlocks are a flat list of independent rules. Each rule pairs a
//! predicate over a [`ProgressSnapshot`] with the template of the badge it
//! grants; adding a badge means adding an entry to [`BADGE_RULES`].

use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::HashSet;
use tracing::info;

use crate::models::{Badge, MoodKind, Rarity, SessionRecord, UserProfile};

/// Vibe points needed per level
pub const POINTS_PER_LEVEL: u32 = 100;

/// Everything a badge rule may look at, computed once per evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub total_submissions: u32,
    pub current_streak: u32,
    pub vibe_points: u32,
    pub distinct_moods: usize,
    pub completed_activities: usize,
}

impl ProgressSnapshot {
    pub fn new(profile: &UserProfile, sessions: &[SessionRecord]) -> Self {
        let moods: HashSet<MoodKind> = sessions.iter().map(|s| s.mood.category).collect();

        Self {
            total_submissions: profile.total_submissions,
            current_streak: profile.current_streak,
            vibe_points: profile.vibe_points,
            distinct_moods: moods.len(),
            completed_activities: sessions.iter().map(|s| s.completed_activities.len()).sum(),
        }
    }
}

/// A badge together with the condition that unlocks it
pub struct BadgeRule {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rarity: Rarity,
    pub unlocked: fn(&ProgressSnapshot) -> bool,
}

impl BadgeRule {
    fn grant(&self, now: DateTime<Utc>) -> Badge {
        Badge {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            unlocked_at: now,
            rarity: self.rarity,
        }
    }
}

/// All badges, in the order they are checked and reported
pub const BADGE_RULES: &[BadgeRule] = &[
    BadgeRule {
        id: "first-session",
        name: "First Steps",
        description: "Completed your first wellness session",
        icon: "star",
        rarity: Rarity::Common,
        unlocked: |p| p.total_submissions >= 1,
    },
    BadgeRule {
        id: "streak-3",
        name: "Consistency Champion",
        description: "Maintained a 3-day wellness streak",
        icon: "zap",
        rarity: Rarity::Rare,
        unlocked: |p| p.current_streak >= 3,
    },
    BadgeRule {
        id: "streak-7",
        name: "Week Warrior",
        description: "Maintained a 7-day wellness streak",
        icon: "target",
        rarity: Rarity::Epic,
        unlocked: |p| p.current_streak >= 7,
    },
    BadgeRule {
        id: "streak-30",
        name: "Wellness Master",
        description: "Maintained a 30-day wellness streak",
        icon: "award",
        rarity: Rarity::Legendary,
        unlocked: |p| p.current_streak >= 30,
    },
    BadgeRule {
        id: "points-500",
        name: "Vibe Collector",
        description: "Earned 500 Vibe Points",
        icon: "sparkles",
        rarity: Rarity::Rare,
        unlocked: |p| p.vibe_points >= 500,
    },
    BadgeRule {
        id: "points-1000",
        name: "Vibe Master",
        description: "Earned 1000 Vibe Points",
        icon: "award",
        rarity: Rarity::Epic,
        unlocked: |p| p.vibe_points >= 1000,
    },
    BadgeRule {
        id: "mood-explorer",
        name: "Mood Explorer",
        description: "Experienced 3 different mood categories",
        icon: "heart",
        rarity: Rarity::Rare,
        unlocked: |p| p.distinct_moods >= 3,
    },
    BadgeRule {
        id: "activity-enthusiast",
        name: "Activity Enthusiast",
        description: "Completed 10 wellness activities",
        icon: "zap",
        rarity: Rarity::Rare,
        unlocked: |p| p.completed_activities >= 10,
    },
];

/// Badges the profile has earned but not yet been issued.
///
/// Every rule sees the same snapshot, so one call may unlock several badges.
/// Badges already on the profile are never returned again.
pub fn evaluate_badges(
    profile: &UserProfile,
    sessions: &[SessionRecord],
    now: DateTime<Utc>,
) -> Vec<Badge> {
    let snapshot = ProgressSnapshot::new(profile, sessions);

    let earned: Vec<Badge> = BADGE_RULES
        .iter()
        .filter(|rule| !profile.has_badge(rule.id) && (rule.unlocked)(&snapshot))
        .map(|rule| rule.grant(now))
        .collect();

    for badge in &earned {
        info!(badge_id = %badge.id, rarity = ?badge.rarity, "Badge unlocked");
    }

    earned
}

/// Level for a vibe point balance; starts at 1
pub fn calculate_level(vibe_points: u32) -> u32 {
    vibe_points / POINTS_PER_LEVEL + 1
}

pub fn points_to_next_level(vibe_points: u32) -> u32 {
    calculate_level(vibe_points) * POINTS_PER_LEVEL - vibe_points
}

/// One of a handful of encouraging messages about the profile
pub fn motivational_message<R: Rng + ?Sized>(profile: &UserProfile, rng: &mut R) -> String {
    match rng.gen_range(0..5) {
        0 => format!("You're on fire! {} days strong! 🔥", profile.current_streak),
        1 => format!(
            "Amazing progress! You've earned {} Vibe Points! ✨",
            profile.vibe_points
        ),
        2 => format!("Keep it up! You're level {} now! 🚀", profile.level),
        3 => format!(
            "Your wellness journey is inspiring! {} sessions completed! 💪",
            profile.total_submissions
        ),
        _ => "You're building amazing habits! Stay consistent! 🌟".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, EnergyLevel, MoodCategory, MoodInput};
    use crate::recommendation::recommend;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(mood: MoodKind, completed: usize) -> SessionRecord {
        let mut record = SessionRecord::new(
            MoodCategory {
                category: mood,
                confidence: 80,
            },
            MoodInput::new(3, EnergyLevel::Medium, Activity::Working),
            recommend(mood),
            25,
            Utc::now(),
        );
        record.completed_activities = (0..completed).map(|i| format!("activity-{i}")).collect();
        record
    }

    fn profile(submissions: u32, streak: u32, points: u32) -> UserProfile {
        UserProfile {
            vibe_points: points,
            total_submissions: submissions,
            current_streak: streak,
            level: calculate_level(points),
            ..UserProfile::default()
        }
    }

    fn ids(badges: &[Badge]) -> Vec<&str> {
        badges.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_calculate_level() {
        assert_eq!(calculate_level(0), 1);
        assert_eq!(calculate_level(99), 1);
        assert_eq!(calculate_level(100), 2);
        assert_eq!(calculate_level(250), 3);
    }

    #[test]
    fn test_level_is_monotonic() {
        let mut previous = calculate_level(0);
        for points in 1..2_000 {
            let level = calculate_level(points);
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn test_points_to_next_level() {
        assert_eq!(points_to_next_level(0), 100);
        assert_eq!(points_to_next_level(150), 50);
        assert_eq!(points_to_next_level(200), 100);
    }

    #[test]
    fn test_first_session_only() {
        let mut profile = profile(1, 1, 25);
        let history = vec![session(MoodKind::Calm, 0)];
        let now = Utc::now();

        let badges = evaluate_badges(&profile, &history, now);
        assert_eq!(ids(&badges), vec!["first-session"]);
        assert_eq!(badges[0].rarity, Rarity::Common);
        assert_eq!(badges[0].unlocked_at, now);

        profile.badges.extend(badges);
        assert!(evaluate_badges(&profile, &history, Utc::now()).is_empty());
    }

    #[test]
    fn test_multiple_unlocks_in_one_call() {
        let profile = profile(0, 3, 500);
        let badges = evaluate_badges(&profile, &[], Utc::now());

        assert_eq!(ids(&badges), vec!["streak-3", "points-500"]);
    }

    #[test]
    fn test_long_streak_unlocks_every_tier() {
        let profile = profile(40, 30, 1_000);
        let badges = evaluate_badges(&profile, &[], Utc::now());

        assert_eq!(
            ids(&badges),
            vec![
                "first-session",
                "streak-3",
                "streak-7",
                "streak-30",
                "points-500",
                "points-1000"
            ]
        );
        assert_eq!(badges[3].rarity, Rarity::Legendary);
    }

    #[test]
    fn test_mood_explorer_needs_three_distinct_moods() {
        let profile = profile(0, 0, 0);

        let two = vec![
            session(MoodKind::Stressed, 0),
            session(MoodKind::Calm, 0),
            session(MoodKind::Calm, 0),
        ];
        assert!(evaluate_badges(&profile, &two, Utc::now()).is_empty());

        let three = vec![
            session(MoodKind::Stressed, 0),
            session(MoodKind::Calm, 0),
            session(MoodKind::Energetic, 0),
        ];
        assert_eq!(
            ids(&evaluate_badges(&profile, &three, Utc::now())),
            vec!["mood-explorer"]
        );
    }

    #[test]
    fn test_activity_enthusiast_counts_across_sessions() {
        let profile = profile(0, 0, 0);

        let nine = vec![session(MoodKind::Focused, 4), session(MoodKind::Focused, 5)];
        assert!(evaluate_badges(&profile, &nine, Utc::now()).is_empty());

        let ten = vec![session(MoodKind::Focused, 4), session(MoodKind::Focused, 6)];
        assert_eq!(
            ids(&evaluate_badges(&profile, &ten, Utc::now())),
            vec!["activity-enthusiast"]
        );
    }

    #[test]
    fn test_evaluation_is_idempotent_once_held() {
        let mut profile = profile(12, 8, 600);
        let history = vec![
            session(MoodKind::Stressed, 5),
            session(MoodKind::Calm, 5),
            session(MoodKind::Creative, 0),
        ];

        let first = evaluate_badges(&profile, &history, Utc::now());
        assert_eq!(first.len(), 6);
        profile.badges.extend(first);

        for _ in 0..3 {
            assert!(evaluate_badges(&profile, &history, Utc::now()).is_empty());
        }
    }

    #[test]
    fn test_badge_rule_ids_unique() {
        let ids: HashSet<&str> = BADGE_RULES.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), BADGE_RULES.len());
    }

    #[test]
    fn test_motivational_message_mentions_profile() {
        let profile = profile(4, 2, 130);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let message = motivational_message(&profile, &mut rng);
            assert!(!message.is_empty());
        }
    }
}
