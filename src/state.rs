//! Application state management
//!
//! Central state container for a VibeSync session: the signed-in user, their
//! gamification profile, session history, the community feed and the result
//! currently on screen. Profile changes are applied by building the updated
//! profile and swapping it in whole.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::analyzer;
use crate::chat;
use crate::community::{self, CommunityPost, WellnessKit};
use crate::config::RewardSettings;
use crate::error::{AppError, AppResult};
use crate::gamification::{calculate_level, evaluate_badges};
use crate::models::{
    Badge, FavoriteRoutine, MoodCategory, MoodInput, SessionRecord, UserAccount, UserProfile,
};
use crate::recommendation::{recommend, RecommendationBundle};
use crate::validation::{validate_account, validate_chat_text, validate_mood_input};

/// The mood and recommendations currently presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrentResult {
    pub mood: MoodCategory,
    pub recommendations: RecommendationBundle,
}

/// Everything a mood submission produced
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionOutcome {
    pub session_id: String,
    pub mood: MoodCategory,
    pub recommendations: RecommendationBundle,
    pub points_earned: u32,
    pub new_badges: Vec<Badge>,
    /// New level, when the submission crossed a level boundary
    pub level_up: Option<u32>,
}

/// Result of classifying a chat message
#[derive(Debug, Clone, Serialize)]
pub struct ChatOutcome {
    pub mood: MoodCategory,
    pub recommendations: RecommendationBundle,
    pub reply: &'static str,
}

/// Result of ordering a wellness kit
#[derive(Debug, Clone, Serialize)]
pub struct KitOrderOutcome {
    pub kit: WellnessKit,
    pub points_earned: u32,
    pub level_up: Option<u32>,
}

/// Central application state
#[derive(Debug)]
pub struct AppState {
    /// Signed-in user, if any
    current_user: Option<UserAccount>,
    /// Gamification profile
    profile: UserProfile,
    /// Session history, oldest first
    sessions: Vec<SessionRecord>,
    /// Community feed
    posts: Vec<CommunityPost>,
    /// Result on screen
    current: Option<CurrentResult>,
    rewards: RewardSettings,
}

impl AppState {
    /// Create new application state
    pub fn new(rewards: RewardSettings) -> Self {
        info!("Initializing application state");
        Self {
            current_user: None,
            profile: UserProfile::default(),
            sessions: Vec::new(),
            posts: community::seed_posts(Utc::now()),
            current: None,
            rewards,
        }
    }

    /// Start from an existing profile and history
    pub fn with_history(
        rewards: RewardSettings,
        profile: UserProfile,
        mut sessions: Vec<SessionRecord>,
    ) -> Self {
        sessions.sort_by_key(|s| s.date);
        Self {
            profile,
            sessions,
            ..Self::new(rewards)
        }
    }

    // ── Identity ────────────────────────────────────────────────────────

    pub fn sign_in(&mut self, account: UserAccount) -> AppResult<()> {
        validate_account(&account)?;
        info!(email = %account.email, "User signed in");
        self.current_user = Some(account);
        Ok(())
    }

    pub fn sign_out(&mut self) {
        if let Some(account) = self.current_user.take() {
            info!(email = %account.email, "User signed out");
        }
        self.current = None;
    }

    pub fn current_user(&self) -> Option<&UserAccount> {
        self.current_user.as_ref()
    }

    fn require_user(&self, action: &str) -> AppResult<()> {
        if self.current_user.is_none() {
            warn!(action, "Action attempted without a signed-in user");
            return Err(AppError::Unauthorized(format!(
                "Sign in to {action}"
            )));
        }
        Ok(())
    }

    // ── Mood submission ─────────────────────────────────────────────────

    /// Classify a mood report, record it and apply rewards
    pub fn submit_mood(&mut self, input: MoodInput, now: DateTime<Utc>) -> AppResult<SubmissionOutcome> {
        self.require_user("analyze your mood")?;
        validate_mood_input(&input)?;

        let mood = analyzer::classify(&input);
        let recommendations = recommend(mood.category);
        let points = self.rewards.submission_points;

        let session = SessionRecord::new(mood, input, recommendations, points, now);
        let session_id = session.id.clone();
        self.sessions.push(session);

        let previous_level = self.profile.level;
        let vibe_points = self.profile.vibe_points + points;
        let mut updated = UserProfile {
            vibe_points,
            total_submissions: self.profile.total_submissions + 1,
            current_streak: self.profile.current_streak + 1,
            level: calculate_level(vibe_points),
            ..self.profile.clone()
        };

        let new_badges = evaluate_badges(&updated, &self.sessions, now);
        updated.badges.extend(new_badges.iter().cloned());

        let level_up = (updated.level > previous_level).then_some(updated.level);
        self.profile = updated;
        self.current = Some(CurrentResult {
            mood,
            recommendations,
        });

        info!(
            session_id = %session_id,
            mood = %mood.category,
            confidence = mood.confidence,
            vibe_points = self.profile.vibe_points,
            streak = self.profile.current_streak,
            new_badges = new_badges.len(),
            "Mood submission recorded"
        );
        if let Some(level) = level_up {
            info!(level, "Level up");
        }

        Ok(SubmissionOutcome {
            session_id,
            mood,
            recommendations,
            points_earned: points,
            new_badges,
            level_up,
        })
    }

    /// Classify a chat message and present its recommendations.
    ///
    /// Chat analysis earns no points and records no session.
    pub fn submit_chat<R: Rng + ?Sized>(&mut self, text: &str, rng: &mut R) -> AppResult<ChatOutcome> {
        self.require_user("chat with the assistant")?;
        validate_chat_text(text)?;

        let mood = chat::analyze_text(text);
        let recommendations = recommend(mood.category);
        self.current = Some(CurrentResult {
            mood,
            recommendations,
        });

        Ok(ChatOutcome {
            mood,
            recommendations,
            reply: chat::reply_for(mood.category, rng),
        })
    }

    /// Mark an activity from a session's bundle as done.
    ///
    /// Returns any badges the extra activity unlocked.
    pub fn complete_activity(
        &mut self,
        session_id: &str,
        activity: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<Badge>> {
        let session = self
            .sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

        if session.completed_activities.iter().any(|a| a == activity) {
            debug!(session_id, activity, "Activity already completed");
            return Ok(Vec::new());
        }
        session.completed_activities.push(activity.to_string());

        let new_badges = evaluate_badges(&self.profile, &self.sessions, now);
        if !new_badges.is_empty() {
            let mut updated = self.profile.clone();
            updated.badges.extend(new_badges.iter().cloned());
            self.profile = updated;
        }

        Ok(new_badges)
    }

    // ── Favorites ───────────────────────────────────────────────────────

    /// Save the result on screen as a favorite routine
    pub fn save_current_routine(&mut self, now: DateTime<Utc>) -> AppResult<FavoriteRoutine> {
        let current = self
            .current
            .ok_or_else(|| AppError::NotFound("No mood result to save".to_string()))?;

        let routine = FavoriteRoutine {
            id: format!("routine-{}", Uuid::new_v4()),
            name: format!("{} Routine", current.mood.category.label()),
            mood: current.mood,
            recommendations: current.recommendations,
            saved_at: now,
            times_used: 0,
        };

        let mut updated = self.profile.clone();
        updated.favorite_routines.push(routine.clone());
        self.profile = updated;

        info!(routine_id = %routine.id, name = %routine.name, "Routine saved to favorites");
        Ok(routine)
    }

    /// Replay a favorite: present it and count the use
    pub fn play_routine(&mut self, routine_id: &str) -> AppResult<FavoriteRoutine> {
        let mut updated = self.profile.clone();
        let routine = updated
            .favorite_routines
            .iter_mut()
            .find(|r| r.id == routine_id)
            .ok_or_else(|| AppError::NotFound(format!("Routine {routine_id} not found")))?;

        routine.times_used += 1;
        let played = routine.clone();

        self.profile = updated;
        self.current = Some(CurrentResult {
            mood: played.mood,
            recommendations: played.recommendations,
        });

        debug!(routine_id, times_used = played.times_used, "Routine replayed");
        Ok(played)
    }

    pub fn remove_routine(&mut self, routine_id: &str) -> AppResult<()> {
        if !self.profile.favorite_routines.iter().any(|r| r.id == routine_id) {
            return Err(AppError::NotFound(format!("Routine {routine_id} not found")));
        }

        let mut updated = self.profile.clone();
        updated.favorite_routines.retain(|r| r.id != routine_id);
        self.profile = updated;

        info!(routine_id, "Routine removed from favorites");
        Ok(())
    }

    // ── History ─────────────────────────────────────────────────────────

    /// Present a past session's result again
    pub fn load_session(&mut self, session_id: &str) -> AppResult<CurrentResult> {
        let session = self
            .sessions
            .iter()
            .find(|s| s.id == session_id)
            .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

        let result = CurrentResult {
            mood: session.mood,
            recommendations: session.recommendations,
        };
        self.current = Some(result);
        Ok(result)
    }

    /// All sessions, oldest first
    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    /// The last N sessions, newest first
    pub fn recent_sessions(&self, count: usize) -> Vec<&SessionRecord> {
        self.sessions.iter().rev().take(count).collect()
    }

    // ── Kits and community ──────────────────────────────────────────────

    pub fn record_kit_order(&mut self, kit_id: &str, now: DateTime<Utc>) -> AppResult<KitOrderOutcome> {
        self.require_user("order a wellness kit")?;

        let kit = community::find_kit(kit_id, now)
            .ok_or_else(|| AppError::NotFound(format!("Wellness kit {kit_id} not found")))?;

        let points = self.rewards.kit_order_points;
        let previous_level = self.profile.level;
        let vibe_points = self.profile.vibe_points + points;
        self.profile = UserProfile {
            vibe_points,
            level: calculate_level(vibe_points),
            ..self.profile.clone()
        };
        let level_up = (self.profile.level > previous_level).then_some(self.profile.level);

        info!(kit_id, kit = %kit.name, vibe_points, "Wellness kit ordered");

        Ok(KitOrderOutcome {
            kit,
            points_earned: points,
            level_up,
        })
    }

    pub fn like_post(&mut self, post_id: &str) -> AppResult<u32> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| AppError::NotFound(format!("Post {post_id} not found")))?;

        post.likes += 1;
        Ok(post.likes)
    }

    pub fn posts(&self) -> &[CommunityPost] {
        &self.posts
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn current(&self) -> Option<&CurrentResult> {
        self.current.as_ref()
    }

    /// Clear the result on screen, ready for a new report
    pub fn reset(&mut self) {
        self.current = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RewardSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, EnergyLevel, MoodKind};
    use crate::simulation::mock_sessions;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn signed_in() -> AppState {
        let mut state = AppState::default();
        state
            .sign_in(UserAccount {
                name: Some("Alex".to_string()),
                email: "alex@example.com".to_string(),
            })
            .unwrap();
        state
    }

    fn relaxed() -> MoodInput {
        MoodInput::new(1, EnergyLevel::Low, Activity::Relaxing)
    }

    #[test]
    fn test_app_state_creation() {
        let state = AppState::default();
        assert!(state.current_user().is_none());
        assert!(state.current().is_none());
        assert_eq!(state.profile().level, 1);
        assert_eq!(state.posts().len(), 5);
    }

    #[test]
    fn test_submission_requires_user() {
        let mut state = AppState::default();
        let result = state.submit_mood(relaxed(), Utc::now());

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
        assert!(state.sessions().is_empty());
    }

    #[test]
    fn test_first_submission() {
        let mut state = signed_in();
        let outcome = state.submit_mood(relaxed(), Utc::now()).unwrap();

        assert_eq!(outcome.mood.category, MoodKind::Calm);
        assert_eq!(outcome.mood.confidence, 100);
        assert_eq!(outcome.points_earned, 25);
        assert_eq!(outcome.level_up, None);
        assert_eq!(
            outcome.new_badges.iter().map(|b| b.id.as_str()).collect::<Vec<_>>(),
            vec!["first-session"]
        );

        let profile = state.profile();
        assert_eq!(profile.vibe_points, 25);
        assert_eq!(profile.total_submissions, 1);
        assert_eq!(profile.current_streak, 1);
        assert!(profile.has_badge("first-session"));

        assert_eq!(state.sessions().len(), 1);
        assert_eq!(state.sessions()[0].id, outcome.session_id);
        assert_eq!(state.sessions()[0].vibe_points_earned, 25);
        assert_eq!(state.current().unwrap().mood, outcome.mood);
    }

    #[test]
    fn test_repeated_submissions_never_duplicate_badges() {
        let mut state = signed_in();
        for _ in 0..8 {
            state.submit_mood(relaxed(), Utc::now()).unwrap();
        }

        let profile = state.profile();
        let mut ids: Vec<&str> = profile.badges.iter().map(|b| b.id.as_str()).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), total);
        assert_eq!(ids, vec!["first-session", "streak-3", "streak-7"]);
        assert_eq!(profile.vibe_points, 200);
        assert_eq!(profile.level, 3);
    }

    #[test]
    fn test_level_up_reported() {
        let mut state = signed_in();
        let mut level_ups = Vec::new();
        for _ in 0..4 {
            let outcome = state.submit_mood(relaxed(), Utc::now()).unwrap();
            level_ups.push(outcome.level_up);
        }

        assert_eq!(level_ups, vec![None, None, None, Some(2)]);
    }

    #[test]
    fn test_invalid_input_rejected_without_side_effects() {
        let mut state = signed_in();
        let input = MoodInput::new(7, EnergyLevel::High, Activity::Exercising);

        assert!(matches!(
            state.submit_mood(input, Utc::now()),
            Err(AppError::ValidationError(_))
        ));
        assert_eq!(state.profile().vibe_points, 0);
        assert!(state.sessions().is_empty());
    }

    #[test]
    fn test_chat_submission() {
        let mut state = signed_in();
        let mut rng = StdRng::seed_from_u64(1);

        let outcome = state.submit_chat("so much pressure at work", &mut rng).unwrap();

        assert_eq!(outcome.mood.category, MoodKind::Stressed);
        assert_eq!(outcome.mood.confidence, 85);
        assert_eq!(outcome.recommendations, recommend(MoodKind::Stressed));
        assert!(!outcome.reply.is_empty());
        assert_eq!(state.profile().vibe_points, 0);
        assert!(state.sessions().is_empty());
    }

    #[test]
    fn test_favorite_routine_lifecycle() {
        let mut state = signed_in();
        assert!(matches!(
            state.save_current_routine(Utc::now()),
            Err(AppError::NotFound(_))
        ));

        state
            .submit_mood(MoodInput::new(2, EnergyLevel::High, Activity::Exercising), Utc::now())
            .unwrap();
        let routine = state.save_current_routine(Utc::now()).unwrap();
        assert_eq!(routine.name, "Energetic Routine");
        assert_eq!(routine.times_used, 0);

        state.reset();
        let played = state.play_routine(&routine.id).unwrap();
        assert_eq!(played.times_used, 1);
        state.play_routine(&routine.id).unwrap();
        assert_eq!(state.profile().favorite_routines[0].times_used, 2);
        assert_eq!(state.current().unwrap().mood.category, MoodKind::Energetic);

        state.remove_routine(&routine.id).unwrap();
        assert!(state.profile().favorite_routines.is_empty());
        assert!(matches!(
            state.remove_routine(&routine.id),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_complete_activity_unlocks_enthusiast() {
        let mut state = signed_in();
        let outcome = state.submit_mood(relaxed(), Utc::now()).unwrap();

        let mut unlocked = Vec::new();
        for i in 0..10 {
            unlocked.extend(
                state
                    .complete_activity(&outcome.session_id, &format!("movement-{i}"), Utc::now())
                    .unwrap(),
            );
        }

        assert_eq!(unlocked.len(), 1);
        assert_eq!(unlocked[0].id, "activity-enthusiast");
        assert_eq!(state.sessions()[0].completed_activities.len(), 10);

        // Completing the same activity twice is a no-op
        let again = state
            .complete_activity(&outcome.session_id, "movement-0", Utc::now())
            .unwrap();
        assert!(again.is_empty());
        assert_eq!(state.sessions()[0].completed_activities.len(), 10);
    }

    #[test]
    fn test_kit_order_awards_points() {
        let mut state = AppState::default();
        assert!(matches!(
            state.record_kit_order("1", Utc::now()),
            Err(AppError::Unauthorized(_))
        ));

        let mut state = signed_in();
        let first = state.record_kit_order("1", Utc::now()).unwrap();
        assert_eq!(first.points_earned, 50);
        assert_eq!(first.level_up, None);

        let second = state.record_kit_order("3", Utc::now()).unwrap();
        assert_eq!(second.level_up, Some(2));
        assert_eq!(state.profile().vibe_points, 100);

        assert!(matches!(
            state.record_kit_order("missing", Utc::now()),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_like_post() {
        let mut state = AppState::default();
        let before = state.posts()[0].likes;

        assert_eq!(state.like_post("1").unwrap(), before + 1);
        assert!(state.like_post("nope").is_err());
    }

    #[test]
    fn test_history_and_recent_sessions() {
        let mut rng = StdRng::seed_from_u64(9);
        let now = Utc::now();
        let history = mock_sessions(&mut rng, 5, now);
        let newest_id = history[0].id.clone();

        let mut state = AppState::with_history(RewardSettings::default(), UserProfile::default(), history);

        let recent = state.recent_sessions(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, newest_id);

        let loaded = state.load_session(&newest_id).unwrap();
        assert_eq!(state.current(), Some(&loaded));
        assert!(state.load_session("session-missing").is_err());
    }

    #[test]
    fn test_sign_out_clears_current_result() {
        let mut state = signed_in();
        state.submit_mood(relaxed(), Utc::now()).unwrap();

        state.sign_out();

        assert!(state.current_user().is_none());
        assert!(state.current().is_none());
        // Profile and history stay in memory
        assert_eq!(state.sessions().len(), 1);
    }
}
