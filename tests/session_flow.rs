//! End-to-end wellness session flow through the public API

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use vibesync::config::RewardSettings;
use vibesync::error::AppError;
use vibesync::models::{Activity, EnergyLevel, MoodInput, MoodKind, UserAccount};
use vibesync::recommendation::recommend;
use vibesync::state::AppState;
use vibesync::storage::UserStore;

fn account() -> UserAccount {
    UserAccount {
        name: Some("Casey".to_string()),
        email: "casey@example.com".to_string(),
    }
}

#[test]
fn test_user_record_survives_restart() {
    let dir = TempDir::new().unwrap();
    let store = UserStore::new(dir.path(), "vibesync_user");

    let mut state = AppState::default();
    state.sign_in(account()).unwrap();
    store.save(state.current_user().unwrap()).unwrap();

    // A fresh process restores the saved identity
    let restored = store.load().unwrap().unwrap();
    let mut next = AppState::default();
    next.sign_in(restored).unwrap();
    assert_eq!(next.current_user(), Some(&account()));

    next.sign_out();
    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_full_session_flow() {
    let mut state = AppState::new(RewardSettings::default());
    let mut rng = StdRng::seed_from_u64(7);

    assert!(matches!(
        state.submit_chat("feeling creative", &mut rng),
        Err(AppError::Unauthorized(_))
    ));
    state.sign_in(account()).unwrap();

    let reports = [
        (5, EnergyLevel::Low, Activity::Commuting, MoodKind::Stressed),
        (1, EnergyLevel::Low, Activity::Relaxing, MoodKind::Calm),
        (3, EnergyLevel::High, Activity::Exercising, MoodKind::Energetic),
    ];

    let mut all_badges = Vec::new();
    for (stress, energy, activity, expected) in reports {
        let outcome = state
            .submit_mood(MoodInput::new(stress, energy, activity), Utc::now())
            .unwrap();
        assert_eq!(outcome.mood.category, expected);
        assert_eq!(outcome.recommendations, recommend(expected));
        all_badges.extend(outcome.new_badges);
    }

    let ids: Vec<&str> = all_badges.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["first-session", "streak-3", "mood-explorer"]);

    let profile = state.profile();
    assert_eq!(profile.vibe_points, 75);
    assert_eq!(profile.total_submissions, 3);
    assert_eq!(profile.level, 1);
    assert_eq!(profile.badges.len(), 3);

    // Chat changes the result on screen but not the score
    let chat = state.submit_chat("Deadline PRESSURE again", &mut rng).unwrap();
    assert_eq!(chat.mood.category, MoodKind::Stressed);
    assert_eq!(state.profile().vibe_points, 75);
    assert_eq!(state.sessions().len(), 3);

    let routine = state.save_current_routine(Utc::now()).unwrap();
    assert_eq!(routine.name, "Stressed Routine");

    let order = state.record_kit_order("1", Utc::now()).unwrap();
    assert_eq!(order.level_up, Some(2));
    assert_eq!(state.profile().vibe_points, 125);

    let recent = state.recent_sessions(10);
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].mood.category, MoodKind::Energetic);
}
