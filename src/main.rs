//! VibeSync demo runner
//!
//! Walks one user through a wellness session against the in-memory core:
//! sign in (or restore the saved user), show the processing statuses, submit
//! a mood report, chat, save a routine and order a kit. Everything is logged
//! as structured JSON.

use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use tokio::sync::{mpsc, RwLock};
use tokio::time::{sleep, Duration};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vibesync::config::Settings;
use vibesync::gamification::{motivational_message, points_to_next_level};
use vibesync::models::{Activity, EnergyLevel, MoodInput, UserAccount, UserProfile};
use vibesync::simulation::{mock_favorites, mock_sessions, ProcessingSimulator};
use vibesync::state::AppState;
use vibesync::storage::UserStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenv::dotenv().ok();

    // Logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,vibesync=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json())
        .init();

    let settings = Settings::from_env().context("Failed to load configuration")?;
    info!("Starting VibeSync demo");

    // Restore or create the user record
    let store = UserStore::from_settings(&settings.storage);
    let account = match store.load() {
        Ok(Some(account)) => account,
        Ok(None) => UserAccount {
            name: Some("Demo User".to_string()),
            email: "demo@vibesync.app".to_string(),
        },
        Err(e) => {
            warn!(error = %e, "Saved user record unreadable, starting fresh");
            UserAccount {
                name: None,
                email: "demo@vibesync.app".to_string(),
            }
        }
    };

    // Seed a little history so the dashboard has something to show
    let mut rng = rand::thread_rng();
    let now = Utc::now();
    let profile = UserProfile {
        favorite_routines: mock_favorites(now),
        ..UserProfile::default()
    };
    let history = mock_sessions(&mut rng, 3, now);

    let state = Arc::new(RwLock::new(AppState::with_history(
        settings.rewards,
        profile,
        history,
    )));

    state.write().await.sign_in(account.clone())?;
    store.save(&account)?;

    // Processing statuses while the "analysis" runs
    let (tx, mut rx) = mpsc::channel(8);
    let simulator = ProcessingSimulator::new(settings.simulation.status_step_ms);
    let status_task = tokio::spawn(simulator.run(tx));

    let delay = sleep(Duration::from_millis(settings.simulation.analysis_delay_ms));
    tokio::pin!(delay);
    loop {
        tokio::select! {
            Some(status) = rx.recv() => info!(status, "Processing"),
            _ = &mut delay => break,
        }
    }
    drop(rx);
    let shown = status_task.await.context("Status task failed")?;
    info!(shown, "Analysis complete");

    let input = MoodInput::new(4, EnergyLevel::Medium, Activity::Working);
    let outcome = state.write().await.submit_mood(input, Utc::now())?;
    info!(
        mood = %outcome.mood.category,
        confidence = outcome.mood.confidence,
        playlist = outcome.recommendations.playlists[0].name,
        scent = outcome.recommendations.scents[0].name,
        movement = outcome.recommendations.movements[0].name,
        new_badges = outcome.new_badges.len(),
        "Recommendations ready"
    );

    let chat = state
        .write()
        .await
        .submit_chat("I need to focus on my study session", &mut rng)?;
    info!(mood = %chat.mood.category, reply = chat.reply, "Assistant replied");

    let routine = state.write().await.save_current_routine(Utc::now())?;
    info!(routine = %routine.name, "Routine saved");

    let order = state.write().await.record_kit_order("3", Utc::now())?;
    info!(
        kit = %order.kit.name,
        estimated_delivery = %order.kit.estimated_delivery,
        points = order.points_earned,
        "Kit ordered"
    );

    let state = state.read().await;
    let profile = state.profile();
    info!(
        vibe_points = profile.vibe_points,
        level = profile.level,
        to_next_level = points_to_next_level(profile.vibe_points),
        badges = profile.badges.len(),
        sessions = state.sessions().len(),
        message = %motivational_message(profile, &mut rng),
        "Session summary"
    );

    Ok(())
}
