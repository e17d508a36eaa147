//! Simulated "AI processing" and demo data
//!
//! ══════════════════════════════════════════════════════════════════════════════
//! COSMETIC ONLY
//! ══════════════════════════════════════════════════════════════════════════════
//!
//! Nothing here influences classification or recommendations. The processing
//! simulator rotates status lines on a timer so a presentation layer has
//! something to show while it waits; the mock generators fill history and
//! favorites for demos and first runs.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};
use tracing::{debug, info};

use crate::models::{
    Activity, EnergyLevel, FavoriteRoutine, MoodCategory, MoodInput, MoodKind, SessionRecord,
};
use crate::recommendation::recommend;

/// Status lines shown while a mood report is "analyzed"
pub const PROCESSING_STATUSES: [&str; 5] = [
    "Analyzing your unique energy patterns...",
    "Curating personalized recommendations...",
    "Preparing your wellness kit...",
    "Logging session data...",
    "Finalizing your vibe profile...",
];

/// Emits the processing statuses one tick apart
pub struct ProcessingSimulator {
    /// Interval between statuses in milliseconds
    step_ms: u64,
}

impl ProcessingSimulator {
    pub fn new(step_ms: u64) -> Self {
        Self { step_ms }
    }

    /// Send every status in order, returning how many were delivered.
    ///
    /// Stops early when the receiver is dropped.
    pub async fn run(self, tx: mpsc::Sender<&'static str>) -> usize {
        info!(step_ms = self.step_ms, "Starting processing simulation");

        let mut tick_interval = interval(Duration::from_millis(self.step_ms.max(1)));
        let mut delivered = 0;

        for status in PROCESSING_STATUSES {
            tick_interval.tick().await;

            if tx.send(status).await.is_err() {
                debug!(delivered, "Status receiver dropped");
                break;
            }
            delivered += 1;
        }

        delivered
    }
}

/// Random past sessions, one per day going back from `now`
pub fn mock_sessions<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    now: DateTime<Utc>,
) -> Vec<SessionRecord> {
    let energies = [EnergyLevel::Low, EnergyLevel::Medium, EnergyLevel::High];

    (0..count)
        .map(|day| {
            let date = now - ChronoDuration::days(day as i64);
            let mood = *MoodKind::ALL.choose(rng).unwrap_or(&MoodKind::Calm);
            let completed: usize = rng.gen_range(1..=4);

            let mood_data = MoodInput {
                stress_level: rng.gen_range(1..=5),
                energy_level: *energies.choose(rng).unwrap_or(&EnergyLevel::Medium),
                current_activity: Activity::Working,
                timestamp: date,
            };

            let mut session = SessionRecord::new(
                MoodCategory {
                    category: mood,
                    confidence: rng.gen_range(80..100),
                },
                mood_data,
                recommend(mood),
                completed as u32 * 25,
                date,
            );
            session.completed_activities =
                (0..completed).map(|j| format!("activity-{j}")).collect();
            session
        })
        .collect()
}

/// Two starter favorites
pub fn mock_favorites(now: DateTime<Utc>) -> Vec<FavoriteRoutine> {
    let favorite = |id: &str, name: &str, mood: MoodKind, confidence: u8, days: i64, used: u32| {
        FavoriteRoutine {
            id: id.to_string(),
            name: name.to_string(),
            mood: MoodCategory {
                category: mood,
                confidence,
            },
            recommendations: recommend(mood),
            saved_at: now - ChronoDuration::days(days),
            times_used: used,
        }
    };

    vec![
        favorite("fav-1", "Morning Calm Ritual", MoodKind::Calm, 92, 7, 8),
        favorite("fav-2", "Creative Flow Session", MoodKind::Creative, 88, 14, 5),
    ]
}
