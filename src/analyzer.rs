//! Mood classification from the structured mood form
//!
//! Each answer adds weight to one or more of five category accumulators. The
//! heaviest accumulator wins, ties going to the category declared first in
//! [`MoodKind::ALL`].

use serde::Serialize;
use tracing::debug;

use crate::models::{Activity, EnergyLevel, MoodCategory, MoodInput, MoodKind};

/// Per-category accumulators for one mood report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MoodScores {
    pub stressed: u32,
    pub calm: u32,
    pub energetic: u32,
    pub focused: u32,
    pub creative: u32,
}

impl MoodScores {
    pub fn get(&self, mood: MoodKind) -> u32 {
        match mood {
            MoodKind::Stressed => self.stressed,
            MoodKind::Calm => self.calm,
            MoodKind::Energetic => self.energetic,
            MoodKind::Focused => self.focused,
            MoodKind::Creative => self.creative,
        }
    }

    fn add(&mut self, mood: MoodKind, weight: u32) {
        let slot = match mood {
            MoodKind::Stressed => &mut self.stressed,
            MoodKind::Calm => &mut self.calm,
            MoodKind::Energetic => &mut self.energetic,
            MoodKind::Focused => &mut self.focused,
            MoodKind::Creative => &mut self.creative,
        };
        *slot += weight;
    }

    pub fn total(&self) -> u32 {
        MoodKind::ALL.iter().map(|m| self.get(*m)).sum()
    }

    /// Highest-scoring category; the earliest in priority order wins a tie
    pub fn leader(&self) -> MoodKind {
        let max = MoodKind::ALL.iter().map(|m| self.get(*m)).max().unwrap_or(0);
        MoodKind::ALL
            .into_iter()
            .find(|m| self.get(*m) == max)
            .unwrap_or(MoodKind::Stressed)
    }

    /// Winning score as a rounded percentage of the total; 0 when nothing scored
    pub fn confidence(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        let max = self.get(self.leader());
        (f64::from(max) * 100.0 / f64::from(total)).round() as u8
    }
}

/// Weights contributed by the stress slider
fn stress_weights(stress_level: u8) -> &'static [(MoodKind, u32)] {
    match stress_level {
        4..=u8::MAX => &[(MoodKind::Stressed, 3)],
        3 => &[(MoodKind::Stressed, 1), (MoodKind::Calm, 1)],
        _ => &[(MoodKind::Calm, 2)],
    }
}

fn energy_weights(energy: EnergyLevel) -> &'static [(MoodKind, u32)] {
    match energy {
        EnergyLevel::Low => &[(MoodKind::Calm, 2)],
        EnergyLevel::Medium => &[(MoodKind::Calm, 1), (MoodKind::Focused, 2)],
        EnergyLevel::High => &[(MoodKind::Energetic, 3), (MoodKind::Creative, 1)],
    }
}

fn activity_weights(activity: Activity) -> &'static [(MoodKind, u32)] {
    match activity {
        Activity::Studying | Activity::Working | Activity::Reading => {
            &[(MoodKind::Focused, 3), (MoodKind::Stressed, 1)]
        }
        Activity::Relaxing => &[(MoodKind::Calm, 3)],
        Activity::Exercising => &[(MoodKind::Energetic, 3)],
        Activity::Socializing => &[(MoodKind::Energetic, 2), (MoodKind::Creative, 1)],
        Activity::Creative => &[(MoodKind::Creative, 3), (MoodKind::Focused, 1)],
        Activity::Commuting => &[(MoodKind::Stressed, 2)],
        Activity::Cooking => &[(MoodKind::Creative, 2), (MoodKind::Calm, 1)],
        Activity::Cleaning => &[(MoodKind::Focused, 1), (MoodKind::Energetic, 1)],
    }
}

/// Accumulate the raw category scores for a mood report
pub fn scores(input: &MoodInput) -> MoodScores {
    let mut scores = MoodScores::default();

    let contributions = stress_weights(input.stress_level)
        .iter()
        .chain(energy_weights(input.energy_level))
        .chain(activity_weights(input.current_activity));

    for (mood, weight) in contributions {
        scores.add(*mood, *weight);
    }

    scores
}

/// Classify a mood report
pub fn classify(input: &MoodInput) -> MoodCategory {
    let scores = scores(input);
    let result = MoodCategory {
        category: scores.leader(),
        confidence: scores.confidence(),
    };

    debug!(
        stress_level = input.stress_level,
        energy_level = ?input.energy_level,
        activity = ?input.current_activity,
        ?scores,
        category = %result.category,
        confidence = result.confidence,
        "Mood classified"
    );

    result
}
