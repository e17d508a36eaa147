//! Keyword mood classifier for the conversational entry surface.
//!
//! The text is lower-cased and scanned for keyword fragments one category at a
//! time, in a fixed priority order. The first category with any hit wins;
//! nothing is scored or combined. Text with no hits falls back to calm.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::models::{MoodCategory, MoodKind};

/// Confidence reported for moods derived from chat text.
pub const CHAT_CONFIDENCE: u8 = 85;

/// Category used when no keyword matches.
pub const DEFAULT_MOOD: MoodKind = MoodKind::Calm;

// ── Keyword tables ──────────────────────────────────────────────────────

/// (mood, keyword fragments), in match priority order
const KEYWORD_TABLE: &[(MoodKind, &[&str])] = &[
    (MoodKind::Stressed, &["stress", "anxious", "overwhelm", "pressure"]),
    (MoodKind::Calm, &["calm", "peaceful", "relax", "zen"]),
    (MoodKind::Energetic, &["energy", "excited", "pumped", "active"]),
    (MoodKind::Focused, &["focus", "concentrate", "work", "study"]),
    (MoodKind::Creative, &["creative", "artistic", "inspire", "imagine"]),
];

const STRESSED_REPLIES: [&str; 3] = [
    "I can sense you're feeling some tension. Let me help you find some calming activities to ease that stress.",
    "Stress can be overwhelming. I've got some great relaxation techniques that might help you feel more centered.",
    "It sounds like you need some stress relief. Let me curate some soothing recommendations for you.",
];

const CALM_REPLIES: [&str; 3] = [
    "That's wonderful that you're feeling peaceful! Let's enhance that calm energy with some mindful activities.",
    "I love that you're in a serene state. Perfect time for some gentle wellness practices.",
    "Your calm energy is beautiful. Let me suggest some activities to maintain that tranquility.",
];

const ENERGETIC_REPLIES: [&str; 3] = [
    "I can feel your vibrant energy! Let's channel that into some amazing activities.",
    "Your enthusiasm is contagious! I have some perfect high-energy recommendations for you.",
    "That energy is fantastic! Let me help you make the most of this vibrant mood.",
];

const FOCUSED_REPLIES: [&str; 3] = [
    "I can tell you're in a concentrated mindset. Great time for some productivity-boosting activities!",
    "Your focus is impressive! Let me suggest some activities that will enhance your concentration.",
    "That focused energy is perfect for deep work. I have some great recommendations to support your flow state.",
];

const CREATIVE_REPLIES: [&str; 3] = [
    "I love that creative spark! Let me find some inspiring activities to fuel your imagination.",
    "Your creative energy is wonderful. Let's nurture it with some artistic inspiration.",
    "Creativity is flowing! I have some perfect recommendations to keep those ideas coming.",
];

/// Classify free text into a mood category.
pub fn classify_text(text: &str) -> MoodKind {
    let lower = text.to_lowercase();

    let mood = KEYWORD_TABLE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(mood, _)| *mood)
        .unwrap_or(DEFAULT_MOOD);

    debug!(mood = %mood, chars = text.len(), "Chat text classified");
    mood
}

/// Classify free text and attach the fixed chat confidence.
pub fn analyze_text(text: &str) -> MoodCategory {
    MoodCategory {
        category: classify_text(text),
        confidence: CHAT_CONFIDENCE,
    }
}

fn replies(mood: MoodKind) -> &'static [&'static str; 3] {
    match mood {
        MoodKind::Stressed => &STRESSED_REPLIES,
        MoodKind::Calm => &CALM_REPLIES,
        MoodKind::Energetic => &ENERGETIC_REPLIES,
        MoodKind::Focused => &FOCUSED_REPLIES,
        MoodKind::Creative => &CREATIVE_REPLIES,
    }
}

/// Pick a canned assistant reply for a mood.
pub fn reply_for<R: Rng + ?Sized>(mood: MoodKind, rng: &mut R) -> &'static str {
    replies(mood)
        .choose(rng)
        .copied()
        .unwrap_or(CALM_REPLIES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_keyword_categories() {
        assert_eq!(classify_text("I'm so anxious about tomorrow"), MoodKind::Stressed);
        assert_eq!(classify_text("Feeling pretty zen today"), MoodKind::Calm);
        assert_eq!(classify_text("I'm pumped for the game!"), MoodKind::Energetic);
        assert_eq!(classify_text("need to concentrate on this essay"), MoodKind::Focused);
        assert_eq!(classify_text("I want to imagine new worlds"), MoodKind::Creative);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify_text("TOTALLY OVERWHELMED"), MoodKind::Stressed);
        assert_eq!(classify_text("Peaceful"), MoodKind::Calm);
    }

    #[test]
    fn test_first_category_in_priority_wins() {
        // "work" (focused) and "stress" (stressed) both present
        assert_eq!(classify_text("work is causing me stress"), MoodKind::Stressed);
        // "relax" (calm) beats "creative"
        assert_eq!(classify_text("a creative way to relax"), MoodKind::Calm);
        // "active" (energetic) beats "study" (focused)
        assert_eq!(classify_text("active study group"), MoodKind::Energetic);
    }

    #[test]
    fn test_fragments_match_inside_words() {
        assert_eq!(classify_text("so much homework"), MoodKind::Focused);
        assert_eq!(classify_text("relaxation time"), MoodKind::Calm);
    }

    #[test]
    fn test_no_match_defaults_to_calm() {
        assert_eq!(classify_text("hello there"), MoodKind::Calm);
        assert_eq!(classify_text(""), MoodKind::Calm);
    }

    #[test]
    fn test_analyze_text_confidence() {
        let mood = analyze_text("feeling inspired");
        assert_eq!(mood.category, MoodKind::Creative);
        assert_eq!(mood.confidence, CHAT_CONFIDENCE);
    }

    #[test]
    fn test_reply_matches_mood() {
        let mut rng = StdRng::seed_from_u64(7);
        for mood in MoodKind::ALL {
            let reply = reply_for(mood, &mut rng);
            assert!(replies(mood).contains(&reply));
        }
    }
}
