//! Recommendation resolution
//!
//! Maps a mood category to its bundle of curated content. Bundles borrow the
//! static catalog tables directly, so resolving the same mood twice yields the
//! very same slices.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{self, MovementRecommendation, Playlist, ScentRecommendation};
use crate::models::{MoodCategory, MoodKind};

/// Playlists, scents and movements for one mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendationBundle {
    pub playlists: &'static [Playlist; 3],
    pub scents: &'static [ScentRecommendation; 3],
    pub movements: &'static [MovementRecommendation; 3],
}

/// Resolve the bundle for a category
pub fn recommend(category: MoodKind) -> RecommendationBundle {
    debug!(mood = %category, "Resolving recommendation bundle");

    RecommendationBundle {
        playlists: catalog::playlists(category),
        scents: catalog::scents(category),
        movements: catalog::movements(category),
    }
}

/// Resolve the bundle for a classification result
pub fn recommend_for(mood: &MoodCategory) -> RecommendationBundle {
    recommend(mood.category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mood_has_three_of_each() {
        for mood in MoodKind::ALL {
            let bundle = recommend(mood);
            assert_eq!(bundle.playlists.len(), 3);
            assert_eq!(bundle.scents.len(), 3);
            assert_eq!(bundle.movements.len(), 3);
        }
    }

    #[test]
    fn test_repeated_calls_share_catalog_tables() {
        for mood in MoodKind::ALL {
            let first = recommend(mood);
            let second = recommend(mood);

            assert_eq!(first, second);
            assert!(std::ptr::eq(first.playlists, second.playlists));
            assert!(std::ptr::eq(first.scents, second.scents));
            assert!(std::ptr::eq(first.movements, second.movements));
        }
    }

    #[test]
    fn test_moods_resolve_to_distinct_content() {
        let calm = recommend(MoodKind::Calm);
        let energetic = recommend(MoodKind::Energetic);

        assert_eq!(calm.scents[0].name, "Vanilla");
        assert_eq!(energetic.scents[0].name, "Citrus");
        assert_ne!(calm.playlists[0].id, energetic.playlists[0].id);
    }

    #[test]
    fn test_recommend_for_uses_category_only() {
        let low = MoodCategory {
            category: MoodKind::Focused,
            confidence: 10,
        };
        let high = MoodCategory {
            category: MoodKind::Focused,
            confidence: 95,
        };

        assert_eq!(recommend_for(&low), recommend_for(&high));
        assert_eq!(recommend_for(&low).movements[0].name, "Eye Exercises");
    }
}
