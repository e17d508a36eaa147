//! Mock community feed and wellness kit catalog

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::MoodKind;

/// A post in the community feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityPost {
    pub id: String,
    pub author: String,
    pub avatar: String,
    pub content: String,
    pub mood: MoodKind,
    pub timestamp: DateTime<Utc>,
    pub likes: u32,
    pub comments: u32,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Preparing,
    Shipped,
    Delivered,
}

/// An orderable bundle of wellness products
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellnessKit {
    pub id: String,
    pub name: String,
    pub description: String,
    pub items: Vec<String>,
    /// Price in cents
    pub price_cents: u32,
    pub image: String,
    pub delivery_status: DeliveryStatus,
    pub estimated_delivery: DateTime<Utc>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    author: &str,
    photo: &str,
    content: &str,
    mood: MoodKind,
    posted_at: DateTime<Utc>,
    likes: u32,
    comments: u32,
    tags: &[&str],
) -> CommunityPost {
    CommunityPost {
        id: id.to_string(),
        author: author.to_string(),
        avatar: format!(
            "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&w=100&h=100"
        ),
        content: content.to_string(),
        mood,
        timestamp: posted_at,
        likes,
        comments,
        tags: strings(tags),
    }
}

/// Seed posts for the community feed, newest first
pub fn seed_posts(now: DateTime<Utc>) -> Vec<CommunityPost> {
    vec![
        post(
            "1",
            "Sarah M.",
            "774909",
            "Just finished my morning breathing exercise! Feeling so centered and ready for the day. The lavender scent recommendation was perfect! 🌸",
            MoodKind::Calm,
            now - Duration::minutes(30),
            12,
            3,
            &["breathing", "morning", "lavender"],
        ),
        post(
            "2",
            "Mike R.",
            "220453",
            "Work stress was getting to me, but the quick desk stretches and peppermint aromatherapy combo worked wonders! Thanks VibeSync! 💪",
            MoodKind::Stressed,
            now - Duration::hours(2),
            8,
            1,
            &["work", "stress", "stretches"],
        ),
        post(
            "3",
            "Emma L.",
            "415829",
            "Creative block is gone! The jasmine scent and upbeat playlist got my artistic juices flowing again. Currently painting my best piece yet! 🎨",
            MoodKind::Creative,
            now - Duration::hours(4),
            15,
            5,
            &["creative", "painting", "jasmine", "music"],
        ),
        post(
            "4",
            "David K.",
            "697509",
            "Energy levels through the roof today! The citrus aromatherapy and dance break combo is my new favorite. Who else loves the energetic playlists? ⚡",
            MoodKind::Energetic,
            now - Duration::hours(6),
            20,
            7,
            &["energy", "dance", "citrus", "playlists"],
        ),
        post(
            "5",
            "Lisa T.",
            "762020",
            "Deep focus mode activated! The rosemary scent and instrumental music helped me power through my project. Productivity level: 100! 🎯",
            MoodKind::Focused,
            now - Duration::hours(8),
            11,
            2,
            &["focus", "productivity", "rosemary", "instrumental"],
        ),
    ]
}

/// The orderable kits, with delivery estimates relative to `now`
pub fn wellness_kits(now: DateTime<Utc>) -> Vec<WellnessKit> {
    vec![
        WellnessKit {
            id: "1".to_string(),
            name: "Calm & Centered Kit".to_string(),
            description: "Everything you need for deep relaxation and stress relief".to_string(),
            items: strings(&[
                "Lavender essential oil (10ml)",
                "Chamomile tea blend (50g)",
                "Meditation cushion",
                "Breathing exercise guide",
                "Stress relief journal",
                "Aromatherapy diffuser",
                "Relaxation playlist access",
            ]),
            price_cents: 4999,
            image: "https://images.pexels.com/photos/3822622/pexels-photo-3822622.jpeg?auto=compress&w=400&h=300".to_string(),
            delivery_status: DeliveryStatus::Preparing,
            estimated_delivery: now + Duration::days(3),
        },
        WellnessKit {
            id: "2".to_string(),
            name: "Energy Boost Kit".to_string(),
            description: "Revitalize your energy with natural aromatherapy and movement tools"
                .to_string(),
            items: strings(&[
                "Citrus essential oil blend (10ml)",
                "Peppermint oil (5ml)",
                "Resistance bands",
                "Energy smoothie recipe book",
                "Morning routine planner",
                "Energizing tea blend (30g)",
                "Workout playlist access",
            ]),
            price_cents: 3999,
            image: "https://images.pexels.com/photos/1709003/pexels-photo-1709003.jpeg?auto=compress&w=400&h=300".to_string(),
            delivery_status: DeliveryStatus::Shipped,
            estimated_delivery: now + Duration::days(2),
        },
        WellnessKit {
            id: "3".to_string(),
            name: "Focus & Productivity Kit".to_string(),
            description: "Enhance concentration and mental clarity for peak performance"
                .to_string(),
            items: strings(&[
                "Rosemary essential oil (8ml)",
                "Peppermint oil (5ml)",
                "Focus-enhancing tea blend (40g)",
                "Productivity planner",
                "Desk aromatherapy diffuser",
                "Blue light blocking glasses",
                "Concentration playlist access",
            ]),
            price_cents: 4499,
            image: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&w=400&h=300".to_string(),
            delivery_status: DeliveryStatus::Preparing,
            estimated_delivery: now + Duration::days(4),
        },
        WellnessKit {
            id: "4".to_string(),
            name: "Creative Flow Kit".to_string(),
            description: "Unlock your artistic potential with inspiring scents and tools"
                .to_string(),
            items: strings(&[
                "Jasmine essential oil (8ml)",
                "Orange blossom oil (5ml)",
                "Creative journal with prompts",
                "Inspiration card deck",
                "Artistic tea blend (35g)",
                "Creativity playlist access",
                "Mindfulness coloring book",
            ]),
            price_cents: 4299,
            image: "https://images.pexels.com/photos/1109541/pexels-photo-1109541.jpeg?auto=compress&w=400&h=300".to_string(),
            delivery_status: DeliveryStatus::Preparing,
            estimated_delivery: now + Duration::days(3),
        },
    ]
}

/// Look up a kit by id
pub fn find_kit(id: &str, now: DateTime<Utc>) -> Option<WellnessKit> {
    wellness_kits(now).into_iter().find(|k| k.id == id)
}
