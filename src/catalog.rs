//! Curated recommendation catalog
//!
//! Static content tables keyed by [`MoodKind`]. Every mood maps to exactly three
//! playlists, three scents and three movements; the array lengths make that a
//! compile-time property.

use serde::Serialize;

use crate::models::MoodKind;

/// A curated listening playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Playlist {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tracks: u32,
    pub duration: &'static str,
    pub image: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotify_url: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<&'static str>,
}

/// Do-it-yourself preparation for a scent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiyRecipe {
    pub ingredients: &'static [&'static str],
    pub instructions: &'static [&'static str],
    pub duration: &'static str,
}

/// An aromatherapy suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScentRecommendation {
    pub name: &'static str,
    pub benefits: &'static str,
    pub icon: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diy_recipe: Option<DiyRecipe>,
}

/// A short movement exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MovementRecommendation {
    pub name: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Playlists for a mood
pub fn playlists(mood: MoodKind) -> &'static [Playlist; 3] {
    match mood {
        MoodKind::Stressed => &STRESSED_PLAYLISTS,
        MoodKind::Calm => &CALM_PLAYLISTS,
        MoodKind::Energetic => &ENERGETIC_PLAYLISTS,
        MoodKind::Focused => &FOCUSED_PLAYLISTS,
        MoodKind::Creative => &CREATIVE_PLAYLISTS,
    }
}

/// Scents for a mood
pub fn scents(mood: MoodKind) -> &'static [ScentRecommendation; 3] {
    match mood {
        MoodKind::Stressed => &STRESSED_SCENTS,
        MoodKind::Calm => &CALM_SCENTS,
        MoodKind::Energetic => &ENERGETIC_SCENTS,
        MoodKind::Focused => &FOCUSED_SCENTS,
        MoodKind::Creative => &CREATIVE_SCENTS,
    }
}

/// Movements for a mood
pub fn movements(mood: MoodKind) -> &'static [MovementRecommendation; 3] {
    match mood {
        MoodKind::Stressed => &STRESSED_MOVEMENTS,
        MoodKind::Calm => &CALM_MOVEMENTS,
        MoodKind::Energetic => &ENERGETIC_MOVEMENTS,
        MoodKind::Focused => &FOCUSED_MOVEMENTS,
        MoodKind::Creative => &CREATIVE_MOVEMENTS,
    }
}

const fn playlist(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    tracks: u32,
    duration: &'static str,
    image: &'static str,
    youtube_url: &'static str,
) -> Playlist {
    Playlist {
        id,
        name,
        description,
        tracks,
        duration,
        image,
        spotify_url: None,
        youtube_url: Some(youtube_url),
    }
}

const fn movement(
    name: &'static str,
    duration: &'static str,
    description: &'static str,
    icon: &'static str,
) -> MovementRecommendation {
    MovementRecommendation {
        name,
        duration,
        description,
        icon,
    }
}

// ── Playlists ───────────────────────────────────────────────────────────

static STRESSED_PLAYLISTS: [Playlist; 3] = [
    playlist(
        "1",
        "Deep Focus Chill",
        "Calming beats to reduce stress and improve focus",
        45,
        "2h 34m",
        "https://images.pexels.com/photos/3094215/pexels-photo-3094215.jpeg?auto=compress&w=300&h=300",
        "https://www.youtube.com/watch?v=jfKfPfyJRdk",
    ),
    playlist(
        "2",
        "Ambient Relaxation",
        "Peaceful ambient sounds for deep relaxation",
        32,
        "1h 58m",
        "https://images.pexels.com/photos/2531709/pexels-photo-2531709.jpeg?auto=compress&w=300&h=300",
        "https://www.youtube.com/watch?v=1ZYbU82GVz4",
    ),
    playlist(
        "3",
        "Nature Sounds & Lo-Fi",
        "Gentle nature sounds mixed with lo-fi beats",
        28,
        "1h 42m",
        "https://images.pexels.com/photos/414612/pexels-photo-414612.jpeg?auto=compress&w=300&h=300",
        "https://www.youtube.com/watch?v=5qap5aO4i9A",
    ),
];

static CALM_PLAYLISTS: [Playlist; 3] = [
    playlist(
        "4",
        "Acoustic Serenity",
        "Soft acoustic melodies for peaceful moments",
        38,
        "2h 15m",
        "https://images.pexels.com/photos/1407322/pexels-photo-1407322.jpeg?auto=compress&w=300&h=300",
        "https://www.youtube.com/watch?v=36YnV9STBqc",
    ),
    playlist(
        "5",
        "Mindful Meditation",
        "Gentle instrumentals for meditation and mindfulness",
        25,
        "1h 33m",
        "https://images.pexels.com/photos/3822622/pexels-photo-3822622.jpeg?auto=compress&w=300&h=300",
        "https://www.youtube.com/watch?v=inpok4MKVLM",
    ),
    playlist(
        "6",
        "Evening Wind Down",
        "Perfect playlist for unwinding after a long day",
        42,
        "2h 28m",
        "https://images.pexels.com/photos/1770809/pexels-photo-1770809.jpeg?auto=compress&w=300&h=300",
        "https://www.youtube.com/watch?v=lFcSrYw-ARY",
    ),
];

static ENERGETIC_PLAYLISTS: [Playlist; 3] = [
    playlist(
        "7",
        "Morning Motivation",
        "Uplifting tracks to start your day with energy",
        50,
        "2h 45m",
        "https://images.pexels.com/photos/1709003/pexels-photo-1709003.jpeg?auto=compress&w=300&h=300",
        "https://www.youtube.com/watch?v=ZbZSe6N_BXs",
    ),
    playlist(
        "8",
        "Workout Power",
        "High-energy beats for intense workouts",
        35,
        "1h 52m",
        "https://images.pexels.com/photos/2261477/pexels-photo-2261477.jpeg?auto=compress&w=300&h=300",
        "https://www.youtube.com/watch?v=BHXzwypAKSs",
    ),
    playlist(
        "9",
        "Feel Good Vibes",
        "Positive, upbeat songs to boost your mood",
        44,
        "2h 36m",
        "https://images.pexels.com/photos/3756740/pexels-photo-3756740.jpeg?auto=compress&w=300&h=300",
        "https://www.youtube.com/watch?v=y6120QOlsfU",
    ),
];

static FOCUSED_PLAYLISTS: [Playlist; 3] = [
    playlist(
        "10",
        "Deep Work Flow",
        "Instrumental tracks for maximum concentration",
        40,
        "2h 20m",
        "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&w=300&h=300",
        "https://www.youtube.com/watch?v=kgx4WGK0oNU",
    ),
    playlist(
        "11",
        "Study Sessions",
        "Perfect background music for studying",
        35,
        "2h 5m",
        "https://images.pexels.com/photos/159711/books-bookstore-book-reading-159711.jpeg?auto=compress&w=300&h=300",
        "https://www.youtube.com/watch?v=5yx6BWlEVcY",
    ),
    playlist(
        "12",
        "Productivity Boost",
        "Energizing yet focused music for work",
        38,
        "2h 12m",
        "https://images.pexels.com/photos/3184360/pexels-photo-3184360.jpeg?auto=compress&w=300&h=300",
        "https://www.youtube.com/watch?v=jfKfPfyJRdk",
    ),
];

static CREATIVE_PLAYLISTS: [Playlist; 3] = [
    playlist(
        "13",
        "Creative Flow",
        "Inspiring music to unlock your creativity",
        42,
        "2h 30m",
        "https://images.pexels.com/photos/1109541/pexels-photo-1109541.jpeg?auto=compress&w=300&h=300",
        "https://www.youtube.com/watch?v=BeOmyG_U_ts",
    ),
    playlist(
        "14",
        "Artistic Inspiration",
        "Eclectic mix to spark your imagination",
        36,
        "2h 8m",
        "https://images.pexels.com/photos/1183992/pexels-photo-1183992.jpeg?auto=compress&w=300&h=300",
        "https://www.youtube.com/watch?v=mvJjmWTg7Qo",
    ),
    playlist(
        "15",
        "Innovation Soundtrack",
        "Modern beats for creative thinking",
        33,
        "1h 55m",
        "https://images.pexels.com/photos/3184465/pexels-photo-3184465.jpeg?auto=compress&w=300&h=300",
        "https://www.youtube.com/watch?v=DWcJFNfaw9c",
    ),
];

// ── Scents ──────────────────────────────────────────────────────────────

static STRESSED_SCENTS: [ScentRecommendation; 3] = [
    ScentRecommendation {
        name: "Lavender",
        benefits: "Reduces anxiety and promotes relaxation",
        icon: "🌸",
        diy_recipe: Some(DiyRecipe {
            ingredients: &[
                "2 cups dried lavender buds",
                "1 cup carrier oil (jojoba or sweet almond)",
                "Glass jar",
            ],
            instructions: &[
                "Place dried lavender buds in a clean glass jar",
                "Pour carrier oil over lavender, ensuring buds are completely covered",
                "Seal jar and place in a sunny window for 2-4 weeks",
                "Strain the oil through cheesecloth into a clean bottle",
                "Use 2-3 drops on pulse points or add to diffuser",
            ],
            duration: "2-4 weeks infusion time",
        }),
    },
    ScentRecommendation {
        name: "Chamomile",
        benefits: "Calms the mind and reduces stress",
        icon: "🌼",
        diy_recipe: Some(DiyRecipe {
            ingredients: &[
                "1/4 cup dried chamomile flowers",
                "1 cup boiling water",
                "Essential oil diffuser",
            ],
            instructions: &[
                "Steep dried chamomile flowers in boiling water for 10 minutes",
                "Strain the liquid and let it cool completely",
                "Pour the chamomile tea into your diffuser",
                "Add 2-3 drops of chamomile essential oil if available",
                "Run diffuser for 30-60 minutes in your space",
            ],
            duration: "15 minutes prep time",
        }),
    },
    ScentRecommendation {
        name: "Bergamot",
        benefits: "Uplifts mood while reducing tension",
        icon: "🍋",
        diy_recipe: Some(DiyRecipe {
            ingredients: &["Zest of 2 bergamot oranges", "1/2 cup vodka", "Small spray bottle"],
            instructions: &[
                "Grate the zest from fresh bergamot oranges",
                "Place zest in a small jar with vodka",
                "Let mixture sit for 1 week, shaking daily",
                "Strain liquid into spray bottle",
                "Spray lightly in room or on linens for aromatherapy",
            ],
            duration: "1 week infusion time",
        }),
    },
];

static CALM_SCENTS: [ScentRecommendation; 3] = [
    ScentRecommendation {
        name: "Vanilla",
        benefits: "Creates a warm, comforting atmosphere",
        icon: "🌿",
        diy_recipe: Some(DiyRecipe {
            ingredients: &["2 vanilla beans", "1/2 cup carrier oil", "Small glass bottle"],
            instructions: &[
                "Split vanilla beans lengthwise and scrape out seeds",
                "Place beans and seeds in carrier oil",
                "Let infuse in a cool, dark place for 2 weeks",
                "Strain oil through fine mesh or cheesecloth",
                "Use in diffuser or apply to skin as natural perfume",
            ],
            duration: "2 weeks infusion time",
        }),
    },
    ScentRecommendation {
        name: "Sandalwood",
        benefits: "Promotes mental clarity and peace",
        icon: "🪵",
        diy_recipe: Some(DiyRecipe {
            ingredients: &["Sandalwood powder", "Coconut oil", "Small container"],
            instructions: &[
                "Mix 2 tablespoons sandalwood powder with 1/4 cup melted coconut oil",
                "Stir until well combined and smooth",
                "Let mixture cool and solidify",
                "Apply small amount to temples and wrists",
                "Inhale deeply for calming aromatherapy effect",
            ],
            duration: "10 minutes prep time",
        }),
    },
    ScentRecommendation {
        name: "Rose",
        benefits: "Enhances emotional balance and tranquility",
        icon: "🌹",
        diy_recipe: Some(DiyRecipe {
            ingredients: &["2 cups fresh rose petals", "1 cup distilled water", "Spray bottle"],
            instructions: &[
                "Gently rinse fresh rose petals and pat dry",
                "Boil distilled water and pour over rose petals",
                "Cover and let steep for 30 minutes",
                "Strain liquid and pour into spray bottle",
                "Mist around room or on pillows for relaxation",
            ],
            duration: "45 minutes total time",
        }),
    },
];

static ENERGETIC_SCENTS: [ScentRecommendation; 3] = [
    ScentRecommendation {
        name: "Citrus",
        benefits: "Boosts energy and mental alertness",
        icon: "🍊",
        diy_recipe: Some(DiyRecipe {
            ingredients: &[
                "Peels from 2 oranges, 1 lemon, 1 lime",
                "1 cup white vinegar",
                "Spray bottle",
            ],
            instructions: &[
                "Place all citrus peels in a glass jar",
                "Cover with white vinegar and seal tightly",
                "Let infuse for 2 weeks in a cool, dark place",
                "Strain liquid and dilute 1:1 with water",
                "Use as room spray for instant energy boost",
            ],
            duration: "2 weeks infusion time",
        }),
    },
    ScentRecommendation {
        name: "Peppermint",
        benefits: "Invigorates and increases focus",
        icon: "🌱",
        diy_recipe: Some(DiyRecipe {
            ingredients: &[
                "1/2 cup fresh peppermint leaves",
                "1 cup boiling water",
                "Ice cubes",
            ],
            instructions: &[
                "Crush fresh peppermint leaves gently to release oils",
                "Pour boiling water over leaves and steep for 15 minutes",
                "Strain and add ice cubes to cool quickly",
                "Pour into spray bottle for instant cooling mist",
                "Spray on face and neck for energizing effect",
            ],
            duration: "20 minutes prep time",
        }),
    },
    ScentRecommendation {
        name: "Eucalyptus",
        benefits: "Refreshes and energizes the mind",
        icon: "🌿",
        diy_recipe: Some(DiyRecipe {
            ingredients: &["Fresh eucalyptus branches", "Hot shower", "Rubber band"],
            instructions: &[
                "Gather 3-4 fresh eucalyptus branches",
                "Bundle together with rubber band",
                "Hang bundle from shower head, away from direct water",
                "Take a hot shower - steam will release eucalyptus oils",
                "Breathe deeply for natural aromatherapy experience",
            ],
            duration: "5 minutes setup time",
        }),
    },
];

static FOCUSED_SCENTS: [ScentRecommendation; 3] = [
    ScentRecommendation {
        name: "Rosemary",
        benefits: "Enhances memory and concentration",
        icon: "🌿",
        diy_recipe: Some(DiyRecipe {
            ingredients: &["Fresh rosemary sprigs", "1 cup olive oil", "Glass jar"],
            instructions: &[
                "Wash and dry fresh rosemary sprigs thoroughly",
                "Bruise leaves gently to release oils",
                "Place in glass jar and cover with olive oil",
                "Let infuse for 1 week in sunny location",
                "Use 1-2 drops on temples while studying or working",
            ],
            duration: "1 week infusion time",
        }),
    },
    ScentRecommendation {
        name: "Lemon",
        benefits: "Improves focus and mental clarity",
        icon: "🍋",
        diy_recipe: Some(DiyRecipe {
            ingredients: &["Zest of 3 lemons", "1/2 cup witch hazel", "Small spray bottle"],
            instructions: &[
                "Grate fresh lemon zest, avoiding white pith",
                "Mix zest with witch hazel in glass container",
                "Let mixture sit for 24 hours, stirring occasionally",
                "Strain through coffee filter into spray bottle",
                "Spray in workspace for mental clarity boost",
            ],
            duration: "24 hours infusion time",
        }),
    },
    ScentRecommendation {
        name: "Pine",
        benefits: "Clears mental fog and increases alertness",
        icon: "🌲",
        diy_recipe: Some(DiyRecipe {
            ingredients: &["Fresh pine needles", "Hot water", "Large bowl"],
            instructions: &[
                "Collect fresh pine needles from clean trees",
                "Place needles in large heat-proof bowl",
                "Pour hot (not boiling) water over needles",
                "Cover head with towel and lean over bowl",
                "Inhale steam for 5-10 minutes for mental clarity",
            ],
            duration: "15 minutes total time",
        }),
    },
];

static CREATIVE_SCENTS: [ScentRecommendation; 3] = [
    ScentRecommendation {
        name: "Jasmine",
        benefits: "Stimulates creativity and inspiration",
        icon: "🌺",
        diy_recipe: Some(DiyRecipe {
            ingredients: &[
                "1/4 cup dried jasmine flowers",
                "1 cup coconut oil",
                "Double boiler",
            ],
            instructions: &[
                "Gently heat coconut oil in double boiler until melted",
                "Add dried jasmine flowers to warm oil",
                "Simmer on low heat for 2 hours, stirring occasionally",
                "Strain oil through cheesecloth into clean container",
                "Use as massage oil or add to diffuser for creative sessions",
            ],
            duration: "2.5 hours total time",
        }),
    },
    ScentRecommendation {
        name: "Orange Blossom",
        benefits: "Inspires joy and creative thinking",
        icon: "🌸",
        diy_recipe: Some(DiyRecipe {
            ingredients: &["Orange blossom water", "Glycerin", "Small spray bottle"],
            instructions: &[
                "Mix 3/4 cup orange blossom water with 1 tablespoon glycerin",
                "Shake well to combine ingredients",
                "Pour mixture into spray bottle",
                "Shake before each use",
                "Mist around creative workspace or on face for inspiration",
            ],
            duration: "5 minutes prep time",
        }),
    },
    ScentRecommendation {
        name: "Frankincense",
        benefits: "Enhances spiritual creativity and focus",
        icon: "✨",
        diy_recipe: Some(DiyRecipe {
            ingredients: &["Frankincense resin", "Charcoal disc", "Heat-safe bowl"],
            instructions: &[
                "Light charcoal disc and place in heat-safe bowl",
                "Wait until charcoal is glowing red",
                "Sprinkle small amount of frankincense resin on charcoal",
                "Allow smoke to fill creative space",
                "Meditate or work creatively while incense burns",
            ],
            duration: "30-60 minutes burn time",
        }),
    },
];

// ── Movements ───────────────────────────────────────────────────────────

static STRESSED_MOVEMENTS: [MovementRecommendation; 3] = [
    movement("Desk Stretches", "5 mins", "Simple stretches to release tension", "🤸"),
    movement("Deep Breathing", "3 mins", "Calming breath work to reduce stress", "🧘"),
    movement("Neck Rolls", "2 mins", "Gentle neck movements to ease tension", "💆"),
];

static CALM_MOVEMENTS: [MovementRecommendation; 3] = [
    movement("Gentle Yoga", "10 mins", "Slow, mindful movements for relaxation", "🧘"),
    movement("Meditation Walk", "15 mins", "Peaceful walking meditation", "🚶"),
    movement("Progressive Relaxation", "8 mins", "Systematic muscle relaxation", "🛌"),
];

static ENERGETIC_MOVEMENTS: [MovementRecommendation; 3] = [
    movement("Quick Walk", "10 mins", "Brisk walk to boost circulation", "🚶"),
    movement("Jumping Jacks", "3 mins", "Quick cardio burst for energy", "🏃"),
    movement("Dance Break", "5 mins", "Free-form dancing to favorite songs", "💃"),
];

static FOCUSED_MOVEMENTS: [MovementRecommendation; 3] = [
    movement("Eye Exercises", "3 mins", "Reduce eye strain and improve focus", "👁️"),
    movement(
        "Posture Reset",
        "2 mins",
        "Align spine and shoulders for better concentration",
        "🧍",
    ),
    movement("Hand Stretches", "4 mins", "Relieve tension from typing and writing", "✋"),
];

static CREATIVE_MOVEMENTS: [MovementRecommendation; 3] = [
    movement("Free Movement", "8 mins", "Expressive movement to unlock creativity", "💃"),
    movement("Finger Exercises", "5 mins", "Warm up hands for creative work", "🤲"),
    movement("Inspiration Walk", "12 mins", "Mindful walk to gather creative ideas", "🚶"),
];
