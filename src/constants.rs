use ratatui::style::Color;

pub const MAX_MOOD_LEN: usize = 120;

pub const NO_MOODS_SENTINEL: &str = "😶 (no moods in this category yet)";

pub const BUILTIN_CALM: [&str; 5] = [
    "🧊 Calm like ice water.",
    "🪴 Soft plant mode.",
    "🌊 Low tide, steady steps.",
    "🛁 Bath-bomb brain, fizzing gently.",
    "🌙 Quiet moon, no rush.",
];

pub const BUILTIN_HYPE: [&str; 5] = [
    "🔥 Main character energy.",
    "⚡ Gremlin focus activated.",
    "🚀 Speedrun life today.",
    "🦁 Loud, golden, unstoppable.",
    "🥇 I am the feature, not a bug.",
];

pub const BUILTIN_FOCUS: [&str; 5] = [
    "🧠 Nerd mode: compiling feelings...",
    "🎯 Laser pointer brain.",
    "📚 Monk at the library arc.",
    "🧩 One line at a time.",
    "🔬 Microscope mindset.",
];

// Indexed by position in CATEGORY_ORDER: All, Calm, Hype, Focus.
pub const CATEGORY_COLORS: [Color; 4] = [
    Color::White,
    Color::Rgb(0, 153, 255),
    Color::Rgb(255, 102, 0),
    Color::Rgb(153, 0, 255),
];

pub const UI_SETTINGS: UiSettings = UiSettings {
    poll_ms: 50,
    feedback_ms: 1500,
};

pub struct UiSettings {
    pub poll_ms: u64,
    pub feedback_ms: u64,
}
