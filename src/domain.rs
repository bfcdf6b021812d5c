use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::constants::{BUILTIN_CALM, BUILTIN_FOCUS, BUILTIN_HYPE, MAX_MOOD_LEN, NO_MOODS_SENTINEL};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Category {
    All,
    Calm,
    Hype,
    Focus,
}

pub const CATEGORY_ORDER: [Category; 4] = [
    Category::All,
    Category::Calm,
    Category::Hype,
    Category::Focus,
];

pub const CONCRETE_CATEGORIES: [Category; 3] = [Category::Calm, Category::Hype, Category::Focus];

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Calm => "Calm",
            Category::Hype => "Hype",
            Category::Focus => "Focus",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        CATEGORY_ORDER
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(name))
    }

    pub fn by_position(position: usize) -> Option<Self> {
        CATEGORY_ORDER.get(position).copied()
    }

    fn position(self) -> usize {
        CATEGORY_ORDER
            .iter()
            .position(|&category| category == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        CATEGORY_ORDER[(self.position() + 1) % CATEGORY_ORDER.len()]
    }

    pub fn prev(self) -> Self {
        CATEGORY_ORDER[(self.position() + CATEGORY_ORDER.len() - 1) % CATEGORY_ORDER.len()]
    }

    pub fn is_concrete(self) -> bool {
        self != Category::All
    }
}

pub fn builtin_moods(category: Category) -> &'static [&'static str] {
    match category {
        Category::All => &[],
        Category::Calm => &BUILTIN_CALM,
        Category::Hype => &BUILTIN_HYPE,
        Category::Focus => &BUILTIN_FOCUS,
    }
}

/// Trims, collapses internal whitespace runs to single spaces, and truncates
/// to the maximum mood length.
pub fn normalize_mood(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().take(MAX_MOOD_LEN).collect()
}

/// User-added moods, one ordered list per concrete category. Serialized as
/// the `customMoods` JSON blob; missing keys deserialize to empty lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCatalog {
    #[serde(rename = "Calm", default)]
    pub calm: Vec<String>,
    #[serde(rename = "Hype", default)]
    pub hype: Vec<String>,
    #[serde(rename = "Focus", default)]
    pub focus: Vec<String>,
}

impl CustomCatalog {
    /// None for the virtual "All" aggregate, which owns no custom list.
    pub fn list(&self, category: Category) -> Option<&Vec<String>> {
        match category {
            Category::All => None,
            Category::Calm => Some(&self.calm),
            Category::Hype => Some(&self.hype),
            Category::Focus => Some(&self.focus),
        }
    }

    fn list_mut(&mut self, category: Category) -> Option<&mut Vec<String>> {
        match category {
            Category::All => None,
            Category::Calm => Some(&mut self.calm),
            Category::Hype => Some(&mut self.hype),
            Category::Focus => Some(&mut self.focus),
        }
    }

    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.calm.iter().chain(self.hype.iter()).chain(self.focus.iter())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AddOutcome {
    Added,
    Duplicate,
    Empty,
    ReadOnly,
}

/// Picks one mood uniformly from the pool, or the sentinel when the pool is
/// empty. Repeats are allowed.
pub fn pick_from<R: Rng + ?Sized>(rng: &mut R, pool: &[String]) -> String {
    pool.choose(rng)
        .cloned()
        .unwrap_or_else(|| NO_MOODS_SENTINEL.to_string())
}

pub struct MoodPicker {
    pub customs: CustomCatalog,
    pub current_category: Category,
    pub last_mood: Option<String>,
}

impl MoodPicker {
    pub fn new() -> Self {
        Self {
            customs: CustomCatalog::default(),
            current_category: Category::All,
            last_mood: None,
        }
    }

    /// Candidate moods for a category: built-ins first, then customs. "All"
    /// aggregates every concrete category.
    pub fn pool(&self, category: Category) -> Vec<String> {
        match category {
            Category::All => CONCRETE_CATEGORIES
                .into_iter()
                .flat_map(|c| builtin_moods(c).iter().map(|m| m.to_string()))
                .chain(self.customs.all().cloned())
                .collect(),
            concrete => builtin_moods(concrete)
                .iter()
                .map(|m| m.to_string())
                .chain(self.customs.list(concrete).into_iter().flatten().cloned())
                .collect(),
        }
    }

    pub fn pick_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        let pool = self.pool(self.current_category);
        let mood = pick_from(rng, &pool);
        self.last_mood = Some(mood.clone());
        mood
    }

    pub fn pick(&mut self) -> String {
        self.pick_with(&mut rand::thread_rng())
    }

    pub fn add_custom(&mut self, category: Category, raw: &str) -> AddOutcome {
        let text = normalize_mood(raw);
        let Some(list) = self.customs.list_mut(category) else {
            return AddOutcome::ReadOnly;
        };
        if text.is_empty() {
            return AddOutcome::Empty;
        }
        if list
            .iter()
            .any(|existing| existing.to_lowercase() == text.to_lowercase())
        {
            return AddOutcome::Duplicate;
        }
        list.push(text);
        AddOutcome::Added
    }

    /// Removes the custom mood at `index`. Out-of-range positions and the
    /// "All" aggregate are no-ops.
    pub fn remove_custom(&mut self, category: Category, index: usize) -> bool {
        let Some(list) = self.customs.list_mut(category) else {
            return false;
        };
        if index >= list.len() {
            return false;
        }
        list.remove(index);
        true
    }
}

impl Default for MoodPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_category_round_trip_names() {
        for category in CATEGORY_ORDER {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
        assert_eq!(Category::from_name("hype"), Some(Category::Hype));
        assert_eq!(Category::from_name("nonsense"), None);
    }

    #[test]
    fn test_category_cycling_wraps() {
        assert_eq!(Category::Focus.next(), Category::All);
        assert_eq!(Category::All.prev(), Category::Focus);

        let mut category = Category::All;
        for _ in 0..CATEGORY_ORDER.len() {
            category = category.next();
        }
        assert_eq!(category, Category::All);
    }

    #[test]
    fn test_category_by_position() {
        assert_eq!(Category::by_position(0), Some(Category::All));
        assert_eq!(Category::by_position(3), Some(Category::Focus));
        assert_eq!(Category::by_position(4), None);
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_mood("  Hi   there "), "Hi there");
        assert_eq!(normalize_mood("\t\n  "), "");
    }

    #[test]
    fn test_normalize_truncates_long_input() {
        let long = "x".repeat(MAX_MOOD_LEN + 30);
        assert_eq!(normalize_mood(&long).chars().count(), MAX_MOOD_LEN);
    }

    #[test]
    fn test_all_pool_aggregates_every_category() {
        let mut picker = MoodPicker::new();
        picker.add_custom(Category::Calm, "soft fern");
        picker.add_custom(Category::Hype, "parade mode");

        let all = picker.pool(Category::All);
        let builtin_total: usize = CONCRETE_CATEGORIES
            .into_iter()
            .map(|c| builtin_moods(c).len())
            .sum();
        assert_eq!(all.len(), builtin_total + 2);

        for category in CONCRETE_CATEGORIES {
            for mood in picker.pool(category) {
                assert!(all.contains(&mood), "missing from All pool: {mood}");
            }
        }
    }

    #[test]
    fn test_add_appends_normalized_text_once() {
        let mut picker = MoodPicker::new();
        let before = picker.pool(Category::Calm).len();

        assert_eq!(
            picker.add_custom(Category::Calm, "  extremely   mellow "),
            AddOutcome::Added
        );

        let pool = picker.pool(Category::Calm);
        assert_eq!(pool.len(), before + 1);
        assert_eq!(
            pool.iter().filter(|m| m.as_str() == "extremely mellow").count(),
            1
        );
    }

    #[test]
    fn test_add_rejects_case_insensitive_duplicates() {
        let mut picker = MoodPicker::new();
        assert_eq!(
            picker.add_custom(Category::Hype, "zoomies"),
            AddOutcome::Added
        );
        assert_eq!(
            picker.add_custom(Category::Hype, "ZOOMIES"),
            AddOutcome::Duplicate
        );
        assert_eq!(picker.customs.hype.len(), 1);
    }

    #[test]
    fn test_add_rejects_empty_and_all() {
        let mut picker = MoodPicker::new();
        assert_eq!(picker.add_custom(Category::Focus, "   "), AddOutcome::Empty);
        assert_eq!(
            picker.add_custom(Category::All, "anything"),
            AddOutcome::ReadOnly
        );
        assert!(picker.customs.all().next().is_none());
    }

    #[test]
    fn test_remove_in_and_out_of_range() {
        let mut picker = MoodPicker::new();
        picker.add_custom(Category::Focus, "one");
        picker.add_custom(Category::Focus, "two");
        picker.add_custom(Category::Focus, "three");

        assert!(picker.remove_custom(Category::Focus, 1));
        assert_eq!(picker.customs.focus, vec!["one", "three"]);

        assert!(!picker.remove_custom(Category::Focus, 2));
        assert!(!picker.remove_custom(Category::All, 0));
        assert_eq!(picker.customs.focus.len(), 2);
    }

    #[test]
    fn test_pick_from_singleton_and_empty_pool() {
        let mut rng = StdRng::seed_from_u64(7);

        let single = vec!["only one".to_string()];
        for _ in 0..10 {
            assert_eq!(pick_from(&mut rng, &single), "only one");
        }

        assert_eq!(pick_from(&mut rng, &[]), NO_MOODS_SENTINEL);
    }

    #[test]
    fn test_pick_records_last_mood() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut picker = MoodPicker::new();
        picker.current_category = Category::Calm;

        let mood = picker.pick_with(&mut rng);
        assert_eq!(picker.last_mood.as_deref(), Some(mood.as_str()));
        assert!(picker.pool(Category::Calm).contains(&mood));
    }

    #[test]
    fn test_custom_catalog_partial_json() {
        let catalog: CustomCatalog = serde_json::from_str(r#"{"Calm":["drifting"]}"#)
            .expect("partial blob should parse");
        assert_eq!(catalog.calm, vec!["drifting"]);
        assert!(catalog.hype.is_empty());
        assert!(catalog.focus.is_empty());
    }
}
