use std::{
    collections::HashMap,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use thiserror::Error;

use crate::domain::{Category, CustomCatalog, MoodPicker};

pub const KEY_CUSTOM_MOODS: &str = "customMoods";
pub const KEY_CATEGORY: &str = "moodCategory";
pub const KEY_LAST_MOOD: &str = "lastMood";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Durable key-value store with last-write-wins semantics. No ordering or
/// multi-key atomicity is promised.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// One file per key under the platform data directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new() -> Self {
        Self::at(get_data_dir())
    }

    pub fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        atomic_write(&self.key_path(key), value)
    }
}

/// In-memory store for tests and headless use.
#[derive(Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn get_data_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "whimsy", "whimsy") {
        let data_dir = proj_dirs.data_dir().to_path_buf();
        fs::create_dir_all(&data_dir).ok();
        data_dir
    } else {
        PathBuf::from(".")
    }
}

/// Loads the custom catalog. Absent or malformed data resets to empty lists
/// rather than surfacing an error.
pub fn load_custom_moods(store: &dyn KvStore) -> CustomCatalog {
    store
        .get(KEY_CUSTOM_MOODS)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

pub fn save_custom_moods(
    store: &mut dyn KvStore,
    customs: &CustomCatalog,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(customs)?;
    store.set(KEY_CUSTOM_MOODS, &json)
}

/// Invalid or missing category names fall back to "All".
pub fn load_category(store: &dyn KvStore) -> Category {
    store
        .get(KEY_CATEGORY)
        .and_then(|name| Category::from_name(name.trim()))
        .unwrap_or(Category::All)
}

pub fn save_category(store: &mut dyn KvStore, category: Category) -> Result<(), StorageError> {
    store.set(KEY_CATEGORY, category.name())
}

pub fn load_last_mood(store: &dyn KvStore) -> Option<String> {
    store.get(KEY_LAST_MOOD).filter(|mood| !mood.is_empty())
}

pub fn save_last_mood(store: &mut dyn KvStore, mood: &str) -> Result<(), StorageError> {
    store.set(KEY_LAST_MOOD, mood)
}

pub fn load_picker(store: &dyn KvStore) -> MoodPicker {
    MoodPicker {
        customs: load_custom_moods(store),
        current_category: load_category(store),
        last_mood: load_last_mood(store),
    }
}

pub fn write_text_file(path: &Path, content: &str) -> Result<(), StorageError> {
    atomic_write(path, content)
}

fn atomic_write(path: &Path, content: &str) -> Result<(), StorageError> {
    let tmp_path = path.with_extension("tmp");
    let mut tmp_file = File::create(&tmp_path)?;
    tmp_file.write_all(content.as_bytes())?;
    tmp_file.sync_all()?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, time::SystemTime};

    use super::*;
    use crate::domain::AddOutcome;

    fn unique_dir(prefix: &str) -> PathBuf {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        PathBuf::from(format!("/tmp/{}_{}", prefix, now))
    }

    #[test]
    fn test_custom_moods_round_trip() {
        let mut store = MemoryStore::new();
        let mut catalog = CustomCatalog::default();
        catalog.calm.push("pond brain".to_string());
        catalog.focus.push("tunnel vision".to_string());

        save_custom_moods(&mut store, &catalog).unwrap();
        let loaded = load_custom_moods(&store);
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_malformed_custom_moods_reset_to_empty() {
        let mut store = MemoryStore::new();
        store.set(KEY_CUSTOM_MOODS, "{not json at all").unwrap();

        let loaded = load_custom_moods(&store);
        assert_eq!(loaded, CustomCatalog::default());
    }

    #[test]
    fn test_absent_custom_moods_default_to_empty() {
        let store = MemoryStore::new();
        let loaded = load_custom_moods(&store);
        assert!(loaded.calm.is_empty());
        assert!(loaded.hype.is_empty());
        assert!(loaded.focus.is_empty());
    }

    #[test]
    fn test_category_round_trip_and_fallback() {
        let mut store = MemoryStore::new();
        save_category(&mut store, Category::Hype).unwrap();
        assert_eq!(load_category(&store), Category::Hype);

        store.set(KEY_CATEGORY, "Brooding").unwrap();
        assert_eq!(load_category(&store), Category::All);

        let empty = MemoryStore::new();
        assert_eq!(load_category(&empty), Category::All);
    }

    #[test]
    fn test_load_picker_composes_session_state() {
        let mut store = MemoryStore::new();
        save_category(&mut store, Category::Focus).unwrap();
        save_last_mood(&mut store, "🎯 Laser pointer brain.").unwrap();

        let mut catalog = CustomCatalog::default();
        catalog.focus.push("deep groove".to_string());
        save_custom_moods(&mut store, &catalog).unwrap();

        let picker = load_picker(&store);
        assert_eq!(picker.current_category, Category::Focus);
        assert_eq!(picker.last_mood.as_deref(), Some("🎯 Laser pointer brain."));
        assert_eq!(picker.customs.focus, vec!["deep groove"]);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = unique_dir("whimsy_store");

        let mut store = FileStore::at(dir.clone());
        let mut picker = MoodPicker::new();
        assert_eq!(
            picker.add_custom(Category::Calm, "quiet harbor"),
            AddOutcome::Added
        );
        save_custom_moods(&mut store, &picker.customs).unwrap();
        save_category(&mut store, Category::Calm).unwrap();
        save_last_mood(&mut store, "quiet harbor").unwrap();

        let reopened = FileStore::at(dir.clone());
        let reloaded = load_picker(&reopened);
        assert_eq!(reloaded.current_category, Category::Calm);
        assert_eq!(reloaded.last_mood.as_deref(), Some("quiet harbor"));
        assert_eq!(reloaded.customs.calm, vec!["quiet harbor"]);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_file_store_missing_key_is_absent() {
        let dir = unique_dir("whimsy_store_empty");
        let store = FileStore::at(dir.clone());
        assert_eq!(store.get(KEY_LAST_MOOD), None);
        fs::remove_dir_all(dir).ok();
    }
}
