//! Local persistence for the single language preference.
//!
//! Every backend is best effort: read failures look like a missing value and
//! write failures are logged and dropped.

use std::cell::RefCell;
use std::collections::HashMap;

use dioxus::logger::tracing::debug;

/// Per-origin string key/value store.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// In-memory store. Used by tests and as a last resort when no platform store
/// can be opened.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.save(key, value);
        store
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Browser `localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            debug!(target: "storage", "localStorage unavailable; preference not saved");
            return;
        };
        if storage.set_item(key, value).is_err() {
            debug!(target: "storage", key, "localStorage rejected write");
        }
    }
}

/// JSON file in the per-user config directory.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FilePreferences {
    const FILE_NAME: &'static str = "preferences.json";

    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform config dir, if one can be determined.
    pub fn in_config_dir() -> Option<Self> {
        let dirs = directories::ProjectDirs::from("com", "DotaCoach", "DotaCoach")?;
        Some(Self::new(dirs.config_dir().join(Self::FILE_NAME)))
    }

    fn read_all(&self) -> HashMap<String, String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for FilePreferences {
    fn load(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn save(&self, key: &str, value: &str) {
        let mut values = self.read_all();
        values.insert(key.to_string(), value.to_string());

        let result = serde_json::to_string_pretty(&values)
            .map_err(|err| err.to_string())
            .and_then(|json| {
                if let Some(dir) = self.path.parent() {
                    std::fs::create_dir_all(dir).map_err(|err| err.to_string())?;
                }
                std::fs::write(&self.path, json).map_err(|err| err.to_string())
            });

        if let Err(err) = result {
            debug!(target: "storage", path = %self.path.display(), "preference not saved: {err}");
        }
    }
}
