//! Persisted UI preferences
//!
//! A single JSON file under the app data dir holding the dark-mode flag,
//! read once at startup and written on every toggle.

use serde::{Deserialize, Serialize};
use shared::{AppError, AppResult};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PrefsFile {
    #[serde(rename = "darkMode", default)]
    dark_mode: bool,
}

/// Preference store backed by `{data_dir}/prefs.json`
#[derive(Debug)]
pub struct PrefsStore {
    file_path: PathBuf,
    data: PrefsFile,
}

impl PrefsStore {
    /// Load preferences, falling back to defaults when the file is absent
    pub fn load(data_dir: &Path) -> AppResult<Self> {
        let file_path = data_dir.join("prefs.json");

        let data = if file_path.exists() {
            let content = std::fs::read_to_string(&file_path)
                .map_err(|e| AppError::storage(e.to_string()))?;
            serde_json::from_str(&content).map_err(|e| AppError::storage(e.to_string()))?
        } else {
            PrefsFile::default()
        };

        Ok(Self { file_path, data })
    }

    fn save(&self) -> AppResult<()> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::storage(e.to_string()))?;
        }
        let content =
            serde_json::to_string_pretty(&self.data).map_err(|e| AppError::storage(e.to_string()))?;
        std::fs::write(&self.file_path, content).map_err(|e| AppError::storage(e.to_string()))?;
        Ok(())
    }

    pub fn dark_mode(&self) -> bool {
        self.data.dark_mode
    }

    /// Flip dark mode and persist immediately
    pub fn toggle_dark_mode(&mut self) -> AppResult<bool> {
        self.data.dark_mode = !self.data.dark_mode;
        self.save()?;
        Ok(self.data.dark_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = PrefsStore::load(dir.path()).unwrap();
        assert!(!prefs.dark_mode());
    }

    #[test]
    fn test_toggle_persists() {
        let dir = tempfile::tempdir().unwrap();

        let mut prefs = PrefsStore::load(dir.path()).unwrap();
        assert!(prefs.toggle_dark_mode().unwrap());

        let reloaded = PrefsStore::load(dir.path()).unwrap();
        assert!(reloaded.dark_mode());

        let mut prefs = reloaded;
        assert!(!prefs.toggle_dark_mode().unwrap());
        let reloaded = PrefsStore::load(dir.path()).unwrap();
        assert!(!reloaded.dark_mode());
    }

    #[test]
    fn test_wire_key_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = PrefsStore::load(dir.path()).unwrap();
        prefs.toggle_dark_mode().unwrap();

        let content = std::fs::read_to_string(dir.path().join("prefs.json")).unwrap();
        assert!(content.contains("\"darkMode\": true"));
    }
}
