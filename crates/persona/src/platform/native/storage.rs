//! Native storage implementation using the filesystem.
//!
//! Directory structure:
//! ~/.persona/
//!   config.yaml          # AppConfig (hand-edited, read by crate::config)
//!   target_mix.json      # persona id -> target percentage
//!   preferences.yaml     # onboarding, connections, guardrails
//!   persona.log

use std::fs;
use std::path::{Path, PathBuf};

use persona_core::model::TargetMix;

use crate::data::Preferences;
use crate::platform::storage::{Storage, StorageError, parse_target_mix, target_mix_to_json};
use crate::util::io::atomic_write;

const TARGET_MIX_FILE: &str = "target_mix.json";
const PREFERENCES_FILE: &str = "preferences.yaml";

/// Filesystem storage rooted at a data directory
pub struct NativeStorage {
    root: PathBuf,
}

impl NativeStorage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.persona/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".persona")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn target_mix_path(&self) -> PathBuf {
        self.root.join(TARGET_MIX_FILE)
    }

    fn preferences_path(&self) -> PathBuf {
        self.root.join(PREFERENCES_FILE)
    }

    fn ensure_root(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))
    }
}

impl Storage for NativeStorage {
    fn load_target_mix(&self) -> Result<Option<TargetMix>, StorageError> {
        let path = self.target_mix_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read target mix: {}", e)))?;
        parse_target_mix(&content)
    }

    fn save_target_mix(&self, mix: &TargetMix) -> Result<(), StorageError> {
        self.ensure_root()?;
        let json = target_mix_to_json(mix)?;
        atomic_write(&self.target_mix_path(), &json)
            .map_err(|e| StorageError::Io(format!("Failed to write target mix: {}", e)))?;
        tracing::info!(path = %self.target_mix_path().display(), "Target mix saved");
        Ok(())
    }

    fn clear_target_mix(&self) -> Result<(), StorageError> {
        let path = self.target_mix_path();
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| StorageError::Io(format!("Failed to remove target mix: {}", e)))?;
        }
        Ok(())
    }

    fn load_preferences(&self) -> Result<Preferences, StorageError> {
        let path = self.preferences_path();
        if !path.exists() {
            return Ok(Preferences::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read preferences: {}", e)))?;
        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse preferences: {}", e)))
    }

    fn save_preferences(&self, preferences: &Preferences) -> Result<(), StorageError> {
        self.ensure_root()?;
        let yaml = serde_saphyr::to_string(preferences).map_err(|e| {
            StorageError::Serialize(format!("Failed to serialize preferences: {}", e))
        })?;
        atomic_write(&self.preferences_path(), &yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write preferences: {}", e)))
    }
}
