//! Storage abstraction for platform-independent persistence.
//!
//! The allocation and impact code never touches storage directly; the mix
//! session reads and writes through this trait.

use persona_core::model::TargetMix;

use crate::data::Preferences;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    /// I/O error (file not found, permission denied, etc.)
    Io(String),
    /// Parse error (invalid JSON/YAML, corrupted data)
    Parse(String),
    /// Serialization error
    Serialize(String),
    /// Storage not available (e.g., LocalStorage disabled)
    NotAvailable(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            StorageError::NotAvailable(msg) => write!(f, "Storage not available: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Platform-independent storage interface.
///
/// There is no locking: the last write wins.
pub trait Storage {
    /// Load the saved target mix, `None` if nothing has been saved
    fn load_target_mix(&self) -> Result<Option<TargetMix>, StorageError>;

    /// Replace the saved target mix
    fn save_target_mix(&self, mix: &TargetMix) -> Result<(), StorageError>;

    /// Forget the saved target mix
    fn clear_target_mix(&self) -> Result<(), StorageError>;

    /// Load preferences, falling back to defaults when none are saved
    fn load_preferences(&self) -> Result<Preferences, StorageError>;

    fn save_preferences(&self, preferences: &Preferences) -> Result<(), StorageError>;
}

/// Parse a target mix from its JSON object form; blank content counts as no mix
pub(crate) fn parse_target_mix(json: &str) -> Result<Option<TargetMix>, StorageError> {
    if json.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(json)
        .map(Some)
        .map_err(|e| StorageError::Parse(format!("Failed to parse target mix: {}", e)))
}

pub(crate) fn target_mix_to_json(mix: &TargetMix) -> Result<String, StorageError> {
    serde_json::to_string(mix)
        .map_err(|e| StorageError::Serialize(format!("Failed to serialize target mix: {}", e)))
}
