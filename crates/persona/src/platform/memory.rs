//! In-process storage used by tests and `--ephemeral` runs.

use std::cell::RefCell;

use persona_core::model::TargetMix;

use super::storage::{Storage, StorageError, parse_target_mix, target_mix_to_json};
use crate::data::Preferences;

/// Storage that keeps the serialized target mix in memory.
///
/// The mix is held as JSON text so that corrupted state can be simulated
/// with [`MemoryStorage::with_raw_target_mix`].
#[derive(Debug, Default)]
pub struct MemoryStorage {
    target_mix: RefCell<Option<String>>,
    preferences: RefCell<Option<Preferences>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with arbitrary text in the target mix slot
    pub fn with_raw_target_mix(raw: impl Into<String>) -> Self {
        Self {
            target_mix: RefCell::new(Some(raw.into())),
            preferences: RefCell::new(None),
        }
    }

    /// Raw JSON currently stored for the target mix
    pub fn raw_target_mix(&self) -> Option<String> {
        self.target_mix.borrow().clone()
    }
}

impl Storage for MemoryStorage {
    fn load_target_mix(&self) -> Result<Option<TargetMix>, StorageError> {
        self.target_mix
            .borrow()
            .as_deref()
            .map_or(Ok(None), parse_target_mix)
    }

    fn save_target_mix(&self, mix: &TargetMix) -> Result<(), StorageError> {
        let json = target_mix_to_json(mix)?;
        *self.target_mix.borrow_mut() = Some(json);
        Ok(())
    }

    fn clear_target_mix(&self) -> Result<(), StorageError> {
        self.target_mix.borrow_mut().take();
        Ok(())
    }

    fn load_preferences(&self) -> Result<Preferences, StorageError> {
        Ok(self.preferences.borrow().clone().unwrap_or_default())
    }

    fn save_preferences(&self, preferences: &Preferences) -> Result<(), StorageError> {
        *self.preferences.borrow_mut() = Some(preferences.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_and_clear() {
        let storage = MemoryStorage::new();
        assert!(storage.load_target_mix().unwrap().is_none());

        let mut mix = TargetMix::new();
        mix.set("high-value", 40);
        storage.save_target_mix(&mix).unwrap();
        assert_eq!(storage.raw_target_mix().as_deref(), Some(r#"{"high-value":40}"#));
        assert_eq!(storage.load_target_mix().unwrap(), Some(mix));

        storage.clear_target_mix().unwrap();
        assert!(storage.load_target_mix().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_mix_is_parse_error() {
        let storage = MemoryStorage::with_raw_target_mix("{not json");
        assert!(matches!(
            storage.load_target_mix(),
            Err(StorageError::Parse(_))
        ));
    }
}
