//! Web storage implementation using browser LocalStorage.
//!
//! Keys match the ones the dashboard has always used, so existing browser
//! state is picked up unchanged.

use gloo_storage::errors::StorageError as GlooError;
use gloo_storage::{LocalStorage, Storage as GlooStorage};
use persona_core::model::TargetMix;

use crate::data::{Guardrails, Preferences};
use crate::platform::storage::{Storage, StorageError};

/// JSON object of persona id -> target percentage
const TARGET_MIX_KEY: &str = "targetMix";
/// JSON object of data source -> connected
const CONNECTIONS_KEY: &str = "connections";
/// `true` once onboarding has been finished
const ONBOARDING_KEY: &str = "onboardingCompleted";
/// JSON object with styleGuide / doSay / dontSay
const GUARDRAILS_KEY: &str = "guardrails";

/// Web storage implementation using browser LocalStorage.
#[derive(Debug, Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }

    /// Read a key, treating a missing or unreadable value as absent
    fn get_or_warn<T: serde::de::DeserializeOwned>(key: &str) -> Option<T> {
        match LocalStorage::get::<T>(key) {
            Ok(value) => Some(value),
            Err(GlooError::KeyNotFound(_)) => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "Ignoring unreadable LocalStorage value");
                None
            }
        }
    }
}

impl Storage for WebStorage {
    fn load_target_mix(&self) -> Result<Option<TargetMix>, StorageError> {
        match LocalStorage::get::<TargetMix>(TARGET_MIX_KEY) {
            Ok(mix) => Ok(Some(mix)),
            Err(GlooError::KeyNotFound(_)) => Ok(None),
            Err(GlooError::SerdeError(e)) => Err(StorageError::Parse(format!(
                "Failed to parse target mix: {}",
                e
            ))),
            Err(e) => Err(StorageError::NotAvailable(e.to_string())),
        }
    }

    fn save_target_mix(&self, mix: &TargetMix) -> Result<(), StorageError> {
        LocalStorage::set(TARGET_MIX_KEY, mix)
            .map_err(|e| StorageError::Io(format!("Failed to save target mix: {}", e)))?;
        tracing::info!("Target mix saved");
        Ok(())
    }

    fn clear_target_mix(&self) -> Result<(), StorageError> {
        LocalStorage::delete(TARGET_MIX_KEY);
        Ok(())
    }

    fn load_preferences(&self) -> Result<Preferences, StorageError> {
        let mut prefs = Preferences::default();
        if let Some(done) = Self::get_or_warn::<bool>(ONBOARDING_KEY) {
            prefs.onboarding_completed = done;
        }
        if let Some(connections) = Self::get_or_warn(CONNECTIONS_KEY) {
            prefs.connections = connections;
        }
        if let Some(guardrails) = Self::get_or_warn::<Guardrails>(GUARDRAILS_KEY) {
            prefs.guardrails = guardrails;
        }
        Ok(prefs)
    }

    fn save_preferences(&self, preferences: &Preferences) -> Result<(), StorageError> {
        let io = |e: GlooError| StorageError::Io(format!("Failed to save preferences: {}", e));
        LocalStorage::set(ONBOARDING_KEY, preferences.onboarding_completed).map_err(io)?;
        LocalStorage::set(CONNECTIONS_KEY, &preferences.connections).map_err(io)?;
        LocalStorage::set(GUARDRAILS_KEY, &preferences.guardrails).map_err(io)?;
        Ok(())
    }
}
