//! Onboarding state, data-source toggles and brand guardrails.
//!
//! None of this feeds the mix calculations; it is stored alongside the
//! target mix so the dashboard can pick up where the user left off.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Data sources offered on the connections screen
pub const DATA_SOURCES: [&str; 5] = ["Shopify", "GA4", "Meta", "Google Ads", "Klaviyo"];

/// Free-text brand voice rules used when drafting creative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Guardrails {
    pub style_guide: String,
    pub do_say: String,
    pub dont_say: String,
}

impl Default for Guardrails {
    fn default() -> Self {
        Self {
            style_guide: "Quiet luxury, minimal, neutral palette".to_string(),
            do_say: "Emphasize material quality, longevity, tactile feel".to_string(),
            dont_say: "No discount framing, avoid hype/flashy claims".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub onboarding_completed: bool,
    /// Source name -> connected
    pub connections: BTreeMap<String, bool>,
    pub guardrails: Guardrails,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            onboarding_completed: false,
            connections: DATA_SOURCES
                .iter()
                .map(|name| (name.to_string(), false))
                .collect(),
            guardrails: Guardrails::default(),
        }
    }
}

impl Preferences {
    /// Flip a data source's connected flag, matching the name case-insensitively.
    ///
    /// Returns the new state, or `None` for an unknown source.
    pub fn toggle_connection(&mut self, source: &str) -> Option<bool> {
        let key = self
            .connections
            .keys()
            .find(|k| k.eq_ignore_ascii_case(source))
            .cloned()
            .or_else(|| {
                DATA_SOURCES
                    .iter()
                    .find(|s| s.eq_ignore_ascii_case(source))
                    .map(|s| s.to_string())
            })?;

        let connected = self.connections.entry(key).or_insert(false);
        *connected = !*connected;
        Some(*connected)
    }

    pub fn connected_count(&self) -> usize {
        self.connections.values().filter(|c| **c).count()
    }

    pub fn total_sources(&self) -> usize {
        self.connections.len()
    }
}
