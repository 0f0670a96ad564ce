//! Bundled fixture data and persisted user preferences

pub mod fixtures;
pub mod preferences;

pub use fixtures::{FixtureError, load_creative_briefs, load_persona_details, load_personas};
pub use preferences::{Guardrails, Preferences};
