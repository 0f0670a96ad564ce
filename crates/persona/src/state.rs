//! Mix editor state shared by the native and web front ends

use persona_core::allocation::suggest_mix;
use persona_core::impact::ProfitImpact;
use persona_core::model::{PersonaId, PersonaRecord};

use crate::config::AppConfig;
use crate::data::{FixtureError, load_personas};
use crate::mix_state::MixSession;
use crate::platform::{Storage, StorageError};

/// Upper end of the editor's per-persona slider
pub const SLIDER_MAX: u8 = 60;

/// Failure while assembling the editor state
#[derive(Debug)]
pub enum StartupError {
    Fixture(FixtureError),
    Storage(StorageError),
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartupError::Fixture(e) => write!(f, "{}", e),
            StartupError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StartupError {}

impl From<FixtureError> for StartupError {
    fn from(e: FixtureError) -> Self {
        StartupError::Fixture(e)
    }
}

impl From<StorageError> for StartupError {
    fn from(e: StorageError) -> Self {
        StartupError::Storage(e)
    }
}

pub struct EditorState {
    pub personas: Vec<PersonaRecord>,
    pub session: MixSession,
    pub storage: Box<dyn Storage>,
    pub monthly_new_customers: u32,
    /// Index into `personas`
    pub selected: usize,
    /// Transient confirmation shown in the status bar
    pub status_message: Option<String>,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl EditorState {
    pub fn new(
        personas: Vec<PersonaRecord>,
        session: MixSession,
        storage: Box<dyn Storage>,
        monthly_new_customers: u32,
    ) -> Self {
        Self {
            personas,
            session,
            storage,
            monthly_new_customers,
            selected: 0,
            status_message: None,
            error_message: None,
            exit: false,
        }
    }

    /// Load the bundled personas, compute the suggestion and open the stored mix
    pub fn load(storage: Box<dyn Storage>, config: &AppConfig) -> Result<Self, StartupError> {
        let personas = load_personas()?;
        let suggested = suggest_mix(&personas, &config.allocation());
        if suggested.is_empty() {
            tracing::debug!("All persona scores are zero, no suggested mix");
        }
        let session = MixSession::load(storage.as_ref(), &personas, suggested)?;
        Ok(Self::new(
            personas,
            session,
            storage,
            config.monthly_new_customers,
        ))
    }

    pub fn selected_id(&self) -> Option<&PersonaId> {
        self.personas.get(self.selected).map(|p| p.id())
    }

    pub fn select_next(&mut self) {
        if !self.personas.is_empty() {
            self.selected = (self.selected + 1) % self.personas.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.personas.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.personas.len() - 1);
        }
    }

    /// Move the selected persona's target share by `delta`, within the slider range.
    ///
    /// A share already above the slider range (set from the CLI) can only move down.
    pub fn adjust_selected(&mut self, delta: i16) {
        let Some(id) = self.selected_id().cloned() else {
            return;
        };
        let current = i16::from(self.session.target().share_or_zero(id.as_str()));
        let upper = current.max(i16::from(SLIDER_MAX));
        let value = (current + delta).clamp(0, upper);
        if value == current {
            return;
        }

        // Clamped to 0..=100 above
        let value = value as u8;
        match self.session.update(self.storage.as_ref(), id.as_str(), value) {
            Ok(_) => self.clear_error(),
            Err(e) => self.set_error(format!("Failed to save target mix: {}", e)),
        }
    }

    pub fn apply_suggestions(&mut self) {
        match self.session.apply_suggestions(self.storage.as_ref()) {
            Ok(()) => self.set_status("Applied suggested mix"),
            Err(e) => self.set_error(format!("Failed to save target mix: {}", e)),
        }
    }

    pub fn reset(&mut self) {
        match self.session.reset(self.storage.as_ref()) {
            Ok(()) => self.set_status("Target mix reset to suggestion"),
            Err(e) => self.set_error(format!("Failed to reset target mix: {}", e)),
        }
    }

    pub fn impact(&self) -> ProfitImpact {
        self.session
            .impact(&self.personas, self.monthly_new_customers)
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.error_message = None;
        self.status_message = Some(msg.into());
    }

    pub fn set_error(&mut self, msg: String) {
        tracing::warn!(error = %msg, "Editor error");
        self.error_message = Some(msg);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
