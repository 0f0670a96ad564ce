//! Target mix session: the user's working mix plus the allocator's suggestion.
//!
//! The target mix is read from storage once on load and written back after
//! every change.

use persona_core::allocation::SuggestedMix;
use persona_core::deviation;
use persona_core::impact::{ProfitImpact, estimate_profit_impact, shifts_for_mix};
use persona_core::model::{PersonaId, PersonaRecord, TargetMix};
use persona_core::MixError;

use crate::platform::{Storage, StorageError};

#[derive(Debug)]
pub enum SessionError {
    Mix(MixError),
    Storage(StorageError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Mix(e) => write!(f, "{}", e),
            SessionError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Mix(e) => Some(e),
            SessionError::Storage(e) => Some(e),
        }
    }
}

impl From<MixError> for SessionError {
    fn from(e: MixError) -> Self {
        SessionError::Mix(e)
    }
}

impl From<StorageError> for SessionError {
    fn from(e: StorageError) -> Self {
        SessionError::Storage(e)
    }
}

/// Where the session's target mix came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixOrigin {
    /// Read back from storage
    Stored,
    /// Nothing was stored; seeded from the suggestion and saved
    Seeded,
    /// Stored value was unreadable; using the suggestion without saving
    Recovered,
}

#[derive(Debug, Clone)]
pub struct MixSession {
    persona_ids: Vec<PersonaId>,
    suggested: SuggestedMix,
    target: TargetMix,
    origin: MixOrigin,
}

impl MixSession {
    /// Load the target mix for a set of personas.
    ///
    /// - stored mix present: use it
    /// - nothing stored: seed with the suggestion and persist it
    /// - stored mix unreadable: warn and use the suggestion without persisting
    pub fn load(
        storage: &dyn Storage,
        personas: &[PersonaRecord],
        suggested: SuggestedMix,
    ) -> Result<Self, StorageError> {
        let persona_ids = personas.iter().map(|p| p.id().clone()).collect();

        let (target, origin) = match storage.load_target_mix() {
            Ok(Some(mix)) => (mix, MixOrigin::Stored),
            Ok(None) => {
                let seed = suggested.shares().clone();
                storage.save_target_mix(&seed)?;
                tracing::info!(personas = seed.len(), "Seeded target mix from suggestion");
                (seed, MixOrigin::Seeded)
            }
            Err(StorageError::Parse(msg)) => {
                tracing::warn!(error = %msg, "Stored target mix is unreadable, using suggestion");
                (suggested.shares().clone(), MixOrigin::Recovered)
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            persona_ids,
            suggested,
            target,
            origin,
        })
    }

    pub fn target(&self) -> &TargetMix {
        &self.target
    }

    pub fn suggested(&self) -> &SuggestedMix {
        &self.suggested
    }

    pub fn origin(&self) -> MixOrigin {
        self.origin
    }

    pub fn persona_ids(&self) -> &[PersonaId] {
        &self.persona_ids
    }

    /// Replace the target mix with the suggestion and persist it
    pub fn apply_suggestions(&mut self, storage: &dyn Storage) -> Result<(), StorageError> {
        self.target = self.suggested.shares().clone();
        storage.save_target_mix(&self.target)
    }

    /// Set one persona's target share (clamped to 0-100) and persist the mix
    pub fn update(
        &mut self,
        storage: &dyn Storage,
        id: &str,
        value: u8,
    ) -> Result<u8, SessionError> {
        let known = self
            .persona_ids
            .iter()
            .find(|p| p.as_str() == id)
            .cloned()
            .ok_or_else(|| MixError::UnknownPersona(PersonaId::new(id)))?;

        self.target.set(known, value);
        storage.save_target_mix(&self.target)?;
        Ok(self.target.share_or_zero(id))
    }

    /// Drop the stored mix and fall back to the suggestion in memory
    pub fn reset(&mut self, storage: &dyn Storage) -> Result<(), StorageError> {
        storage.clear_target_mix()?;
        self.target = self.suggested.shares().clone();
        tracing::info!("Target mix reset to suggestion");
        Ok(())
    }

    /// Sum of all target shares
    pub fn total(&self) -> u32 {
        self.target.total()
    }

    pub fn is_balanced(&self) -> bool {
        self.target.is_balanced()
    }

    /// Target-vs-suggested gap for a persona's badge, when above the threshold
    pub fn card_deviation(&self, id: &str) -> Option<u8> {
        let suggested = self.suggested.get(id)?;
        deviation::card_deviation(self.target.share_or_zero(id), suggested)
    }

    /// Profit impact of moving from current shares to this target mix
    pub fn impact(&self, personas: &[PersonaRecord], monthly_new_customers: u32) -> ProfitImpact {
        let impact = estimate_profit_impact(&shifts_for_mix(personas, &self.target), monthly_new_customers);
        tracing::debug!(
            difference = impact.difference,
            deviations = impact.deviations.len(),
            "Computed profit impact"
        );
        impact
    }
}
