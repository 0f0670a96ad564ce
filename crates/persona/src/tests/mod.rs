#[cfg(feature = "native")]
mod cli;
mod session;

use persona_core::allocation::{AllocationConfig, SuggestedMix, suggest_mix};
use persona_core::model::PersonaRecord;

use crate::data::load_personas;

/// Bundled personas with their default suggestion
///
/// Suggested shares: high-value 42, mid-value 18, low-value 5, premium 30, budget 5
pub(crate) fn bundled() -> (Vec<PersonaRecord>, SuggestedMix) {
    let personas = load_personas().unwrap();
    let suggested = suggest_mix(&personas, &AllocationConfig::default());
    (personas, suggested)
}
