//! Persona mix planning library
//!
//! This crate holds the quantitative side of the persona intelligence dashboard.
//! It supports:
//! - Validated persona records (LTV, CAC, payback, profit index)
//! - Suggested acquisition mix from a profit-per-payback-day heuristic
//! - Profit impact of moving from the current mix to a target mix
//! - Deviation thresholds for mix warnings and per-persona badges
//! - Creative brief exports (Meta Ads CSV, Google Ads CSV, brief document)
//!
//! # Example
//!
//! ```ignore
//! use persona_core::allocation::{AllocationConfig, suggest_mix};
//! use persona_core::impact::{estimate_profit_impact, shifts_for_mix};
//!
//! let suggested = suggest_mix(&personas, &AllocationConfig::default());
//! let shifts = shifts_for_mix(&personas, suggested.shares());
//! let impact = estimate_profit_impact(&shifts, 1_000);
//! println!("Monthly delta: {:.0}", impact.difference);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod allocation;
pub mod deviation;
pub mod error;
pub mod export;
pub mod impact;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use allocation::{AllocationConfig, RoundingMode, SuggestedMix, persona_score, suggest_mix};
pub use error::{MixError, PersonaError};
pub use export::{ExportContext, ExportFormat};
pub use impact::{
    DeviationDirection, MixDeviation, MixShift, PersonaImpact, ProfitImpact,
    estimate_profit_impact, shifts_for_mix,
};
pub use model::{CreativeBrief, PersonaDetails, PersonaId, PersonaRecord, TargetMix};
