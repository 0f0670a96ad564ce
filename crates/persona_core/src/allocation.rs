//! Suggested persona mix
//!
//! Converts a list of persona records into a suggested acquisition mix that
//! favors personas with more profit per day of payback:
//!
//! 1. score each persona: `profit_index * ltv / max(1, payback_days)`
//! 2. take each score's share of the total score, as a percentage
//! 3. clamp every share into the `[floor, ceiling]` band (default 5-60)
//! 4. rescale the clamped shares to sum to 100 and round to whole percents
//!
//! A zero total score yields an empty suggestion rather than an error.

use serde::{Deserialize, Serialize};

use crate::model::{PersonaId, PersonaRecord, TargetMix};

/// How the renormalized percentages are turned into whole numbers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round each persona on its own; the sum may drift a few points from 100
    #[default]
    Independent,
    /// Hamilton method: floor everything, hand leftover points to the largest
    /// remainders. Always sums to exactly 100.
    LargestRemainder,
}

/// Allocation band and rounding policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationConfig {
    #[serde(default = "default_floor")]
    pub floor: f64,
    #[serde(default = "default_ceiling")]
    pub ceiling: f64,
    #[serde(default)]
    pub rounding: RoundingMode,
}

fn default_floor() -> f64 {
    5.0
}

fn default_ceiling() -> f64 {
    60.0
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            floor: default_floor(),
            ceiling: default_ceiling(),
            rounding: RoundingMode::Independent,
        }
    }
}

impl AllocationConfig {
    #[must_use]
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }
}

/// Intermediate values for one persona's suggestion
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestedShare {
    pub id: PersonaId,
    /// `profit_index * ltv / max(1, payback_days)`
    pub score: f64,
    /// Score as a percentage of the total score
    pub raw_pct: f64,
    /// `raw_pct` clamped into the allocation band
    pub clamped_pct: f64,
    /// Clamped value rescaled so all personas sum to 100 (before rounding)
    pub normalized_pct: f64,
    /// Final whole percentage
    pub share: u8,
}

/// Result of [`suggest_mix`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestedMix {
    entries: Vec<SuggestedShare>,
    shares: TargetMix,
}

impl SuggestedMix {
    /// Whole-percent suggestion per persona
    pub fn shares(&self) -> &TargetMix {
        &self.shares
    }

    pub fn into_shares(self) -> TargetMix {
        self.shares
    }

    pub fn get(&self, id: &str) -> Option<u8> {
        self.shares.get(id)
    }

    /// Per-persona breakdown, in input order
    pub fn entries(&self) -> &[SuggestedShare] {
        &self.entries
    }

    pub fn entry(&self, id: &str) -> Option<&SuggestedShare> {
        self.entries.iter().find(|e| e.id.as_str() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the rounded shares (within a few points of 100 for independent rounding)
    pub fn total(&self) -> u32 {
        self.shares.total()
    }
}

/// Raw allocator score for a persona
pub fn persona_score(persona: &PersonaRecord) -> f64 {
    let payback = f64::from(persona.payback_days().max(1));
    persona.profit_index() * persona.ltv() / payback
}

/// Compute the suggested mix for a fixed set of personas.
///
/// Every persona appears in a non-empty result: a persona scoring zero is
/// lifted to the band floor by the clamp step. Returns an empty suggestion
/// when the scores sum to zero.
pub fn suggest_mix(personas: &[PersonaRecord], config: &AllocationConfig) -> SuggestedMix {
    let scores: Vec<(PersonaId, f64)> = personas
        .iter()
        .map(|p| (p.id().clone(), persona_score(p)))
        .collect();

    let total_score: f64 = scores.iter().map(|(_, s)| s).sum();
    if total_score == 0.0 || !total_score.is_finite() {
        return SuggestedMix::default();
    }

    let mut entries: Vec<SuggestedShare> = scores
        .into_iter()
        .map(|(id, score)| {
            let raw_pct = score / total_score * 100.0;
            SuggestedShare {
                id,
                score,
                raw_pct,
                clamped_pct: raw_pct.max(config.floor).min(config.ceiling),
                normalized_pct: 0.0,
                share: 0,
            }
        })
        .collect();

    let clamped_total: f64 = entries.iter().map(|e| e.clamped_pct).sum();
    if clamped_total <= 0.0 {
        return SuggestedMix::default();
    }

    for entry in &mut entries {
        entry.normalized_pct = entry.clamped_pct / clamped_total * 100.0;
    }

    match config.rounding {
        RoundingMode::Independent => {
            for entry in &mut entries {
                entry.share = to_share(entry.normalized_pct.round());
            }
        }
        RoundingMode::LargestRemainder => apply_largest_remainder(&mut entries),
    }

    let shares = entries
        .iter()
        .map(|e| (e.id.clone(), e.share))
        .collect::<TargetMix>();

    SuggestedMix { entries, shares }
}

fn to_share(value: f64) -> u8 {
    value.clamp(0.0, 100.0) as u8
}

/// Floor every share, then give the leftover points to the largest fractional
/// parts. Ties go to the persona listed first.
fn apply_largest_remainder(entries: &mut [SuggestedShare]) {
    let mut assigned: u32 = 0;
    for entry in entries.iter_mut() {
        entry.share = to_share(entry.normalized_pct.floor());
        assigned += u32::from(entry.share);
    }

    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = entries[a].normalized_pct - entries[a].normalized_pct.floor();
        let rb = entries[b].normalized_pct - entries[b].normalized_pct.floor();
        rb.partial_cmp(&ra).unwrap_or(std::cmp::Ordering::Equal)
    });

    let leftover = 100u32.saturating_sub(assigned) as usize;
    for &idx in order.iter().cycle().take(leftover) {
        entries[idx].share = entries[idx].share.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persona(id: &str, ltv: f64, payback: u32, index: f64) -> PersonaRecord {
        PersonaRecord::builder(id, id.to_uppercase())
            .ltv(ltv)
            .payback_days(payback)
            .profit_index(index)
            .build()
            .unwrap()
    }

    #[test]
    fn test_persona_score() {
        let p = persona("a", 500.0, 25, 1.5);
        assert!((persona_score(&p) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_is_empty() {
        let mix = suggest_mix(&[], &AllocationConfig::default());
        assert!(mix.is_empty());
        assert_eq!(mix.total(), 0);
    }

    #[test]
    fn test_zero_scores_yield_empty_suggestion() {
        let personas = vec![persona("a", 0.0, 10, 1.0), persona("b", 300.0, 10, 0.0)];
        let mix = suggest_mix(&personas, &AllocationConfig::default());
        assert!(mix.is_empty());
        assert!(mix.shares().is_empty());
    }

    #[test]
    fn test_equal_personas_split_evenly() {
        let personas = vec![
            persona("a", 400.0, 20, 1.0),
            persona("b", 400.0, 20, 1.0),
            persona("c", 400.0, 20, 1.0),
            persona("d", 400.0, 20, 1.0),
        ];
        let mix = suggest_mix(&personas, &AllocationConfig::default());
        for id in ["a", "b", "c", "d"] {
            assert_eq!(mix.get(id), Some(25));
        }
    }

    #[test]
    fn test_ceiling_caps_dominant_persona() {
        // a: 95%, b: 5% raw -> clamp 60 / 5 -> renormalized 92.3 / 7.7
        let personas = vec![persona("a", 1900.0, 1, 1.0), persona("b", 100.0, 1, 1.0)];
        let mix = suggest_mix(&personas, &AllocationConfig::default());
        let a = mix.entry("a").unwrap();
        assert!((a.raw_pct - 95.0).abs() < 1e-9);
        assert!((a.clamped_pct - 60.0).abs() < 1e-9);
        assert_eq!(mix.get("a"), Some(92));
        assert_eq!(mix.get("b"), Some(8));
    }

    #[test]
    fn test_zero_score_persona_lifted_to_floor() {
        let personas = vec![
            persona("a", 500.0, 10, 1.0),
            persona("b", 500.0, 10, 1.0),
            persona("c", 0.0, 10, 1.0),
        ];
        let mix = suggest_mix(&personas, &AllocationConfig::default());
        let c = mix.entry("c").unwrap();
        assert_eq!(c.score, 0.0);
        assert!((c.clamped_pct - 5.0).abs() < 1e-9);
        assert!(mix.get("c").unwrap() > 0);
    }

    #[test]
    fn test_largest_remainder_sums_to_hundred() {
        let personas = vec![
            persona("a", 300.0, 10, 1.0),
            persona("b", 300.0, 10, 1.0),
            persona("c", 300.0, 10, 1.0),
        ];
        let independent = suggest_mix(&personas, &AllocationConfig::default());
        assert_eq!(independent.total(), 99);

        let config = AllocationConfig::default().with_rounding(RoundingMode::LargestRemainder);
        let hamilton = suggest_mix(&personas, &config);
        assert_eq!(hamilton.total(), 100);
        // First listed wins the tie
        assert_eq!(hamilton.get("a"), Some(34));
        assert_eq!(hamilton.get("b"), Some(33));
        assert_eq!(hamilton.get("c"), Some(33));
    }

    #[test]
    fn test_entries_keep_input_order() {
        let personas = vec![persona("z", 100.0, 10, 1.0), persona("a", 200.0, 10, 1.0)];
        let mix = suggest_mix(&personas, &AllocationConfig::default());
        let ids: Vec<&str> = mix.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a"]);
    }
}
