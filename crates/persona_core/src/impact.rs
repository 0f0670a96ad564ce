//! Profit impact of a mix change
//!
//! For a fixed pool of new customers per month, compares the contribution
//! (`ltv - cac` per customer) earned under the current acquisition mix with
//! the contribution under a target mix.

use serde::{Deserialize, Serialize};

use crate::deviation::exceeds_impact_threshold;
use crate::model::{PersonaId, PersonaRecord, TargetMix};

const MONTHS_PER_YEAR: f64 = 12.0;

/// One persona's move from its current share to a target share (0-100 scale)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixShift {
    pub id: PersonaId,
    pub label: String,
    pub current_share: f64,
    pub target_share: f64,
    pub ltv: f64,
    pub cac: f64,
}

impl MixShift {
    pub fn from_persona(persona: &PersonaRecord, target_share: f64) -> Self {
        Self {
            id: persona.id().clone(),
            label: persona.label().to_string(),
            current_share: persona.current_share(),
            target_share,
            ltv: persona.ltv(),
            cac: persona.cac(),
        }
    }

    pub fn profit_per_customer(&self) -> f64 {
        self.ltv - self.cac
    }
}

/// Build one shift per persona from a stored target mix.
///
/// Personas missing from the mix are treated as a 0% target.
pub fn shifts_for_mix(personas: &[PersonaRecord], target: &TargetMix) -> Vec<MixShift> {
    personas
        .iter()
        .map(|p| MixShift::from_persona(p, f64::from(target.share_or_zero(p.id().as_str()))))
        .collect()
}

/// Per-persona contribution to the overall delta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaImpact {
    pub id: PersonaId,
    pub label: String,
    pub current_customers: f64,
    pub target_customers: f64,
    pub customer_diff: f64,
    pub profit_per_customer: f64,
    pub profit_impact: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviationDirection {
    Increase,
    Decrease,
}

impl DeviationDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviationDirection::Increase => "increase",
            DeviationDirection::Decrease => "decrease",
        }
    }
}

/// A persona whose target share is far from its current share
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixDeviation {
    pub id: PersonaId,
    pub label: String,
    /// Absolute gap in percentage points
    pub deviation: f64,
    pub direction: DeviationDirection,
}

/// Monthly and annual profit consequence of moving to the target mix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitImpact {
    pub current_profit: f64,
    pub target_profit: f64,
    /// `target_profit - current_profit`
    pub difference: f64,
    /// `difference / current_profit * 100`; `None` when current profit is zero
    pub percentage_change: Option<f64>,
    /// Monthly difference extrapolated linearly over twelve months
    pub annual_projection: f64,
    /// Sorted by absolute profit impact, largest first
    pub persona_impacts: Vec<PersonaImpact>,
    /// Sorted by deviation, largest first
    pub deviations: Vec<MixDeviation>,
}

impl ProfitImpact {
    pub fn is_gain(&self) -> bool {
        self.difference > 0.0
    }
}

fn customers_at(share: f64, monthly_new_customers: u32) -> f64 {
    share / 100.0 * f64::from(monthly_new_customers)
}

/// Estimate the profit delta of moving every persona from its current share
/// to its target share.
pub fn estimate_profit_impact(shifts: &[MixShift], monthly_new_customers: u32) -> ProfitImpact {
    let current_profit: f64 = shifts
        .iter()
        .map(|s| customers_at(s.current_share, monthly_new_customers) * s.profit_per_customer())
        .sum();

    let target_profit: f64 = shifts
        .iter()
        .map(|s| customers_at(s.target_share, monthly_new_customers) * s.profit_per_customer())
        .sum();

    let difference = target_profit - current_profit;
    let percentage_change = if current_profit == 0.0 {
        None
    } else {
        Some(difference / current_profit * 100.0)
    };

    let mut persona_impacts: Vec<PersonaImpact> = shifts
        .iter()
        .map(|s| {
            let current_customers = customers_at(s.current_share, monthly_new_customers);
            let target_customers = customers_at(s.target_share, monthly_new_customers);
            let customer_diff = target_customers - current_customers;
            PersonaImpact {
                id: s.id.clone(),
                label: s.label.clone(),
                current_customers,
                target_customers,
                customer_diff,
                profit_per_customer: s.profit_per_customer(),
                profit_impact: customer_diff * s.profit_per_customer(),
            }
        })
        .collect();
    persona_impacts.sort_by(|a, b| {
        b.profit_impact
            .abs()
            .partial_cmp(&a.profit_impact.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut deviations: Vec<MixDeviation> = shifts
        .iter()
        .filter(|s| exceeds_impact_threshold(s.current_share, s.target_share))
        .map(|s| MixDeviation {
            id: s.id.clone(),
            label: s.label.clone(),
            deviation: (s.target_share - s.current_share).abs(),
            direction: if s.target_share > s.current_share {
                DeviationDirection::Increase
            } else {
                DeviationDirection::Decrease
            },
        })
        .collect();
    deviations.sort_by(|a, b| {
        b.deviation
            .partial_cmp(&a.deviation)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ProfitImpact {
        current_profit,
        target_profit,
        difference,
        percentage_change,
        annual_projection: difference * MONTHS_PER_YEAR,
        persona_impacts,
        deviations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_shifts() {
        let impact = estimate_profit_impact(&[], 1_000);
        assert_eq!(impact.current_profit, 0.0);
        assert_eq!(impact.difference, 0.0);
        assert_eq!(impact.percentage_change, None);
        assert!(impact.persona_impacts.is_empty());
        assert!(!impact.is_gain());
    }

    #[test]
    fn test_missing_target_treated_as_zero() {
        let persona = PersonaRecord::builder("a", "A")
            .current_share(40.0)
            .ltv(300.0)
            .cac(100.0)
            .build()
            .unwrap();
        let shifts = shifts_for_mix(&[persona], &TargetMix::new());
        assert_eq!(shifts[0].target_share, 0.0);
        assert_eq!(shifts[0].current_share, 40.0);
    }
}
