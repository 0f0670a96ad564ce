//! Scenario tests for the persona mix engine
//!
//! Tests are organized by topic:
//! - `allocation` - Suggested mix properties (sum, band, monotonicity, zero scores)
//! - `impact` - Profit impact arithmetic and deviation warnings
//! - `export` - CSV escaping and ad platform exports

mod export;

use crate::model::PersonaRecord;

/// Persona with the allocator inputs and the impact inputs filled in
pub(crate) fn persona(
    id: &str,
    share: f64,
    ltv: f64,
    cac: f64,
    payback_days: u32,
    profit_index: f64,
) -> PersonaRecord {
    PersonaRecord::builder(id, id.replace('-', " "))
        .current_share(share)
        .ltv(ltv)
        .cac(cac)
        .payback_days(payback_days)
        .profit_index(profit_index)
        .build()
        .expect("valid test persona")
}

/// The four personas from the bundled dashboard fixture
pub(crate) fn dashboard_personas() -> Vec<PersonaRecord> {
    vec![
        persona("high-value", 30.0, 500.0, 50.0, 28, 1.3),
        persona("fashion-forward", 25.0, 280.0, 42.0, 35, 1.1),
        persona("deal-seeker", 30.0, 150.0, 38.0, 60, 0.7),
        persona("casual-browser", 15.0, 120.0, 60.0, 90, 0.5),
    ]
}
