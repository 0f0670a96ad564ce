//! Mix deviation thresholds
//!
//! Two different gaps are flagged in the product and they are deliberately
//! kept as separate constants:
//! - the profit impact report warns when target and current share differ by
//!   more than [`IMPACT_DEVIATION_THRESHOLD`] points
//! - a persona badge shows "N% off" when the target mix differs from the
//!   suggested mix by more than [`CARD_DEVIATION_THRESHOLD`] points

/// Strict threshold (percentage points) for impact report warnings
pub const IMPACT_DEVIATION_THRESHOLD: f64 = 5.0;

/// Strict threshold (percentage points) for the target-vs-suggested badge
pub const CARD_DEVIATION_THRESHOLD: u8 = 10;

/// Whether a current/target gap is large enough for an impact warning
pub fn exceeds_impact_threshold(current_share: f64, target_share: f64) -> bool {
    (target_share - current_share).abs() > IMPACT_DEVIATION_THRESHOLD
}

/// Gap between target and suggested mix, when it exceeds the badge threshold
pub fn card_deviation(target: u8, suggested: u8) -> Option<u8> {
    let gap = target.abs_diff(suggested);
    (gap > CARD_DEVIATION_THRESHOLD).then_some(gap)
}
