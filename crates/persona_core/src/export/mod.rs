//! Creative brief and mix exports
//!
//! All exporters are pure string builders. The calendar year and generation
//! date come in through [`ExportContext`] so output is reproducible.

mod ads;
mod table;
mod document;

use jiff::civil::Date;

pub use ads::{GOOGLE_ADS_HEADER, META_ADS_HEADER, google_ads_csv, meta_ads_csv};
pub use table::{escape_csv_field, personas_csv, target_mix_csv};
pub use document::brief_document;

/// Clock values stamped into exports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportContext {
    /// Year used in ad set / ad group names (`{label} - {month}/{year}`)
    pub year: i16,
    /// Date printed in the brief document header
    pub generated: Date,
}

impl ExportContext {
    pub fn new(generated: Date) -> Self {
        Self {
            year: generated.year(),
            generated,
        }
    }
}

/// Downloadable campaign export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    MetaAds,
    GoogleAds,
    BriefDocument,
}

impl ExportFormat {
    /// File name stamped with a millisecond timestamp
    pub fn file_name(&self, timestamp_ms: i64) -> String {
        match self {
            ExportFormat::MetaAds => format!("meta-ads-campaign-{timestamp_ms}.csv"),
            ExportFormat::GoogleAds => format!("google-ads-campaign-{timestamp_ms}.csv"),
            ExportFormat::BriefDocument => format!("creative-briefs-{timestamp_ms}.txt"),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::MetaAds | ExportFormat::GoogleAds => "text/csv",
            ExportFormat::BriefDocument => "text/plain",
        }
    }

    pub fn render(&self, briefs: &[crate::model::CreativeBrief], ctx: &ExportContext) -> String {
        match self {
            ExportFormat::MetaAds => meta_ads_csv(briefs, ctx),
            ExportFormat::GoogleAds => google_ads_csv(briefs, ctx),
            ExportFormat::BriefDocument => brief_document(briefs, ctx),
        }
    }
}

/// Shortest decimal rendering of a number: `45.0` -> `45`, `45.5` -> `45.5`
fn plain_number(value: f64) -> String {
    format!("{value}")
}

/// Dollar amount as written in the ad exports (`$45`)
fn dollars(value: f64) -> String {
    format!("${}", plain_number(value))
}

/// Monthly budget spread over 30 days, rounded half up
fn daily_budget(estimated_budget: f64) -> i64 {
    (estimated_budget / 30.0 + 0.5).floor() as i64
}

/// Group the integer part with commas and keep up to three decimals
/// (`15000` -> `15,000`, `1234.5` -> `1,234.5`).
fn group_thousands(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let whole = abs.trunc();

    let digits = format!("{whole:.0}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let fraction = format!("{:.3}", abs - whole);
    let fraction = fraction.trim_start_matches('0').trim_end_matches('0');
    if fraction.len() > 1 {
        grouped.push_str(fraction);
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}
