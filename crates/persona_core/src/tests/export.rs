//! Tests for campaign exports
//!
//! These tests verify:
//! - CSV escaping parses back through a standard CSV reader
//! - Meta Ads variation count and field layout
//! - Google Ads padding and paths
//! - Brief document section order

use jiff::civil::date;

use crate::export::{
    ExportContext, GOOGLE_ADS_HEADER, META_ADS_HEADER, brief_document, escape_csv_field,
    google_ads_csv, meta_ads_csv,
};
use crate::model::{
    BriefStatus, CopyVariations, CreativeBrief, MessagingAngle, PersonaId, SuccessMetrics,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn ctx() -> ExportContext {
    ExportContext::new(date(2025, 3, 14))
}

fn sample_brief() -> CreativeBrief {
    CreativeBrief {
        id: "brief-1".to_string(),
        persona_id: PersonaId::from("high-value"),
        persona_label: "High Value".to_string(),
        quarter: "Q2".to_string(),
        month: 4,
        title: "Quality, Not Quantity".to_string(),
        objective: "Grow premium acquisition".to_string(),
        target_audience: "Repeat buyers, 30-45".to_string(),
        key_message: "Built to last".to_string(),
        hooks: strings(&["Hook one", "Hook two", "Hook three"]),
        messaging_angles: vec![MessagingAngle {
            angle: "Craft".to_string(),
            description: "Show the stitching".to_string(),
            rationale: "They value durability".to_string(),
        }],
        motivators: vec![],
        blockers: vec![],
        channels: strings(&["Meta"]),
        image_prompts: strings(&["Studio shot"]),
        copy_variations: CopyVariations {
            headlines: strings(&["H1", "H2", "H3", "H4"]),
            descriptions: strings(&["D1", "D2"]),
            cta: strings(&["Shop Now"]),
        },
        success_metrics: SuccessMetrics {
            primary_kpi: "CAC".to_string(),
            target_cac: 45.0,
            target_ltv: 520.0,
            target_payback: 30,
        },
        estimated_budget: 15_000.0,
        status: BriefStatus::Active,
        notes: None,
    }
}

fn read_records(text: &str) -> Vec<csv::StringRecord> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(text.as_bytes())
        .records()
        .collect::<Result<Vec<_>, _>>()
        .expect("export parses as CSV")
}

#[test]
fn test_escaping_round_trips_through_csv_reader() {
    let original = "Acme, Inc. \"Best\" brand\n";
    let escaped = escape_csv_field(original);
    assert_eq!(escaped, "\"Acme, Inc. \"\"Best\"\" brand\n\"");

    let line = format!("{escaped},plain");
    let records = read_records(&line);
    assert_eq!(records.len(), 1);
    assert_eq!(&records[0][0], original);
    assert_eq!(&records[0][1], "plain");
}

#[test]
fn test_meta_ads_rows() {
    let text = meta_ads_csv(&[sample_brief()], &ctx());
    let records = read_records(&text);

    // min(4 headlines, 2 descriptions, 3 hooks) = 2 variations
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].iter().collect::<Vec<_>>(), META_ADS_HEADER.to_vec());

    let row = &records[2];
    assert_eq!(&row[0], "Q2 - Quality, Not Quantity");
    assert_eq!(&row[1], "High Value - 4/2025");
    assert_eq!(&row[2], "Quality, Not Quantity - Var 2");
    assert_eq!(&row[5], "500");
    assert_eq!(&row[6], "H2");
    assert_eq!(&row[7], "Hook two");
    assert_eq!(&row[8], "D2");
    assert_eq!(&row[9], "Shop Now");
    assert_eq!(&row[10], "Studio shot");
    assert_eq!(&row[11], "$45");
    assert_eq!(&row[12], "$520");

    // Campaign name carries a comma, so the raw text is quoted
    assert!(text.contains("\"Q2 - Quality, Not Quantity\""));
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_meta_ads_no_variations() {
    let mut brief = sample_brief();
    brief.hooks.clear();
    let text = meta_ads_csv(&[brief], &ctx());
    assert_eq!(text, META_ADS_HEADER.join(","));
}

#[test]
fn test_google_ads_pads_short_lists() {
    let text = google_ads_csv(&[sample_brief()], &ctx());
    let records = read_records(&text);

    assert_eq!(records.len(), 4);
    assert_eq!(records[0].len(), GOOGLE_ADS_HEADER.len());

    let first = &records[1];
    assert_eq!(&first[2], "Responsive Search Ad");
    assert_eq!(
        [&first[5], &first[6], &first[7]],
        ["H1", "H2", "H3"]
    );
    assert_eq!([&first[8], &first[9]], ["D1", "D2"]);
    assert_eq!(&first[10], "https://yourbrand.com");
    assert_eq!(&first[11], "high-value");
    assert_eq!(&first[12], "q2");

    let second = &records[2];
    assert_eq!([&second[5], &second[6], &second[7]], ["H4", "H1", "H1"]);
    assert_eq!([&second[8], &second[9]], ["D1", "D1"]);

    let third = &records[3];
    assert_eq!([&third[5], &third[6], &third[7]], ["H1", "H1", "H1"]);
}

#[test]
fn test_brief_document_layout() {
    let doc = brief_document(&[sample_brief()], &ctx());

    assert!(doc.starts_with("# Creative Briefs - Export\n\nGenerated: 3/14/2025\n\n---\n\n"));
    assert!(doc.contains("## 1. Quality, Not Quantity\n\n"));
    assert!(doc.contains("**Quarter:** Q2 - Month 4\n"));
    assert!(doc.contains("**Budget:** $15,000\n\n"));
    assert!(doc.contains("**Craft**\n- Show the stitching\n- Rationale: They value durability\n\n"));
    assert!(doc.contains("### Image Prompts\n1. Studio shot\n\n"));
    assert!(doc.contains("- Target Payback: 30 days\n\n---\n\n"));

    let sections = [
        "### Objective",
        "### Target Audience",
        "### Key Message",
        "### Hooks",
        "### Messaging Angles",
        "### Copy Variations",
        "### Image Prompts",
        "### Success Metrics",
    ];
    let positions: Vec<usize> = sections.iter().map(|s| doc.find(s).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}
