//! Ad platform bulk-upload CSVs

use super::table::join_rows;
use super::{ExportContext, daily_budget, dollars};
use crate::model::CreativeBrief;

pub const META_ADS_HEADER: [&str; 13] = [
    "Campaign Name",
    "Ad Set Name",
    "Ad Name",
    "Persona",
    "Objective",
    "Daily Budget",
    "Headline",
    "Primary Text",
    "Description",
    "Call to Action",
    "Image Prompt",
    "Target CAC",
    "Target LTV",
];

pub const GOOGLE_ADS_HEADER: [&str; 15] = [
    "Campaign",
    "Ad Group",
    "Ad Type",
    "Persona",
    "Daily Budget",
    "Headline 1",
    "Headline 2",
    "Headline 3",
    "Description 1",
    "Description 2",
    "Final URL",
    "Path 1",
    "Path 2",
    "Target CAC",
    "Target LTV",
];

const GOOGLE_ADS_PER_BRIEF: usize = 3;
const GOOGLE_HEADLINES_PER_AD: usize = 3;
const GOOGLE_DESCRIPTIONS_PER_AD: usize = 2;
const GOOGLE_AD_TYPE: &str = "Responsive Search Ad";
const FINAL_URL: &str = "https://yourbrand.com";

fn campaign_name(brief: &CreativeBrief) -> String {
    format!("{} - {}", brief.quarter, brief.title)
}

fn group_name(brief: &CreativeBrief, ctx: &ExportContext) -> String {
    format!("{} - {}/{}", brief.persona_label, brief.month, ctx.year)
}

/// Item `i` of a list, wrapping around; empty string for an empty list
fn cycled(items: &[String], i: usize) -> String {
    if items.is_empty() {
        String::new()
    } else {
        items[i % items.len()].clone()
    }
}

/// `len` items starting at `start`, padded with the list's first item
fn padded_window(items: &[String], start: usize, len: usize) -> Vec<String> {
    let first = items.first().cloned().unwrap_or_default();
    (start..start + len)
        .map(|i| items.get(i).cloned().unwrap_or_else(|| first.clone()))
        .collect()
}

/// Meta Ads Manager import.
///
/// Each brief yields one ad per variation, where the variation count is the
/// shortest of its headlines, descriptions and hooks.
pub fn meta_ads_csv(briefs: &[CreativeBrief], ctx: &ExportContext) -> String {
    let mut rows: Vec<Vec<String>> = vec![META_ADS_HEADER.iter().map(|h| h.to_string()).collect()];

    for brief in briefs {
        let campaign = campaign_name(brief);
        let ad_set = group_name(brief, ctx);
        let budget = daily_budget(brief.estimated_budget).to_string();
        let copy = &brief.copy_variations;

        let variations = copy
            .headlines
            .len()
            .min(copy.descriptions.len())
            .min(brief.hooks.len());

        for i in 0..variations {
            rows.push(vec![
                campaign.clone(),
                ad_set.clone(),
                format!("{} - Var {}", brief.title, i + 1),
                brief.persona_label.clone(),
                brief.objective.clone(),
                budget.clone(),
                copy.headlines[i].clone(),
                brief.hooks[i].clone(),
                copy.descriptions[i].clone(),
                cycled(&copy.cta, i),
                cycled(&brief.image_prompts, i),
                dollars(brief.success_metrics.target_cac),
                dollars(brief.success_metrics.target_ltv),
            ]);
        }
    }

    join_rows(rows)
}

/// Google Ads Editor import: three responsive search ads per brief
pub fn google_ads_csv(briefs: &[CreativeBrief], ctx: &ExportContext) -> String {
    let mut rows: Vec<Vec<String>> =
        vec![GOOGLE_ADS_HEADER.iter().map(|h| h.to_string()).collect()];

    for brief in briefs {
        let campaign = campaign_name(brief);
        let ad_group = group_name(brief, ctx);
        let budget = daily_budget(brief.estimated_budget).to_string();
        let copy = &brief.copy_variations;

        for i in 0..GOOGLE_ADS_PER_BRIEF {
            let headlines = padded_window(
                &copy.headlines,
                i * GOOGLE_HEADLINES_PER_AD,
                GOOGLE_HEADLINES_PER_AD,
            );
            let descriptions = padded_window(
                &copy.descriptions,
                i * GOOGLE_DESCRIPTIONS_PER_AD,
                GOOGLE_DESCRIPTIONS_PER_AD,
            );

            let mut row = vec![
                campaign.clone(),
                ad_group.clone(),
                GOOGLE_AD_TYPE.to_string(),
                brief.persona_label.clone(),
                budget.clone(),
            ];
            row.extend(headlines);
            row.extend(descriptions);
            row.extend([
                FINAL_URL.to_string(),
                brief.persona_id.to_string(),
                brief.quarter.to_lowercase(),
                dollars(brief.success_metrics.target_cac),
                dollars(brief.success_metrics.target_ltv),
            ]);
            rows.push(row);
        }
    }

    join_rows(rows)
}
