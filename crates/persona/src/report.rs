//! Plain-text reports printed by the CLI

use std::fmt::Write;

use persona_core::allocation::SuggestedMix;
use persona_core::impact::ProfitImpact;
use persona_core::model::PersonaRecord;

use crate::data::Preferences;
use crate::mix_state::MixSession;
use crate::util::format::{
    format_change, format_currency_short, format_percent, format_signed_currency, share_bar,
};

const LABEL_WIDTH: usize = 22;
const BAR_WIDTH: usize = 20;

/// Suggested mix with the allocator's intermediate values
pub fn suggestion_table(personas: &[PersonaRecord], suggested: &SuggestedMix) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$} {:>10} {:>10} {:>10} {:>8}",
        "Persona", "Score", "Raw", "Unrounded", "Share"
    );

    for persona in personas {
        let Some(entry) = suggested.entry(persona.id().as_str()) else {
            continue;
        };
        let _ = writeln!(
            out,
            "{:<LABEL_WIDTH$} {:>10.2} {:>10} {:>10} {:>7}%",
            persona.label(),
            entry.score,
            format_percent(entry.raw_pct),
            format_percent(entry.normalized_pct),
            entry.share
        );
    }

    let _ = write!(out, "{:<LABEL_WIDTH$} {:>50}%", "Total", suggested.total());
    out
}

/// Stored target mix next to current and suggested shares
pub fn mix_table(personas: &[PersonaRecord], session: &MixSession) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$} {:>8} {:>10} {:>7}  {:<BAR_WIDTH$}",
        "Persona", "Current", "Suggested", "Target", ""
    );

    for persona in personas {
        let id = persona.id().as_str();
        let target = session.target().share_or_zero(id);
        let suggested = session
            .suggested()
            .get(id)
            .map(|s| format!("{s}%"))
            .unwrap_or_else(|| "-".to_string());

        let _ = write!(
            out,
            "{:<LABEL_WIDTH$} {:>8} {:>10} {:>6}%  {}",
            persona.label(),
            format_percent(persona.current_share()),
            suggested,
            target,
            share_bar(target, 100, BAR_WIDTH)
        );
        if let Some(gap) = session.card_deviation(id) {
            let _ = write!(out, "  {gap}% off");
        }
        out.push('\n');
    }

    let _ = write!(out, "{:<LABEL_WIDTH$} {:>26}%", "Total", session.total());
    if !session.is_balanced() {
        let _ = write!(out, "\nWarning: target mix totals {}%, not 100%", session.total());
    }
    out
}

/// Profit impact of the target mix versus current shares
pub fn impact_report(impact: &ProfitImpact, monthly_new_customers: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Profit impact ({monthly_new_customers} new customers / month)");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  Current monthly profit:  {}",
        format_currency_short(impact.current_profit)
    );
    let _ = writeln!(
        out,
        "  Target monthly profit:   {}",
        format_currency_short(impact.target_profit)
    );
    let _ = writeln!(
        out,
        "  Monthly difference:      {} ({})",
        format_signed_currency(impact.difference),
        format_change(impact.percentage_change)
    );
    let _ = writeln!(
        out,
        "  Annual projection:       {}",
        format_signed_currency(impact.annual_projection)
    );

    if !impact.persona_impacts.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "  {:<LABEL_WIDTH$} {:>10} {:>12} {:>12}",
            "Persona", "Customers", "Per customer", "Impact"
        );
        for p in &impact.persona_impacts {
            let _ = writeln!(
                out,
                "  {:<LABEL_WIDTH$} {:>+10.0} {:>12} {:>12}",
                p.label,
                p.customer_diff,
                format_currency_short(p.profit_per_customer),
                format_signed_currency(p.profit_impact)
            );
        }
    }

    if !impact.deviations.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  Significant mix changes:");
        for d in &impact.deviations {
            let _ = writeln!(
                out,
                "    {}: {} by {:.1} points",
                d.label,
                d.direction.as_str(),
                d.deviation
            );
        }
    }

    out.truncate(out.trim_end().len());
    out
}

pub fn preferences_summary(prefs: &Preferences) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Onboarding: {}",
        if prefs.onboarding_completed {
            "completed"
        } else {
            "pending"
        }
    );
    let _ = writeln!(
        out,
        "Connections ({}/{}):",
        prefs.connected_count(),
        prefs.total_sources()
    );
    for (source, connected) in &prefs.connections {
        let mark = if *connected { "x" } else { " " };
        let _ = writeln!(out, "  [{mark}] {source}");
    }
    let _ = writeln!(out, "Guardrails:");
    let _ = writeln!(out, "  Style guide: {}", prefs.guardrails.style_guide);
    let _ = writeln!(out, "  Do say:      {}", prefs.guardrails.do_say);
    let _ = write!(out, "  Don't say:   {}", prefs.guardrails.dont_say);
    out
}
