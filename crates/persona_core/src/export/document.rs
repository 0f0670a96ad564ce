use std::fmt::Write;

use super::{ExportContext, group_thousands, plain_number};
use crate::model::CreativeBrief;

const SEPARATOR: &str = "---\n\n";

/// Plain-text (Markdown-like) dump of every brief, ready to paste or print.
///
/// Sections appear in a fixed order: objective, target audience, key
/// message, hooks, messaging angles, copy variations, image prompts and
/// success metrics. Each brief ends with a `---` rule.
pub fn brief_document(briefs: &[CreativeBrief], ctx: &ExportContext) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_document(&mut out, briefs, ctx);
    out
}

fn write_document(out: &mut String, briefs: &[CreativeBrief], ctx: &ExportContext) -> std::fmt::Result {
    let generated = ctx.generated;
    out.push_str("# Creative Briefs - Export\n\n");
    writeln!(
        out,
        "Generated: {}/{}/{}\n",
        generated.month(),
        generated.day(),
        generated.year()
    )?;
    out.push_str(SEPARATOR);

    for (index, brief) in briefs.iter().enumerate() {
        writeln!(out, "## {}. {}\n", index + 1, brief.title)?;
        writeln!(out, "**Persona:** {}", brief.persona_label)?;
        writeln!(out, "**Quarter:** {} - Month {}", brief.quarter, brief.month)?;
        writeln!(out, "**Budget:** ${}\n", group_thousands(brief.estimated_budget))?;

        writeln!(out, "### Objective\n{}\n", brief.objective)?;
        writeln!(out, "### Target Audience\n{}\n", brief.target_audience)?;
        writeln!(out, "### Key Message\n{}\n", brief.key_message)?;

        out.push_str("### Hooks\n");
        for hook in &brief.hooks {
            writeln!(out, "- {hook}")?;
        }
        out.push('\n');

        out.push_str("### Messaging Angles\n");
        for angle in &brief.messaging_angles {
            writeln!(out, "**{}**", angle.angle)?;
            writeln!(out, "- {}", angle.description)?;
            writeln!(out, "- Rationale: {}\n", angle.rationale)?;
        }

        let copy = &brief.copy_variations;
        out.push_str("### Copy Variations\n");
        out.push_str("**Headlines:**\n");
        for headline in &copy.headlines {
            writeln!(out, "- {headline}")?;
        }
        out.push_str("\n**Descriptions:**\n");
        for description in &copy.descriptions {
            writeln!(out, "- {description}")?;
        }
        out.push_str("\n**CTAs:**\n");
        for cta in &copy.cta {
            writeln!(out, "- {cta}")?;
        }
        out.push('\n');

        out.push_str("### Image Prompts\n");
        for (i, prompt) in brief.image_prompts.iter().enumerate() {
            writeln!(out, "{}. {prompt}", i + 1)?;
        }
        out.push('\n');

        let metrics = &brief.success_metrics;
        out.push_str("### Success Metrics\n");
        writeln!(out, "- Primary KPI: {}", metrics.primary_kpi)?;
        writeln!(out, "- Target CAC: ${}", plain_number(metrics.target_cac))?;
        writeln!(out, "- Target LTV: ${}", plain_number(metrics.target_ltv))?;
        writeln!(out, "- Target Payback: {} days\n", metrics.target_payback)?;

        out.push_str(SEPARATOR);
    }

    Ok(())
}
