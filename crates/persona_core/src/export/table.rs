use std::borrow::Cow;

use super::plain_number;
use crate::model::{PersonaRecord, TargetMix};

/// Escape one CSV field.
///
/// A field containing a comma, a double quote or a newline is wrapped in
/// double quotes with every inner quote doubled. Anything else is returned
/// untouched.
pub fn escape_csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Join rows into CSV text: fields by `,`, records by `\n`, no trailing newline
pub(super) fn join_rows<R, F>(rows: R) -> String
where
    R: IntoIterator<Item = Vec<F>>,
    F: AsRef<str>,
{
    rows.into_iter()
        .map(|row| {
            row.iter()
                .map(|field| escape_csv_field(field.as_ref()))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `personaId,targetShare` rows for a stored target mix
pub fn target_mix_csv(mix: &TargetMix) -> String {
    let header = vec!["personaId".to_string(), "targetShare".to_string()];
    let rows = mix
        .iter()
        .map(|(id, share)| vec![id.to_string(), share.to_string()]);
    join_rows(std::iter::once(header).chain(rows))
}

/// One row per persona with its value metrics
pub fn personas_csv(personas: &[PersonaRecord]) -> String {
    let header = [
        "id",
        "label",
        "currentShare",
        "ltv",
        "cac",
        "paybackDays",
        "profitIndex",
    ]
    .iter()
    .map(|h| h.to_string())
    .collect::<Vec<_>>();

    let rows = personas.iter().map(|p| {
        vec![
            p.id().to_string(),
            p.label().to_string(),
            plain_number(p.current_share()),
            plain_number(p.ltv()),
            plain_number(p.cac()),
            p.payback_days().to_string(),
            plain_number(p.profit_index()),
        ]
    });
    join_rows(std::iter::once(header).chain(rows))
}
