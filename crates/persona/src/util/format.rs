//! Number formatting for reports and the mix editor

/// Insert thousands separators into a run of digits
fn group_digits(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a currency value without cents (`$12,345`, `-$900`)
pub fn format_currency_short(value: f64) -> String {
    let dollars = value.abs().round() as i64;
    let formatted = group_digits(&dollars.to_string());

    if value < 0.0 && dollars != 0 {
        format!("-${}", formatted)
    } else {
        format!("${}", formatted)
    }
}

/// Currency with an explicit sign, used for deltas (`+$30,000`)
pub fn format_signed_currency(value: f64) -> String {
    if value > 0.0 && value.round() != 0.0 {
        format!("+{}", format_currency_short(value))
    } else {
        format_currency_short(value)
    }
}

/// Format a percentage already on the 0-100 scale
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Signed percentage change, or `n/a` when it cannot be computed
pub fn format_change(change: Option<f64>) -> String {
    match change {
        Some(pct) if pct > 0.0 => format!("+{:.1}%", pct),
        Some(pct) => format!("{:.1}%", pct),
        None => "n/a".to_string(),
    }
}

/// Horizontal bar made of block characters, `width` cells at `max`
pub fn share_bar(value: u8, max: u8, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = (usize::from(value.min(max)) * width) / usize::from(max);
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}
