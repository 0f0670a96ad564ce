//! Common styling for the mix editor

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Border color of the focused panel
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Help and secondary text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Table headers and titles
pub const HEADER_COLOR: Color = Color::Cyan;

pub const POSITIVE_COLOR: Color = Color::Green;

pub const NEGATIVE_COLOR: Color = Color::Red;

/// Unbalanced totals and deviation badges
pub const WARNING_COLOR: Color = Color::Yellow;

/// Bordered block whose border turns yellow when focused, with optional
/// help text along the bottom edge.
///
/// # Example
/// ```ignore
/// let block = focused_block_with_help("Target Mix", true, "h/l adjust");
/// ```
pub fn focused_block_with_help(title: &str, focused: bool, help_text: &str) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", title));

    if focused && !help_text.is_empty() {
        block = block.title_bottom(Line::from(format!(" {} ", help_text)).fg(HELP_COLOR));
    }

    block
}

/// Green for gains, red for losses
pub fn value_color(value: f64) -> Color {
    if value >= 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    }
}

pub fn value_style(value: f64) -> Style {
    Style::default().fg(value_color(value))
}

/// Green when the mix sums to 100, yellow otherwise
pub fn total_style(balanced: bool) -> Style {
    if balanced {
        Style::default().fg(POSITIVE_COLOR)
    } else {
        Style::default().fg(WARNING_COLOR).add_modifier(Modifier::BOLD)
    }
}
