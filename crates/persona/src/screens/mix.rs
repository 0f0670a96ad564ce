use crate::components::{Component, EventResult};
use crate::event::{AppKeyEvent, KeyCode};
use crate::state::{EditorState, SLIDER_MAX};
use crate::util::format::{
    format_change, format_currency_short, format_percent, format_signed_currency, share_bar,
};
use crate::util::styles::{
    HEADER_COLOR, WARNING_COLOR, focused_block_with_help, total_style, value_style,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use super::Screen;

const BAR_WIDTH: usize = 12;
/// Deviations listed in the impact panel
const MAX_DEVIATIONS: usize = 3;

pub struct MixScreen {
    table_state: TableState,
}

impl MixScreen {
    pub fn new() -> Self {
        Self {
            table_state: TableState::default().with_selected(Some(0)),
        }
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect, state: &EditorState) {
        let header = Row::new(
            [
                "Persona", "Current", "LTV", "Payback", "Index", "Suggested", "Target", "",
            ]
            .into_iter()
            .map(Cell::from),
        )
        .style(
            Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = state
            .personas
            .iter()
            .map(|persona| {
                let id = persona.id().as_str();
                let target = state.session.target().share_or_zero(id);
                let suggested = state
                    .session
                    .suggested()
                    .get(id)
                    .map(|s| format!("{s}%"))
                    .unwrap_or_else(|| "-".to_string());
                let badge = state
                    .session
                    .card_deviation(id)
                    .map(|gap| {
                        Span::styled(format!("{gap}% off"), Style::default().fg(WARNING_COLOR))
                    })
                    .unwrap_or_else(|| Span::raw(""));

                Row::new(vec![
                    Cell::from(persona.label().to_string()),
                    Cell::from(format_percent(persona.current_share())),
                    Cell::from(format_currency_short(persona.ltv())),
                    Cell::from(format!("{}d", persona.payback_days())),
                    Cell::from(format!("{:.1}", persona.profit_index())),
                    Cell::from(suggested),
                    Cell::from(format!(
                        "{:>3}% {}",
                        target,
                        share_bar(target, SLIDER_MAX, BAR_WIDTH)
                    )),
                    Cell::from(Line::from(badge)),
                ])
            })
            .collect();

        let widths = [
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(18),
            Constraint::Length(8),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(focused_block_with_help(
                "TARGET MIX",
                true,
                "h/l adjust | a apply | r reset",
            ))
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        self.table_state.select(Some(state.selected));
        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_total(&self, frame: &mut Frame, area: Rect, state: &EditorState) {
        let total = state.session.total();
        let balanced = state.session.is_balanced();

        let mut spans = vec![
            Span::raw("  Total: "),
            Span::styled(format!("{total}%"), total_style(balanced)),
        ];
        if !balanced {
            spans.push(Span::styled(
                "  (target mix should total 100%)",
                total_style(false),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_impact(&self, frame: &mut Frame, area: Rect, state: &EditorState) {
        let impact = state.impact();

        let mut lines = vec![
            Line::from(format!(
                "  Current monthly profit:  {}",
                format_currency_short(impact.current_profit)
            )),
            Line::from(format!(
                "  Target monthly profit:   {}",
                format_currency_short(impact.target_profit)
            )),
            Line::from(vec![
                Span::raw("  Monthly difference:      "),
                Span::styled(
                    format!(
                        "{} ({})",
                        format_signed_currency(impact.difference),
                        format_change(impact.percentage_change)
                    ),
                    value_style(impact.difference),
                ),
            ]),
            Line::from(vec![
                Span::raw("  Annual projection:       "),
                Span::styled(
                    format_signed_currency(impact.annual_projection),
                    value_style(impact.annual_projection),
                ),
            ]),
        ];

        if !impact.deviations.is_empty() {
            lines.push(Line::from(""));
            for d in impact.deviations.iter().take(MAX_DEVIATIONS) {
                lines.push(Line::from(Span::styled(
                    format!(
                        "  {}: {} by {:.0} points",
                        d.label,
                        d.direction.as_str(),
                        d.deviation
                    ),
                    Style::default().fg(WARNING_COLOR),
                )));
            }
        }

        let block = Block::default().borders(Borders::ALL).title(format!(
            " PROFIT IMPACT ({} new customers / month) ",
            state.monthly_new_customers
        ));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Default for MixScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for MixScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut EditorState) -> EventResult {
        if !key.no_modifiers() {
            return EventResult::NotHandled;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => state.select_prev(),
            KeyCode::Char('l') | KeyCode::Right => state.adjust_selected(1),
            KeyCode::Char('h') | KeyCode::Left => state.adjust_selected(-1),
            KeyCode::Char('L') => state.adjust_selected(5),
            KeyCode::Char('H') => state.adjust_selected(-5),
            KeyCode::Char('a') => state.apply_suggestions(),
            KeyCode::Char('r') => state.reset(),
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &EditorState) {
        let table_height = state.personas.len() as u16 + 3;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(table_height), // Persona table
                Constraint::Length(1),            // Total
                Constraint::Min(6),               // Impact
            ])
            .split(area);

        self.render_table(frame, chunks[0], state);
        self.render_total(frame, chunks[1], state);
        self.render_impact(frame, chunks[2], state);
    }
}

impl Screen for MixScreen {
    fn title(&self) -> &str {
        "Persona Mix"
    }
}
