use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
};

use crate::components::{Component, EventResult, status_bar::StatusBar};
use crate::event::AppKeyEvent;
use crate::screens::{Screen, mix::MixScreen};
use crate::state::EditorState;
use crate::util::styles::HEADER_COLOR;

/// Terminal mix editor
pub struct App {
    state: EditorState,
    status_bar: StatusBar,
    mix_screen: MixScreen,
}

impl App {
    pub fn new(state: EditorState) -> Self {
        Self {
            state,
            status_bar: StatusBar::new(),
            mix_screen: MixScreen::new(),
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.render_title(frame, chunks[0]);
        self.mix_screen.render(frame, chunks[1], &self.state);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Span::styled(
            format!(" {} ", self.mix_screen.title()),
            Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(Paragraph::new(title), area);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event.into())
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: AppKeyEvent) {
        if key.is_quit() {
            self.state.exit = true;
            return;
        }

        self.state.clear_status();
        if self.mix_screen.handle_key(key, &mut self.state) == EventResult::Exit {
            self.state.exit = true;
        }
    }
}
