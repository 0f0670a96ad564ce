//! Platform-agnostic keyboard events.
//!
//! The mix editor reacts to the same keys on both front ends:
//! - Native: crossterm::event::KeyEvent
//! - Web: ratzilla::event::KeyEvent

/// Re-exported from crossterm on native, from ratzilla on web.
#[cfg(feature = "native")]
pub use crossterm::event::KeyCode;

#[cfg(all(feature = "web", not(feature = "native")))]
pub use ratzilla::event::KeyCode;

/// Key press with its modifiers, independent of the backend
#[derive(Debug, Clone)]
pub struct AppKeyEvent {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl AppKeyEvent {
    /// Plain key without modifiers
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    pub fn with_ctrl(code: KeyCode) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(code)
        }
    }

    pub fn ctrl(&self) -> bool {
        self.ctrl
    }

    /// Check if no modifiers are pressed.
    ///
    /// Shift is ignored so that `H`/`L` still count as plain letters.
    pub fn no_modifiers(&self) -> bool {
        !self.ctrl && !self.alt
    }

    /// `q` or Ctrl+C
    pub fn is_quit(&self) -> bool {
        match self.code {
            KeyCode::Char('q') => self.no_modifiers(),
            KeyCode::Char('c') => self.ctrl,
            _ => false,
        }
    }
}

#[cfg(feature = "native")]
impl From<crossterm::event::KeyEvent> for AppKeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            code: event.code,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        }
    }
}

#[cfg(all(feature = "web", not(feature = "native")))]
impl From<ratzilla::event::KeyEvent> for AppKeyEvent {
    fn from(event: ratzilla::event::KeyEvent) -> Self {
        Self {
            code: event.code,
            ctrl: event.ctrl,
            alt: event.alt,
            shift: event.shift,
        }
    }
}
