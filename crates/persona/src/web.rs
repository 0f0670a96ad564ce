//! Web entry point using ratzilla.
//!
//! Renders the same mix editor as the terminal build into the browser and
//! persists the target mix to LocalStorage.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use ratatui::Terminal;
use ratatui::layout::{Constraint, Direction, Layout};
use ratzilla::event::KeyEvent as RatzillaKeyEvent;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::prelude::*;

use crate::components::{Component, status_bar::StatusBar};
use crate::config::AppConfig;
use crate::event::AppKeyEvent;
use crate::platform::WebStorage;
use crate::screens::mix::MixScreen;
use crate::state::EditorState;

/// How long a confirmation stays in the status bar
const STATUS_FLASH_MS: u32 = 2_500;

struct WebApp {
    state: EditorState,
    status_bar: StatusBar,
    mix_screen: MixScreen,
    /// Bumped for every status message so a stale timer does not clear a newer one
    status_generation: u32,
}

impl WebApp {
    fn new(state: EditorState) -> Self {
        Self {
            state,
            status_bar: StatusBar::new(),
            mix_screen: MixScreen::new(),
            status_generation: 0,
        }
    }

    /// Handle a key event, returning the generation of a new status message if one was set.
    fn handle_key(&mut self, key: AppKeyEvent) -> Option<u32> {
        if key.is_quit() {
            // Nothing to exit to in a browser tab
            tracing::info!("Exit requested");
            return None;
        }

        self.state.clear_status();
        self.mix_screen.handle_key(key, &mut self.state);

        self.state.status_message.as_ref().map(|_| {
            self.status_generation = self.status_generation.wrapping_add(1);
            self.status_generation
        })
    }

    fn clear_status_if_current(&mut self, generation: u32) {
        if self.status_generation == generation {
            self.state.clear_status();
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.mix_screen.render(frame, chunks[0], &self.state);
        self.status_bar.render(frame, chunks[1], &self.state);
    }
}

/// Keep arrow keys from scrolling the page while the editor has focus.
fn setup_prevent_default() -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
        if matches!(
            event.key().as_str(),
            "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight"
        ) {
            event.prevent_default();
        }
    });

    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;

    // Prevent the closure from being dropped
    closure.forget();
    Ok(())
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    crate::init_logging_web();

    tracing::info!("Persona mix editor starting");

    setup_prevent_default()?;

    let state = EditorState::load(Box::new(WebStorage::new()), &AppConfig::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let app = Rc::new(RefCell::new(WebApp::new(state)));

    let backend = DomBackend::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let terminal: Terminal<DomBackend> =
        Terminal::new(backend).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let app_clone = Rc::clone(&app);
    terminal.on_key_event(move |key_event: RatzillaKeyEvent| {
        let generation = app_clone.borrow_mut().handle_key(key_event.into());
        if let Some(generation) = generation {
            let app = Rc::clone(&app_clone);
            Timeout::new(STATUS_FLASH_MS, move || {
                app.borrow_mut().clear_status_if_current(generation);
            })
            .forget();
        }
    });

    terminal.draw_web(move |frame| {
        app.borrow_mut().draw(frame);
    });

    Ok(())
}
