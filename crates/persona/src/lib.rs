//! Persona mix planner application
//!
//! Wraps `persona_core` with everything around the calculations:
//! - Bundled persona and creative brief fixtures
//! - Target mix persistence (filesystem, LocalStorage or memory)
//! - The mix editor, rendered in a terminal or in the browser
//! - CLI reports, exports and the scripted assistant

// ============================================================================
// Shared modules (native and web)
// ============================================================================

pub mod assistant;
pub mod components;
pub mod config;
pub mod data;
pub mod event;
pub mod mix_state;
pub mod platform;
pub mod report;
pub mod screens;
pub mod state;
pub mod util;

// ============================================================================
// Native-only modules
// ============================================================================

#[cfg(feature = "native")]
mod app;
#[cfg(feature = "native")]
pub mod cli;
#[cfg(feature = "native")]
mod logging;

#[cfg(feature = "native")]
pub use app::App;
#[cfg(feature = "native")]
pub use logging::init_logging;

// ============================================================================
// Web-only modules
// ============================================================================

#[cfg(all(feature = "web", not(feature = "native")))]
mod web;

/// Route `tracing` output to the browser console
#[cfg(feature = "web")]
pub fn init_logging_web() {
    tracing_wasm::set_as_global_default();
}

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;
