//! Interactive probability distribution explorer
//!
//! A ratatui front end over `probviz_core`: pick a distribution, drag its
//! parameter sliders with the keyboard and watch the density chart update.
//! Runs in a terminal (`native` feature) or in the browser through ratzilla
//! (`web` feature).

// ============================================================================
// UI modules
// ============================================================================

pub mod components;
pub mod event;
pub mod screens;
pub mod state;
pub mod ui;
pub mod util;

// ============================================================================
// Configuration modules
// ============================================================================

pub mod data;
pub mod keybindings;
mod logging;

// ============================================================================
// Platform entry points
// ============================================================================

#[cfg(feature = "native")]
mod app;

#[cfg(feature = "web")]
mod web;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

#[cfg(feature = "native")]
pub use app::App;
#[cfg(feature = "native")]
pub use logging::init_logging;
#[cfg(feature = "web")]
pub use logging::init_logging_web;
