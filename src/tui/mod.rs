//! Terminal User Interface module
//!
//! This module contains the ratatui-based TUI: a single screen with the
//! query input, the submit control and the results region.

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
