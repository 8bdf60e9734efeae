//! trip-mate - A terminal client for the Trip Mate trip-planning service
//!
//! This library provides both CLI and TUI interfaces for submitting
//! trip-planning queries and displaying the answers as sanitized HTML or
//! styled terminal text.

pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod query;
pub mod render;
pub mod tui;

pub use error::{Result, TripMateError};
