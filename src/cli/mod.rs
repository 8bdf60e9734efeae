//! CLI module for trip-mate
//!
//! This module contains all CLI command definitions and handlers using clap.

pub mod ask;
pub mod commands;
pub mod config;
pub mod health;

pub use commands::{Cli, Commands};
