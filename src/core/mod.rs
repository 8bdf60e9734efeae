//! Core functionality for trip-mate
//!
//! This module contains shared settings logic:
//! - Application configuration
//! - Endpoint resolution

pub mod config;

pub use config::Config;
