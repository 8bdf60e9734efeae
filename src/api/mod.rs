//! Trip Mate server integration
//!
//! This module provides the HTTP client for:
//! - Submitting trip-planning queries
//! - Checking server health

pub mod client;

pub use client::{HealthStatus, QueryBackend, TripMateClient};
