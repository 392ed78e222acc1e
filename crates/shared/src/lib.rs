//! Shared utilities for the Eco-Pulse dashboard.
//!
//! This crate provides common functionality used across the other crates:
//! - Coordinate and widget-bound validation helpers
//! - HTML escaping for server-rendered markup

pub mod html;
pub mod validation;
