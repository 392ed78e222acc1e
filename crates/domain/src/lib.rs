//! Domain layer for the Eco-Pulse dashboard.
//!
//! This crate contains:
//! - Domain models (Alert, AlertStatus, Rgba, form input)
//! - The session-scoped append-only alert store
//! - Pure renderers for the map overlay, card grid and dashboard
//! - Domain error types

pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use error::DomainError;
pub use store::AlertStore;
