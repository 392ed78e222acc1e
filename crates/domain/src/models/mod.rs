//! Domain models for the Eco-Pulse dashboard.

pub mod alert;

pub use alert::{Alert, AlertFormFields, AlertInput, AlertStatus, Rgba};
