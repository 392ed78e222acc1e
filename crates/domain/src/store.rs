//! Session-scoped, append-only alert store.

use crate::models::alert::{Alert, AlertStatus};

/// Ordered collection of alerts for one session.
///
/// There is no update or delete; `all()` always returns alerts in insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertStore {
    alerts: Vec<Alert>,
}

impl AlertStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the three Torrington seed alerts.
    pub fn seeded() -> Self {
        Self {
            alerts: seed_alerts(),
        }
    }

    pub fn append(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }

    pub fn all(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}

/// Alerts every new session starts with.
pub fn seed_alerts() -> Vec<Alert> {
    vec![
        Alert::new(
            "Wetland Filling (Naugatuck River)",
            AlertStatus::Urgent,
            41.8006,
            -73.1212,
            400,
        ),
        Alert::new(
            "Unauthorized Clearing",
            AlertStatus::Watching,
            41.8150,
            -73.1350,
            250,
        ),
        Alert::new(
            "Runoff Near Burr Pond",
            AlertStatus::Active,
            41.8300,
            -73.1000,
            600,
        ),
    ]
}
