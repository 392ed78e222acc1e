//! Status to marker color lookup.

use crate::error::DomainError;
use crate::models::alert::{AlertStatus, Rgba};

/// Fill color for a status.
pub fn color_for(status: AlertStatus) -> Rgba {
    match status {
        AlertStatus::Urgent => Rgba::new(255, 0, 0, 150),
        AlertStatus::Active => Rgba::new(0, 0, 255, 150),
        AlertStatus::Watching => Rgba::new(255, 165, 0, 150),
        AlertStatus::Resolved => Rgba::new(0, 255, 0, 150),
    }
}

/// Fill color for a raw status label.
///
/// Fails with [`DomainError::UnknownStatus`] for labels outside the
/// enumeration.
pub fn color_for_label(label: &str) -> Result<Rgba, DomainError> {
    label.parse::<AlertStatus>().map(color_for)
}
