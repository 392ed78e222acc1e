//! "Report New Activity" form submission.

use tracing::info;
use validator::Validate;

use crate::error::DomainError;
use crate::models::alert::{Alert, AlertInput};
use crate::store::AlertStore;

/// Acknowledgement shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Alert added to the map!";

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// The alert as stored.
    pub alert: Alert,
    /// Position of the alert in the store.
    pub index: usize,
    pub message: &'static str,
}

/// Validates `input`, builds the alert and appends it to `store`.
///
/// The store is left untouched when validation fails.
pub fn submit(store: &mut AlertStore, input: AlertInput) -> Result<Submission, DomainError> {
    input.validate()?;

    let alert = Alert::from(input);
    let index = store.len();
    store.append(alert.clone());

    info!(
        index = index,
        status = %alert.status(),
        radius = alert.radius(),
        "Alert submitted"
    );

    Ok(Submission {
        alert,
        index,
        message: SUCCESS_MESSAGE,
    })
}
