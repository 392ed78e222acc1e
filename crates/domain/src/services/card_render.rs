//! Summary card grid.

use serde::Serialize;

use crate::models::alert::{Alert, AlertStatus};

/// Number of grid columns.
pub const CARD_COLUMNS: usize = 3;

/// Card icon.
///
/// Only urgent alerts get the red icon; every other status is blue, unlike
/// the four-color map palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardIcon {
    RedCircle,
    BlueCircle,
}

impl CardIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            CardIcon::RedCircle => "🔴",
            CardIcon::BlueCircle => "🔵",
        }
    }
}

pub fn icon_for(status: AlertStatus) -> CardIcon {
    if status == AlertStatus::Urgent {
        CardIcon::RedCircle
    } else {
        CardIcon::BlueCircle
    }
}

/// One summary card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    /// Position of the alert in the store.
    pub index: usize,
    pub icon: CardIcon,
    pub glyph: &'static str,
    pub name: String,
    pub status: AlertStatus,
}

impl Card {
    /// Status line shown under the name.
    pub fn status_line(&self) -> String {
        format!("Status: {}", self.status)
    }
}

/// Cards laid out column by column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardGrid {
    pub columns: Vec<Vec<Card>>,
}

impl CardGrid {
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// Column holding the card for store position `index`, if any.
    pub fn column_of(&self, index: usize) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.iter().any(|card| card.index == index))
    }
}

/// Assigns alert `i` to column `i mod 3`, keeping store order per column.
pub fn render_cards(alerts: &[Alert]) -> CardGrid {
    let mut columns: Vec<Vec<Card>> = vec![Vec::new(); CARD_COLUMNS];

    for (index, alert) in alerts.iter().enumerate() {
        let icon = icon_for(alert.status());
        columns[index % CARD_COLUMNS].push(Card {
            index,
            icon,
            glyph: icon.glyph(),
            name: alert.name().to_string(),
            status: alert.status(),
        });
    }

    CardGrid { columns }
}
