//! Dashboard composition and the per-session render cycle.

use serde::Serialize;

use crate::error::DomainError;
use crate::models::alert::{Alert, AlertInput};
use crate::services::alert_form::{self, Submission};
use crate::services::card_render::{render_cards, CardGrid};
use crate::services::map_render::{render_map, DeckSpec};
use crate::store::AlertStore;

/// Browser page title.
pub const PAGE_TITLE: &str = "Torrington Eco Zoning";

/// Main panel heading.
pub const DASHBOARD_HEADING: &str = "🌍 Torrington Eco-Pulse";

/// Everything the main panel shows, derived from the alert slice alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    pub heading: &'static str,
    pub headline: String,
    pub zone_count: usize,
    pub map: DeckSpec,
    pub cards: CardGrid,
}

impl DashboardView {
    pub fn render(alerts: &[Alert], map_style: &str) -> Self {
        Self {
            title: PAGE_TITLE,
            heading: DASHBOARD_HEADING,
            headline: format!(
                "Tracking {} active environmental zones in Torrington, CT.",
                alerts.len()
            ),
            zone_count: alerts.len(),
            map: render_map(alerts, map_style),
            cards: render_cards(alerts),
        }
    }
}

/// One session's dashboard: the alert store plus its current view.
///
/// The store is only reachable mutably through [`Dashboard::submit`], which
/// re-renders the view after every append.
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: AlertStore,
    map_style: String,
    view: DashboardView,
}

impl Dashboard {
    /// Starts a session from the seed alerts.
    pub fn new(map_style: impl Into<String>) -> Self {
        Self::with_store(AlertStore::seeded(), map_style)
    }

    pub fn with_store(store: AlertStore, map_style: impl Into<String>) -> Self {
        let map_style = map_style.into();
        let view = DashboardView::render(store.all(), &map_style);
        Self {
            store,
            map_style,
            view,
        }
    }

    /// Appends the submitted alert and re-renders.
    pub fn submit(&mut self, input: AlertInput) -> Result<Submission, DomainError> {
        let submission = alert_form::submit(&mut self.store, input)?;
        self.view = DashboardView::render(self.store.all(), &self.map_style);
        Ok(submission)
    }

    pub fn alerts(&self) -> &[Alert] {
        self.store.all()
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }
}
