//! Domain services for the Eco-Pulse dashboard.
//!
//! Renderers are pure functions of the current alert slice; only
//! [`alert_form::submit`] mutates a store.

pub mod alert_form;
pub mod card_render;
pub mod dashboard;
pub mod map_render;
pub mod status_color;

pub use alert_form::{submit, Submission, SUCCESS_MESSAGE};
pub use card_render::{icon_for, render_cards, Card, CardGrid, CardIcon, CARD_COLUMNS};
pub use dashboard::{Dashboard, DashboardView, DASHBOARD_HEADING, PAGE_TITLE};
pub use map_render::{
    render_map, DeckSpec, Marker, ScatterplotLayer, Tooltip, ViewState, DEFAULT_MAP_STYLE,
};
pub use status_color::{color_for, color_for_label};
