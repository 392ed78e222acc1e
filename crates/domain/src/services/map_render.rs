//! Geospatial scatter overlay.
//!
//! Produces a deck.gl description in the JSON-converter format (`@@type`
//! class names and `@@=` accessor expressions), so the page can hand it to
//! `deck.JSONConverter` unchanged.

use serde::Serialize;

use crate::models::alert::{Alert, REFERENCE_LATITUDE, REFERENCE_LONGITUDE};

/// Default basemap.
pub const DEFAULT_MAP_STYLE: &str = "mapbox://styles/mapbox/dark-v10";

/// Tooltip template, interpolated per hovered marker.
pub const TOOLTIP_TEMPLATE: &str = "{name}\nStatus: {status}";

const LAYER_ID: &str = "alert-zones";

/// Fixed camera. The map never auto-fits to the data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
}

impl ViewState {
    /// Torrington center, zoom 13, tilted 45 degrees.
    pub const TORRINGTON: ViewState = ViewState {
        latitude: REFERENCE_LATITUDE,
        longitude: REFERENCE_LONGITUDE,
        zoom: 13.0,
        pitch: 45.0,
    };
}

/// One plotted alert with its hover text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    #[serde(flatten)]
    pub alert: Alert,
    pub tooltip: String,
}

/// One `ScatterplotLayer`, one circle per alert.
///
/// The outline keeps deck's default line color so it stays visible against
/// the fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterplotLayer {
    #[serde(rename = "@@type")]
    pub layer_type: &'static str,
    pub id: &'static str,
    pub data: Vec<Marker>,
    pub get_position: &'static str,
    pub get_fill_color: &'static str,
    pub get_radius: &'static str,
    pub radius_units: &'static str,
    pub pickable: bool,
    pub opacity: f64,
    pub stroked: bool,
    pub filled: bool,
}

impl ScatterplotLayer {
    fn for_alerts(alerts: &[Alert], tooltip: &Tooltip) -> Self {
        let data = alerts
            .iter()
            .map(|alert| Marker {
                alert: alert.clone(),
                tooltip: tooltip.interpolate(alert),
            })
            .collect();

        Self {
            layer_type: "ScatterplotLayer",
            id: LAYER_ID,
            data,
            get_position: "@@=[lon, lat]",
            get_fill_color: "@@=color",
            get_radius: "@@=radius",
            radius_units: "meters",
            pickable: true,
            opacity: 0.6,
            stroked: true,
            filled: true,
        }
    }
}

/// Hover tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub text: String,
}

impl Tooltip {
    /// Fills the template with an alert's name and status.
    ///
    /// Single pass over the template: placeholders that appear inside the
    /// substituted values are left as they are.
    pub fn interpolate(&self, alert: &Alert) -> String {
        let mut out = String::with_capacity(self.text.len() + alert.name().len());
        let mut rest = self.text.as_str();

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            if let Some(after) = tail.strip_prefix("{name}") {
                out.push_str(alert.name());
                rest = after;
            } else if let Some(after) = tail.strip_prefix("{status}") {
                out.push_str(alert.status().as_str());
                rest = after;
            } else {
                out.push('{');
                rest = &tail[1..];
            }
        }

        out.push_str(rest);
        out
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            text: TOOLTIP_TEMPLATE.to_string(),
        }
    }
}

/// Complete deck description for the map panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSpec {
    pub initial_view_state: ViewState,
    pub layers: Vec<ScatterplotLayer>,
    pub map_style: String,
    pub tooltip: Tooltip,
}

impl DeckSpec {
    /// Number of markers drawn across all layers.
    pub fn marker_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.data.len()).sum()
    }
}

/// Renders every alert as a marker over the fixed Torrington view.
pub fn render_map(alerts: &[Alert], map_style: &str) -> DeckSpec {
    let tooltip = Tooltip::default();
    DeckSpec {
        initial_view_state: ViewState::TORRINGTON,
        layers: vec![ScatterplotLayer::for_alerts(alerts, &tooltip)],
        map_style: map_style.to_string(),
        tooltip,
    }
}
