//! Server-rendered dashboard page.
//!
//! The page is a pure function of a [`DashboardView`]: the sidebar form is
//! always rendered with its default values, the map receives the deck
//! description as embedded JSON, and the cards are laid out in the grid the
//! card renderer produced.

use domain::models::alert::{
    AlertStatus, DEFAULT_RADIUS_METERS, REFERENCE_LATITUDE, REFERENCE_LONGITUDE,
};
use domain::services::{Card, DashboardView};
use shared::html::{escape, escape_json_for_script};
use shared::validation::{MAX_RADIUS_METERS, MIN_RADIUS_METERS};

use crate::config::DashboardConfig;

/// One-shot message shown above the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flash {
    Success(String),
    Error(String),
}

const STYLES: &str = r#"
body { margin: 0; font-family: "Source Sans Pro", system-ui, sans-serif; color: #262730; }
.layout { display: flex; min-height: 100vh; }
.sidebar { width: 300px; padding: 2rem 1.5rem; background: #f0f2f6; box-sizing: border-box; }
.sidebar label { display: block; margin-top: 1rem; font-size: 0.875rem; }
.sidebar input, .sidebar select { width: 100%; margin-top: 0.25rem; padding: 0.4rem; box-sizing: border-box; }
.sidebar button { margin-top: 1.5rem; padding: 0.5rem 1rem; }
.main { flex: 1; padding: 2rem 3rem; }
#map { position: relative; height: 500px; background: #1e1e1e; }
.flash { padding: 1rem; border-radius: 0.5rem; margin-bottom: 1rem; }
.flash.success { background: #dff5e3; color: #17692b; }
.flash.error { background: #ffe2e0; color: #8a1c12; }
.cards { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.card { padding: 1rem; border-radius: 0.5rem; margin-bottom: 1rem; background: #e6f0fb; color: #0b4a8b; }
"#;

const MAP_SCRIPT: &str = r#"
(function () {
  var description = JSON.parse(document.getElementById("deck-spec").textContent);
  delete description.tooltip;
  var converter = new deck.JSONConverter({
    configuration: new deck.JSONConfiguration({ classes: deck })
  });
  var props = converter.convert(description);
  if (window.mapboxgl) {
    mapboxgl.accessToken = document.getElementById("map").dataset.token;
  } else {
    delete props.mapStyle;
  }
  new deck.DeckGL(Object.assign({
    container: "map",
    controller: true,
    getTooltip: function (info) {
      return info.object ? { text: info.object.tooltip } : null;
    }
  }, props));
})();
"#;

fn render_flash(flash: Option<&Flash>) -> String {
    match flash {
        Some(Flash::Success(message)) => {
            format!(r#"<div class="flash success">{}</div>"#, escape(message))
        }
        Some(Flash::Error(message)) => {
            format!(r#"<div class="flash error">{}</div>"#, escape(message))
        }
        None => String::new(),
    }
}

fn render_form() -> String {
    let options: String = AlertStatus::ALL
        .iter()
        .map(|status| format!(r#"<option value="{0}">{0}</option>"#, status.as_str()))
        .collect();

    format!(
        r#"<h2>🚨 Report New Activity</h2>
<form method="post" action="/alerts">
  <label>Alert Title (e.g., Soil Erosion)<input type="text" name="name" value=""></label>
  <label>Status<select name="status">{options}</select></label>
  <label>Latitude<input type="number" name="latitude" value="{lat:.4}" step="0.0001"></label>
  <label>Longitude<input type="number" name="longitude" value="{lon:.4}" step="0.0001"></label>
  <label>Impact Radius (meters): <output id="radius-value">{radius}</output>
    <input type="range" name="radius" min="{min}" max="{max}" value="{radius}" step="1"
      oninput="document.getElementById('radius-value').value = this.value">
  </label>
  <button type="submit">Submit to Pulse Map</button>
</form>"#,
        options = options,
        lat = REFERENCE_LATITUDE,
        lon = REFERENCE_LONGITUDE,
        radius = DEFAULT_RADIUS_METERS,
        min = MIN_RADIUS_METERS,
        max = MAX_RADIUS_METERS,
    )
}

fn render_card(card: &Card) -> String {
    format!(
        r#"<div class="card" data-index="{index}">{glyph} <strong>{name}</strong><p>{status}</p></div>"#,
        index = card.index,
        glyph = card.glyph,
        name = escape(&card.name),
        status = escape(&card.status_line()),
    )
}

fn render_cards(view: &DashboardView) -> String {
    view.cards
        .columns
        .iter()
        .enumerate()
        .map(|(column, cards)| {
            let body: String = cards.iter().map(render_card).collect();
            format!(r#"<div class="column" data-column="{}">{}</div>"#, column, body)
        })
        .collect()
}

fn render_map_scripts(config: &DashboardConfig) -> String {
    let mut scripts = format!(
        r#"<script src="{}"></script><script src="{}"></script>"#,
        escape(&config.deck_script_url),
        escape(&config.deck_json_script_url)
    );
    if !config.mapbox_token.is_empty() {
        scripts.push_str(&format!(
            r#"<script src="{}"></script>"#,
            escape(&config.mapbox_script_url)
        ));
    }
    scripts
}

/// Renders the complete HTML page.
pub fn render_dashboard_page(
    view: &DashboardView,
    flash: Option<&Flash>,
    config: &DashboardConfig,
) -> Result<String, serde_json::Error> {
    let deck_json = escape_json_for_script(&serde_json::to_string(&view.map)?);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{styles}</style>
{map_scripts}
</head>
<body>
<div class="layout">
<aside class="sidebar">{form}</aside>
<main class="main">
{flash}
<h1>{heading}</h1>
<p><strong>{headline}</strong></p>
<div id="map" data-token="{token}"></div>
<script id="deck-spec" type="application/json">{deck_json}</script>
<script>{map_script}</script>
<hr>
<div class="cards">{cards}</div>
</main>
</div>
</body>
</html>
"#,
        title = escape(view.title),
        styles = STYLES,
        map_scripts = render_map_scripts(config),
        form = render_form(),
        flash = render_flash(flash),
        heading = escape(view.heading),
        headline = escape(&view.headline),
        token = escape(&config.mapbox_token),
        deck_json = deck_json,
        map_script = MAP_SCRIPT,
        cards = render_cards(view),
    ))
}
