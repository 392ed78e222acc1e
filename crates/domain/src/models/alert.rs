//! Alert domain model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::error::DomainError;
use crate::services::status_color::color_for;

/// Latitude of the Torrington, CT reference point.
pub const REFERENCE_LATITUDE: f64 = 41.8006;

/// Longitude of the Torrington, CT reference point.
pub const REFERENCE_LONGITUDE: f64 = -73.1212;

/// Default impact radius offered by the form, in meters.
pub const DEFAULT_RADIUS_METERS: u32 = 500;

/// Alert severity/state label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AlertStatus {
    #[default]
    Urgent,
    Active,
    Watching,
    Resolved,
}

impl AlertStatus {
    /// All statuses in dropdown order.
    pub const ALL: [AlertStatus; 4] = [
        AlertStatus::Urgent,
        AlertStatus::Active,
        AlertStatus::Watching,
        AlertStatus::Resolved,
    ];

    /// Display label, also used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Urgent => "Urgent",
            AlertStatus::Active => "Active",
            AlertStatus::Watching => "Watching",
            AlertStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlertStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::UnknownStatus(s.to_string()))
    }
}

/// Four-channel color, serialized as `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    pub fn channels(&self) -> [u8; 4] {
        self.0
    }
}

/// One environmental-zone record.
///
/// The color is fixed when the alert is built and there is no way to change
/// it (or the status) afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    name: String,
    status: AlertStatus,
    #[serde(rename = "lat")]
    latitude: f64,
    #[serde(rename = "lon")]
    longitude: f64,
    color: Rgba,
    radius: u32,
}

impl Alert {
    /// Builds an alert, deriving its color from the status.
    pub fn new(
        name: impl Into<String>,
        status: AlertStatus,
        latitude: f64,
        longitude: f64,
        radius: u32,
    ) -> Self {
        Self {
            name: name.into(),
            status,
            latitude,
            longitude,
            color: color_for(status),
            radius,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> AlertStatus {
        self.status
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Display radius in meters.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Marker position in `[lon, lat]` order.
    pub fn position(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

impl From<AlertInput> for Alert {
    fn from(input: AlertInput) -> Self {
        Alert::new(
            input.name,
            input.status,
            input.latitude,
            input.longitude,
            input.radius,
        )
    }
}

fn default_latitude() -> f64 {
    REFERENCE_LATITUDE
}

fn default_longitude() -> f64 {
    REFERENCE_LONGITUDE
}

fn default_radius() -> u32 {
    DEFAULT_RADIUS_METERS
}

/// Typed input of the "Report New Activity" form.
///
/// Every field has a default, so an empty submission is still valid.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct AlertInput {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub status: AlertStatus,

    #[serde(default = "default_latitude", alias = "lat")]
    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: f64,

    #[serde(default = "default_longitude", alias = "lon")]
    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: f64,

    #[serde(default = "default_radius")]
    #[validate(custom(function = "shared::validation::validate_radius"))]
    pub radius: u32,
}

impl Default for AlertInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            status: AlertStatus::default(),
            latitude: REFERENCE_LATITUDE,
            longitude: REFERENCE_LONGITUDE,
            radius: DEFAULT_RADIUS_METERS,
        }
    }
}

impl AlertInput {
    /// Builds and validates form input in one step.
    pub fn new(
        name: impl Into<String>,
        status: AlertStatus,
        latitude: f64,
        longitude: f64,
        radius: u32,
    ) -> Result<Self, DomainError> {
        let input = Self {
            name: name.into(),
            status,
            latitude,
            longitude,
            radius,
        };
        input.validate()?;
        Ok(input)
    }
}

/// Raw form fields as posted by the browser, before type coercion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertFormFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
    #[serde(default)]
    pub radius: String,
}

fn parse_field<T: FromStr>(field: &'static str, raw: &str, default: T) -> Result<T, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed.parse().map_err(|_| DomainError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

impl TryFrom<AlertFormFields> for AlertInput {
    type Error = DomainError;

    fn try_from(fields: AlertFormFields) -> Result<Self, Self::Error> {
        let status = if fields.status.trim().is_empty() {
            AlertStatus::default()
        } else {
            fields.status.trim().parse()?
        };

        AlertInput::new(
            fields.name,
            status,
            parse_field("latitude", &fields.latitude, REFERENCE_LATITUDE)?,
            parse_field("longitude", &fields.longitude, REFERENCE_LONGITUDE)?,
            parse_field("radius", &fields.radius, DEFAULT_RADIUS_METERS)?,
        )
    }
}
