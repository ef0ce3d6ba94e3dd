use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Host serving the provider's condition icon assets.
const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Normalized result of one successful lookup.
///
/// Immutable once constructed: a new lookup replaces the whole report,
/// fields are never patched individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Location name as normalized by the provider (may differ from the query).
    pub location_name: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    /// Short condition description, e.g. "clear sky".
    pub condition: String,
    /// Provider icon identifier, e.g. "01d".
    pub icon: String,
    pub observation_time: DateTime<Utc>,
}

impl WeatherReport {
    /// URL of the provider-hosted icon image for this report.
    pub fn icon_url(&self) -> String {
        format!("{ICON_BASE_URL}/{}@2x.png", self.icon)
    }
}

/// Terminal outcome of one lookup.
///
/// Exactly one variant per completed lookup; `Failure` carries the
/// user-visible message, not an internal error.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Success(WeatherReport),
    Failure(String),
}
