use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{LookupError, WeatherReport, source::WeatherSource};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Client for the OpenWeather current-weather endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different host. Tests use this to talk to a
    /// local stub server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, LookupError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        tracing::debug!("requesting current weather for {city:?}");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(LookupError::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(LookupError::Transport)?;

        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::CityNotFound(city.to_string()));
        }
        if !status.is_success() {
            tracing::warn!(
                "OpenWeather request failed with status {status}: {}",
                truncate_body(&body),
            );
            return Err(LookupError::Unavailable(status));
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body).map_err(|err| {
            tracing::warn!("failed to parse OpenWeather JSON: {err}");
            LookupError::MalformedResponse(err.to_string())
        })?;

        // A success body with an empty conditions array is incomplete, not
        // renderable; treat it like any other malformed response.
        let current = parsed.weather.into_iter().next().ok_or_else(|| {
            LookupError::MalformedResponse("response contained no weather conditions".to_string())
        })?;

        let observation_time =
            DateTime::<Utc>::from_timestamp(parsed.dt, 0).unwrap_or_else(Utc::now);

        Ok(WeatherReport {
            location_name: parsed.name,
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            condition: current.description,
            icon: current.icon,
            observation_time,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
