use std::fmt::Debug;

use async_trait::async_trait;

use crate::{LookupError, LookupOutcome, WeatherReport};

/// Abstraction over the external weather provider.
///
/// Implementations perform exactly one outbound request per call: no
/// retries, no caching, no timeout beyond the transport default.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Fetch current weather for a city.
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, LookupError>;

    /// Run one lookup, folding every expected failure into a user-visible
    /// `Failure` message. Expected errors never cross this boundary.
    async fn lookup(&self, city: &str) -> LookupOutcome {
        match self.current_weather(city).await {
            Ok(report) => LookupOutcome::Success(report),
            Err(err) => {
                tracing::debug!("lookup for {city:?} failed: {err:?}");
                LookupOutcome::Failure(err.to_string())
            }
        }
    }
}
