//! Core library for the `weathernow` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The lookup service and its OpenWeather client
//! - Shared domain models (reports, outcomes)
//!
//! It is used by `weathernow-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod openweather;
pub mod source;

pub use config::Config;
pub use error::LookupError;
pub use model::{LookupOutcome, WeatherReport};
pub use openweather::OpenWeatherClient;
pub use source::WeatherSource;
