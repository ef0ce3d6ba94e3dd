use thiserror::Error;

/// Expected failure modes of a weather lookup.
///
/// The `Display` strings are shown to the user verbatim, so transport and
/// parse variants stay deliberately generic; details live in the source
/// error and the logs.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("City \"{0}\" not found")]
    CityNotFound(String),

    /// Provider answered with a non-success status other than 404.
    #[error("Weather data is currently unavailable")]
    Unavailable(reqwest::StatusCode),

    /// The request never completed: connection error, timeout, or an
    /// unreadable response body.
    #[error("Failed to fetch weather data")]
    Transport(#[source] reqwest::Error),

    /// Provider reported success but the body did not contain the expected
    /// fields.
    #[error("Failed to fetch weather data")]
    MalformedResponse(String),
}
