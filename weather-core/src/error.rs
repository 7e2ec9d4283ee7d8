use thiserror::Error;

/// Everything that can keep the widget from showing a reading.
///
/// The widget renders every variant the same way; the distinction only exists
/// for logs.
#[derive(Debug, Error)]
pub enum DisplayFailure {
    #[error("request to weather provider failed")]
    Request(#[source] reqwest::Error),

    #[error("weather provider responded with status {0}")]
    Status(u16),

    #[error("failed to decode weather provider response")]
    Decode(#[source] serde_json::Error),

    #[error("weather provider response has no `current_weather` field")]
    MissingCurrentWeather,
}
