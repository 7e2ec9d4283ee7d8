use serde::{Deserialize, Serialize};

/// A fixed point on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Atlanta, GA. The only location the widget ever reports on.
    pub const ATLANTA: Coordinates = Coordinates {
        latitude: 33.7490,
        longitude: -84.3880,
    };
}

/// Snapshot of conditions "now" as decoded from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Degrees Celsius.
    pub temperature: f64,
    /// WMO weather interpretation code.
    #[serde(rename = "weathercode")]
    pub weather_code: i64,
    /// Kilometres per hour.
    #[serde(rename = "windspeed")]
    pub wind_speed: f64,
}
