//! Core library for the `weather-widget` tool.
//!
//! This crate defines:
//! - The weather-code classifier
//! - Abstraction over the weather provider (Open-Meteo)
//! - The widget state machine and the surface it renders onto
//! - Configuration handling
//!
//! It is used by `weather-widget`, but any other front end can drive a
//! [`WeatherWidget`] with its own [`Surface`].

pub mod codes;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod surface;
pub mod widget;

pub use config::Config;
pub use error::DisplayFailure;
pub use model::{Coordinates, WeatherReading};
pub use provider::{WeatherProvider, provider_from_config};
pub use surface::{Panel, Region, Surface};
pub use widget::{ViewState, WeatherWidget};
