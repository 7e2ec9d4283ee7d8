//! The weather widget: one request, one render, one terminal view state.

use std::fmt;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::{
    codes,
    model::{Coordinates, WeatherReading},
    provider::WeatherProvider,
    surface::{Region, Surface},
};

/// Which of the three containers is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewState {
    Loading,
    Content,
    Error,
}

impl ViewState {
    /// The container that is visible in this state.
    pub fn container(&self) -> Region {
        match self {
            ViewState::Loading => Region::Loading,
            ViewState::Content => Region::Content,
            ViewState::Error => Region::Error,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ViewState::Loading)
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViewState::Loading => "loading",
            ViewState::Content => "content",
            ViewState::Error => "error",
        };
        f.write_str(s)
    }
}

/// Owns a [`Surface`] and drives it from Loading to either Content or Error.
#[derive(Debug)]
pub struct WeatherWidget<S: Surface> {
    surface: S,
    state: ViewState,
}

impl<S: Surface> WeatherWidget<S> {
    /// The widget always reports on this location.
    pub const LOCATION: Coordinates = Coordinates::ATLANTA;

    pub fn new(surface: S) -> Self {
        let mut widget = Self {
            surface,
            state: ViewState::Loading,
        };
        widget.show(ViewState::Loading);
        widget
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Fetch once and render the outcome. Returns the resulting state.
    ///
    /// Every failure renders the same error view; the cause only goes to the
    /// log. Once the widget has left Loading this is a no-op.
    pub async fn load(&mut self, provider: &dyn WeatherProvider) -> ViewState {
        if self.state.is_terminal() {
            warn!("weather widget already settled in {} state", self.state);
            return self.state;
        }

        match provider.current_weather(Self::LOCATION).await {
            Ok(reading) => self.render(&reading),
            Err(err) => {
                warn!(error = ?err, "weather unavailable: {err}");
                self.show(ViewState::Error);
            }
        }

        info!("weather widget settled in {} state", self.state);
        self.state
    }

    fn render(&mut self, reading: &WeatherReading) {
        self.surface
            .set_text(Region::Temperature, &render_temperature(reading.temperature));
        self.surface
            .set_text(Region::Condition, codes::describe(reading.weather_code));
        self.surface
            .set_text(Region::Wind, &render_wind(reading.wind_speed));
        self.show(ViewState::Content);
    }

    /// Make `state`'s container the only visible one.
    fn show(&mut self, state: ViewState) {
        for container in Region::containers() {
            self.surface
                .set_visible(*container, *container == state.container());
        }
        self.state = state;
    }
}

impl<S: Surface + 'static> WeatherWidget<S> {
    /// Start the single fetch/render cycle in the background and return
    /// immediately. Await the handle to get the settled widget back.
    pub fn initialize(self, provider: Box<dyn WeatherProvider>) -> JoinHandle<Self> {
        let mut widget = self;
        tokio::spawn(async move {
            widget.load(provider.as_ref()).await;
            widget
        })
    }
}

/// `21.6` -> `"22°C"`.
pub fn render_temperature(celsius: f64) -> String {
    format!("{}°C", round(celsius))
}

/// `14.2` -> `"Wind: 14 km/h"`.
pub fn render_wind(kmh: f64) -> String {
    format!("Wind: {} km/h", round(kmh))
}

/// Round half away from zero. The cast folds `-0.0` into `0`.
fn round(value: f64) -> i64 {
    value.round() as i64
}
