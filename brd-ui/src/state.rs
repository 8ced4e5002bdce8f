//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use brd_core::input::PredictionInput;
use brd_model::ModelArtifact;
use dioxus::prelude::*;

/// Shared application state for the demand dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded model artifact (None until the mount effect parses it)
    pub model: Signal<Option<ModelArtifact>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Season code (1-4)
    pub season: Signal<u8>,
    /// Month (1-12)
    pub month: Signal<u8>,
    /// Hour of day (0-23)
    pub hour: Signal<u8>,
    /// Holiday flag
    pub holiday: Signal<bool>,
    /// Weekday (0-6, Sunday first)
    pub weekday: Signal<u8>,
    /// Working day flag
    pub working_day: Signal<bool>,
    /// Weather situation code (1-4)
    pub weather_situation: Signal<u8>,
    /// Air temperature in degrees C
    pub temperature: Signal<f64>,
    /// Perceived temperature in degrees C
    pub feels_like: Signal<f64>,
    /// Relative humidity in percent
    pub humidity: Signal<f64>,
    /// Wind speed in km/h
    pub windspeed: Signal<f64>,
}

impl AppState {
    /// Create a new AppState with the dashboard's default control values.
    pub fn new() -> Self {
        let defaults = PredictionInput::default();
        Self {
            model: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            season: Signal::new(defaults.season),
            month: Signal::new(defaults.month),
            hour: Signal::new(defaults.hour),
            holiday: Signal::new(defaults.holiday),
            weekday: Signal::new(defaults.weekday),
            working_day: Signal::new(defaults.working_day),
            weather_situation: Signal::new(defaults.weather_situation),
            temperature: Signal::new(defaults.temperature),
            feels_like: Signal::new(defaults.feels_like_temperature),
            humidity: Signal::new(defaults.humidity),
            windspeed: Signal::new(defaults.windspeed),
        }
    }

    /// Snapshot the current control values as a prediction input.
    ///
    /// Reads every input signal, so calling this inside an effect makes
    /// the effect re-run whenever any control changes.
    pub fn input(&self) -> PredictionInput {
        PredictionInput {
            season: (self.season)(),
            month: (self.month)(),
            hour: (self.hour)(),
            holiday: (self.holiday)(),
            weekday: (self.weekday)(),
            working_day: (self.working_day)(),
            weather_situation: (self.weather_situation)(),
            temperature: (self.temperature)(),
            feels_like_temperature: (self.feels_like)(),
            humidity: (self.humidity)(),
            windspeed: (self.windspeed)(),
        }
    }
}
