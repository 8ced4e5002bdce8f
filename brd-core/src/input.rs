use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of features the regression model consumes.
pub const FEATURE_COUNT: usize = 11;

/// Feature names in vector order. Model artifacts index weights and split
/// thresholds by position in this list, so the order is a stable contract.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "season",
    "month",
    "hour",
    "holiday",
    "weekday",
    "working_day",
    "weather_situation",
    "temperature",
    "feels_like_temperature",
    "humidity",
    "windspeed",
];

/// Season display names (season codes 1-4).
pub const SEASON_LABELS: [&str; 4] = ["Spring", "Summer", "Fall", "Winter"];

/// Weekday display names (weekday codes 0-6, Sunday first).
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Weather situation display names (codes 1-4).
pub const WEATHER_LABELS: [&str; 4] = ["Clear", "Misty", "Light Rain", "Heavy Rain/Snow"];

/// A field value that fell outside its allowed range.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct InputError {
    pub field: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} is outside the allowed range {}..={}",
            self.field, self.value, self.min, self.max
        )
    }
}

impl std::error::Error for InputError {}

/// One set of conditions to predict hourly rental demand for.
///
/// Built fresh per interaction from form controls or CLI flags and
/// consumed once by the prediction call. Field ranges match the ranges
/// the controls offer; [`PredictionInput::validate`] enforces them for
/// inputs that arrive from elsewhere.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct PredictionInput {
    /// Season code: 1 = Spring .. 4 = Winter
    pub season: u8,
    /// Month: 1-12
    pub month: u8,
    /// Hour of day: 0-23
    pub hour: u8,
    /// Whether the day is a public holiday
    pub holiday: bool,
    /// Weekday: 0 = Sunday .. 6 = Saturday
    pub weekday: u8,
    /// Whether the day is a working day
    pub working_day: bool,
    /// Weather situation code: 1 = Clear .. 4 = Heavy Rain/Snow
    pub weather_situation: u8,
    /// Air temperature in degrees Celsius (-10 to 40)
    pub temperature: f64,
    /// Perceived temperature in degrees Celsius (-10 to 50)
    pub feels_like_temperature: f64,
    /// Relative humidity in percent (0-100)
    pub humidity: f64,
    /// Wind speed in km/h (0-100)
    pub windspeed: f64,
}

impl Default for PredictionInput {
    /// Defaults mirror the dashboard's initial control positions:
    /// a clear June noon on a working Tuesday.
    fn default() -> Self {
        PredictionInput {
            season: 2,
            month: 6,
            hour: 12,
            holiday: false,
            weekday: 2,
            working_day: true,
            weather_situation: 1,
            temperature: 20.0,
            feels_like_temperature: 22.0,
            humidity: 60.0,
            windspeed: 10.0,
        }
    }
}

impl PredictionInput {
    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), InputError> {
        check("season", self.season as f64, 1.0, 4.0)?;
        check("month", self.month as f64, 1.0, 12.0)?;
        check("hour", self.hour as f64, 0.0, 23.0)?;
        check("weekday", self.weekday as f64, 0.0, 6.0)?;
        check("weather_situation", self.weather_situation as f64, 1.0, 4.0)?;
        check("temperature", self.temperature, -10.0, 40.0)?;
        check(
            "feels_like_temperature",
            self.feels_like_temperature,
            -10.0,
            50.0,
        )?;
        check("humidity", self.humidity, 0.0, 100.0)?;
        check("windspeed", self.windspeed, 0.0, 100.0)?;
        Ok(())
    }

    /// Export the fields as a feature vector in [`FEATURE_NAMES`] order.
    /// Boolean fields become 0.0 / 1.0.
    pub fn feature_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.season as f64,
            self.month as f64,
            self.hour as f64,
            self.holiday as u8 as f64,
            self.weekday as f64,
            self.working_day as u8 as f64,
            self.weather_situation as f64,
            self.temperature,
            self.feels_like_temperature,
            self.humidity,
            self.windspeed,
        ]
    }

    /// Display name for the season code, or "?" for out-of-range codes.
    pub fn season_label(&self) -> &'static str {
        SEASON_LABELS
            .get(self.season.wrapping_sub(1) as usize)
            .copied()
            .unwrap_or("?")
    }

    /// Display name for the weekday code, or "?" for out-of-range codes.
    pub fn weekday_label(&self) -> &'static str {
        WEEKDAY_LABELS
            .get(self.weekday as usize)
            .copied()
            .unwrap_or("?")
    }

    /// Display name for the weather code, or "?" for out-of-range codes.
    pub fn weather_label(&self) -> &'static str {
        WEATHER_LABELS
            .get(self.weather_situation.wrapping_sub(1) as usize)
            .copied()
            .unwrap_or("?")
    }
}

fn check(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), InputError> {
    if value < min || value > max || !value.is_finite() {
        return Err(InputError {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
