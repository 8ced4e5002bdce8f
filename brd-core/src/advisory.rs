use crate::input::PredictionInput;
use serde::{Deserialize, Serialize};

/// Hours treated as commute peaks.
pub const PEAK_HOURS: [u8; 6] = [7, 8, 9, 17, 18, 19];

/// Temperature (degrees C) below which the cold advisory fires.
pub const COLD_TEMPERATURE_C: f64 = 5.0;

/// Weather situation codes at or above this count as adverse.
pub const ADVERSE_WEATHER_CODE: u8 = 3;

/// A contextual note derived directly from the raw input fields.
///
/// Advisories are independent boolean checks: any subset can apply to a
/// given input, and none depends on the predicted count or on another
/// advisory.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Advisory {
    AdverseWeather,
    Holiday,
    PeakCommute,
    ColdTemperature,
}

impl Advisory {
    /// All advisories, in display order.
    pub const ALL: [Advisory; 4] = [
        Advisory::AdverseWeather,
        Advisory::Holiday,
        Advisory::PeakCommute,
        Advisory::ColdTemperature,
    ];

    /// Whether this advisory applies to the given input.
    pub fn applies(self, input: &PredictionInput) -> bool {
        match self {
            Advisory::AdverseWeather => input.weather_situation >= ADVERSE_WEATHER_CODE,
            Advisory::Holiday => input.holiday,
            Advisory::PeakCommute => PEAK_HOURS.contains(&input.hour),
            Advisory::ColdTemperature => input.temperature < COLD_TEMPERATURE_C,
        }
    }

    /// Display text for the advisory.
    pub fn message(self) -> &'static str {
        match self {
            Advisory::AdverseWeather => "Weather may reduce rentals today.",
            Advisory::Holiday => {
                "Holiday: patterns may deviate from typical working day demand."
            }
            Advisory::PeakCommute => {
                "Peak commuting hour: expect higher demand near transit hubs."
            }
            Advisory::ColdTemperature => "Cold temperature may reduce rideability and demand.",
        }
    }

    /// Collect the advisories that apply to an input, in display order.
    pub fn for_input(input: &PredictionInput) -> Vec<Advisory> {
        Advisory::ALL
            .iter()
            .copied()
            .filter(|advisory| advisory.applies(input))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Advisory;
    use crate::input::PredictionInput;

    #[test]
    fn all_four_fire_together() {
        let input = PredictionInput {
            weather_situation: 3,
            holiday: true,
            hour: 8,
            temperature: 2.0,
            ..PredictionInput::default()
        };
        assert_eq!(Advisory::for_input(&input), Advisory::ALL.to_vec());
    }

    #[test]
    fn none_fire_for_a_mild_noon() {
        let input = PredictionInput {
            weather_situation: 1,
            holiday: false,
            hour: 12,
            temperature: 20.0,
            ..PredictionInput::default()
        };
        assert!(Advisory::for_input(&input).is_empty());
    }

    #[test]
    fn advisories_are_independent() {
        let mut input = PredictionInput::default();
        input.hour = 18;
        assert_eq!(Advisory::for_input(&input), vec![Advisory::PeakCommute]);

        input.holiday = true;
        assert_eq!(
            Advisory::for_input(&input),
            vec![Advisory::Holiday, Advisory::PeakCommute]
        );
    }

    #[test]
    fn peak_hours_cover_morning_and_evening_commutes() {
        let mut input = PredictionInput::default();
        for hour in [7, 8, 9, 17, 18, 19] {
            input.hour = hour;
            assert!(Advisory::PeakCommute.applies(&input), "hour = {}", hour);
        }
        for hour in [0, 6, 10, 16, 20, 23] {
            input.hour = hour;
            assert!(!Advisory::PeakCommute.applies(&input), "hour = {}", hour);
        }
    }

    #[test]
    fn weather_threshold_is_inclusive() {
        let mut input = PredictionInput::default();
        input.weather_situation = 2;
        assert!(!Advisory::AdverseWeather.applies(&input));
        input.weather_situation = 3;
        assert!(Advisory::AdverseWeather.applies(&input));
        input.weather_situation = 4;
        assert!(Advisory::AdverseWeather.applies(&input));
    }

    #[test]
    fn cold_threshold_is_exclusive() {
        let mut input = PredictionInput::default();
        input.temperature = 5.0;
        assert!(!Advisory::ColdTemperature.applies(&input));
        input.temperature = 4.9;
        assert!(Advisory::ColdTemperature.applies(&input));
    }
}
