//! One-shot demand prediction from the command line.

use brd_core::advisory::Advisory;
use brd_core::input::PredictionInput;
use brd_model::ModelArtifact;
use clap::Args;
use log::info;
use std::path::Path;

/// Feature flags for a single prediction. Defaults mirror the
/// dashboard's initial control positions.
#[derive(Args)]
pub struct PredictArgs {
    /// Path to the model artifact JSON
    #[arg(short, long, default_value = "fixtures/bike_model.json")]
    pub model: String,

    /// Season code: 1 = Spring .. 4 = Winter
    #[arg(long, default_value_t = 2)]
    pub season: u8,

    /// Month (1-12)
    #[arg(long, default_value_t = 6)]
    pub month: u8,

    /// Hour of day (0-23)
    #[arg(long, default_value_t = 12)]
    pub hour: u8,

    /// Treat the day as a public holiday
    #[arg(long)]
    pub holiday: bool,

    /// Weekday: 0 = Sunday .. 6 = Saturday
    #[arg(long, default_value_t = 2)]
    pub weekday: u8,

    /// Treat the day as a working day
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub working_day: bool,

    /// Weather situation code: 1 = Clear .. 4 = Heavy Rain/Snow
    #[arg(long, default_value_t = 1)]
    pub weather: u8,

    /// Air temperature in degrees C
    #[arg(long, default_value_t = 20.0)]
    pub temp: f64,

    /// Perceived temperature in degrees C
    #[arg(long, default_value_t = 22.0)]
    pub feels_like: f64,

    /// Relative humidity in percent
    #[arg(long, default_value_t = 60.0)]
    pub humidity: f64,

    /// Wind speed in km/h
    #[arg(long, default_value_t = 10.0)]
    pub windspeed: f64,
}

impl PredictArgs {
    fn input(&self) -> PredictionInput {
        PredictionInput {
            season: self.season,
            month: self.month,
            hour: self.hour,
            holiday: self.holiday,
            weekday: self.weekday,
            working_day: self.working_day,
            weather_situation: self.weather,
            temperature: self.temp,
            feels_like_temperature: self.feels_like,
            humidity: self.humidity,
            windspeed: self.windspeed,
        }
    }
}

/// Load the artifact, run one prediction, and print the forecast with
/// its demand level and any advisories.
pub fn run_predict(args: PredictArgs) -> anyhow::Result<()> {
    let artifact = ModelArtifact::load(Path::new(&args.model))?;
    let input = args.input();

    info!(
        "predicting for {} {}:00, weather {}",
        input.weekday_label(),
        input.hour,
        input.weather_label()
    );

    let count = artifact.predict_count(&input)?;
    let level = count.level();

    println!("Model: {}", artifact.descriptor);
    println!(
        "Predicted demand: {} {} bikes ({})",
        level.symbol(),
        count,
        level.label()
    );

    let advisories = Advisory::for_input(&input);
    if !advisories.is_empty() {
        println!("Advisories:");
        for advisory in advisories {
            println!("  - {}", advisory.message());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::PredictArgs;
    use brd_core::input::PredictionInput;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: PredictArgs,
    }

    #[test]
    fn defaults_match_dashboard_controls() {
        let harness = Harness::parse_from(["test"]);
        assert_eq!(harness.args.input(), PredictionInput::default());
    }

    #[test]
    fn flags_override_defaults() {
        let harness = Harness::parse_from([
            "test",
            "--hour",
            "8",
            "--holiday",
            "--working-day",
            "false",
            "--temp",
            "3.5",
        ]);
        let input = harness.args.input();
        assert_eq!(input.hour, 8);
        assert!(input.holiday);
        assert!(!input.working_day);
        assert_eq!(input.temperature, 3.5);
    }
}
