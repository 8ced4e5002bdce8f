//! Command implementations for the demand CLI.
//!
//! Provides subcommands for one-shot demand predictions, count
//! classification, and model artifact inspection.

use clap::Subcommand;

pub mod inspect;
pub mod predict;

#[derive(Subcommand)]
pub enum Command {
    /// Predict hourly rental demand for one set of conditions
    Predict(predict::PredictArgs),

    /// Classify a known rental count into a demand level
    Classify {
        /// The rental count to classify
        #[arg(short, long)]
        count: u32,
    },

    /// Show a model artifact's descriptor and shape
    Inspect {
        /// Path to the model artifact JSON
        #[arg(short, long, default_value = "fixtures/bike_model.json")]
        model: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Predict(args) => predict::run_predict(args),
        Command::Classify { count } => {
            inspect::run_classify(count);
            Ok(())
        }
        Command::Inspect { model } => inspect::run_inspect(&model),
    }
}
