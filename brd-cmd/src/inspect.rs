//! Inspection helpers: classify a count, describe an artifact.

use brd_core::demand::DemandLevel;
use brd_core::input::FEATURE_NAMES;
use brd_model::{ModelArtifact, RegressionModel};
use std::path::Path;

/// Print the demand level for a known count.
pub fn run_classify(count: u32) {
    let level = DemandLevel::classify(count);
    println!(
        "{} {} bikes: {} (color {})",
        level.symbol(),
        count,
        level.label(),
        level.color()
    );
}

/// Load an artifact and print its descriptor and shape. Linear models
/// also get a per-feature weight listing.
pub fn run_inspect(model_path: &str) -> anyhow::Result<()> {
    let artifact = ModelArtifact::load(Path::new(model_path))?;
    println!("Model: {}", artifact.descriptor);
    println!("Shape: {}", artifact.model.shape());

    if let RegressionModel::Linear(linear) = &artifact.model {
        println!("Intercept: {}", linear.intercept);
        for (name, weight) in FEATURE_NAMES.iter().zip(linear.weights.iter()) {
            println!("  {:<24} {:>10.3}", name, weight);
        }
    }

    Ok(())
}
