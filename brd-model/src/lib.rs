//! Regression model artifacts for hourly bike rental demand.
//!
//! An artifact is a JSON document pairing a [`ModelDescriptor`] with one
//! of two regression model variants:
//!
//! - `linear`: intercept + one weight per feature
//! - `tree_ensemble`: base score + additive regression trees
//!
//! Artifacts are produced by an offline training pipeline and consumed
//! read-only here. The artifact is constructed once by whoever needs
//! predictions (the dashboard's mount effect, the CLI main) and passed
//! by reference; there is no process-wide model cache.
//!
//! # Usage
//!
//! ```rust
//! use brd_core::input::PredictionInput;
//! use brd_model::ModelArtifact;
//!
//! let json = r#"{
//!     "descriptor": { "name": "Ridge Regression", "version": "0.3.1" },
//!     "model": { "type": "linear", "intercept": 40.0,
//!                "weights": [5.0, 2.0, 4.0, -20.0, 1.0, 10.0, -30.0, 2.5, 0.5, -0.4, -0.3] }
//! }"#;
//! let artifact = ModelArtifact::from_json(json).unwrap();
//! let count = artifact.predict_count(&PredictionInput::default()).unwrap();
//! assert_eq!(artifact.descriptor.to_string(), "Ridge Regression v0.3.1");
//! assert_eq!(count.get(), 126);
//! ```

pub mod descriptor;
pub mod ensemble;
pub mod linear;

pub use descriptor::ModelDescriptor;
pub use ensemble::{Node, Tree, TreeEnsemble};
pub use linear::LinearModel;

use anyhow::Context;
use brd_core::count::PredictedCount;
use brd_core::input::{PredictionInput, FEATURE_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Structural problems in a deserialized model.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ModelError {
    EmptyEnsemble,
    EmptyTree { tree: usize },
    BadFeatureIndex { tree: usize, node: usize, feature: usize },
    BadChildIndex { tree: usize, node: usize, child: usize },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::EmptyEnsemble => write!(f, "ensemble has no trees"),
            ModelError::EmptyTree { tree } => write!(f, "tree {} has no nodes", tree),
            ModelError::BadFeatureIndex {
                tree,
                node,
                feature,
            } => write!(
                f,
                "tree {} node {} splits on feature {} (only {} features exist)",
                tree, node, feature, FEATURE_COUNT
            ),
            ModelError::BadChildIndex { tree, node, child } => write!(
                f,
                "tree {} node {} points at invalid child {}",
                tree, node, child
            ),
        }
    }
}

impl std::error::Error for ModelError {}

/// The regression model inside an artifact.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RegressionModel {
    Linear(LinearModel),
    TreeEnsemble(TreeEnsemble),
}

impl RegressionModel {
    /// Evaluate the model on a feature vector.
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        match self {
            RegressionModel::Linear(model) => model.predict(features),
            RegressionModel::TreeEnsemble(model) => model.predict(features),
        }
    }

    /// Check structural invariants after deserialization.
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            RegressionModel::Linear(_) => Ok(()),
            RegressionModel::TreeEnsemble(model) => model.validate(),
        }
    }

    /// Short shape summary for inspection output, e.g.
    /// `"linear (11 weights)"` or `"tree ensemble (5 trees)"`.
    pub fn shape(&self) -> String {
        match self {
            RegressionModel::Linear(_) => format!("linear ({} weights)", FEATURE_COUNT),
            RegressionModel::TreeEnsemble(model) => {
                format!("tree ensemble ({} trees)", model.trees.len())
            }
        }
    }
}

/// A loaded model: descriptor plus regression model.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub descriptor: ModelDescriptor,
    pub model: RegressionModel,
}

impl ModelArtifact {
    /// Parse and validate an artifact from its JSON text.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let artifact: ModelArtifact =
            serde_json::from_str(json).context("malformed model artifact")?;
        artifact.model.validate()?;
        log::info!(
            "loaded model {} ({})",
            artifact.descriptor,
            artifact.model.shape()
        );
        Ok(artifact)
    }

    /// Load an artifact from a JSON file on disk.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("model not found: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in {}", path.display()))
    }

    /// Raw regression output for an input.
    pub fn predict(&self, input: &PredictionInput) -> f64 {
        self.model.predict(&input.feature_vector())
    }

    /// Validate the input, predict, and apply the count rounding policy.
    pub fn predict_count(&self, input: &PredictionInput) -> anyhow::Result<PredictedCount> {
        input.validate()?;
        Ok(PredictedCount::from_raw(self.predict(input))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brd_core::demand::DemandLevel;

    fn linear_artifact(intercept: f64, weights: [f64; FEATURE_COUNT]) -> ModelArtifact {
        ModelArtifact {
            descriptor: ModelDescriptor {
                name: "Test Linear".to_string(),
                version: "0.0.1".to_string(),
            },
            model: RegressionModel::Linear(LinearModel { intercept, weights }),
        }
    }

    #[test]
    fn artifact_round_trips_through_json() {
        let artifact = linear_artifact(55.0, [1.0; FEATURE_COUNT]);
        let json = serde_json::to_string(&artifact).unwrap();
        let parsed = ModelArtifact::from_json(&json).unwrap();
        assert_eq!(parsed, artifact);
    }

    #[test]
    fn ensemble_artifact_parses_from_tagged_json() {
        let json = r#"{
            "descriptor": { "name": "Gradient Boosted Trees", "version": "1.2.0" },
            "model": {
                "type": "tree_ensemble",
                "base_score": 100.0,
                "trees": [
                    { "nodes": [
                        { "kind": "split", "feature": 2, "threshold": 7.0, "left": 1, "right": 2 },
                        { "kind": "leaf", "value": -20.0 },
                        { "kind": "leaf", "value": 35.0 }
                    ] }
                ]
            }
        }"#;
        let artifact = ModelArtifact::from_json(json).unwrap();
        assert_eq!(artifact.model.shape(), "tree ensemble (1 trees)");

        let mut input = PredictionInput::default();
        input.hour = 6;
        assert_eq!(artifact.predict(&input), 80.0);
        input.hour = 8;
        assert_eq!(artifact.predict(&input), 135.0);
    }

    #[test]
    fn from_json_rejects_invalid_structure() {
        let json = r#"{
            "descriptor": { "name": "Broken", "version": "0" },
            "model": { "type": "tree_ensemble", "base_score": 0.0, "trees": [] }
        }"#;
        assert!(ModelArtifact::from_json(json).is_err());

        assert!(ModelArtifact::from_json("not json").is_err());
    }

    #[test]
    fn predict_count_applies_rounding_policy() {
        let artifact = linear_artifact(142.4, [0.0; FEATURE_COUNT]);
        let count = artifact.predict_count(&PredictionInput::default()).unwrap();
        assert_eq!(count.get(), 142);
        assert_eq!(count.level(), DemandLevel::Moderate);
    }

    #[test]
    fn predict_count_clamps_negative_predictions() {
        let artifact = linear_artifact(-500.0, [0.0; FEATURE_COUNT]);
        let count = artifact.predict_count(&PredictionInput::default()).unwrap();
        assert_eq!(count.get(), 0);
        assert_eq!(count.level(), DemandLevel::VeryLow);
    }

    #[test]
    fn predict_count_rejects_non_finite_output() {
        let artifact = linear_artifact(f64::NAN, [0.0; FEATURE_COUNT]);
        assert!(artifact.predict_count(&PredictionInput::default()).is_err());
    }

    #[test]
    fn predict_count_rejects_invalid_input() {
        let artifact = linear_artifact(100.0, [0.0; FEATURE_COUNT]);
        let mut input = PredictionInput::default();
        input.month = 0;
        assert!(artifact.predict_count(&input).is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ModelArtifact::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("model not found"));
    }
}

#[cfg(test)]
mod fixture_tests {
    //! The shipped artifact must parse and behave like a demand model.

    use super::ModelArtifact;
    use brd_core::demand::DemandLevel;
    use brd_core::input::PredictionInput;

    const FIXTURE: &str = include_str!("../../fixtures/bike_model.json");

    #[test]
    fn shipped_artifact_loads() {
        let artifact = ModelArtifact::from_json(FIXTURE).unwrap();
        assert_eq!(artifact.descriptor.name, "Gradient Boosted Trees");
        assert_eq!(artifact.model.shape(), "tree ensemble (5 trees)");
    }

    #[test]
    fn default_conditions_forecast() {
        let artifact = ModelArtifact::from_json(FIXTURE).unwrap();
        let count = artifact.predict_count(&PredictionInput::default()).unwrap();
        assert_eq!(count.get(), 223);
        assert_eq!(count.level(), DemandLevel::High);
    }

    #[test]
    fn commute_peak_beats_early_morning() {
        let artifact = ModelArtifact::from_json(FIXTURE).unwrap();

        let mut peak = PredictionInput::default();
        peak.hour = 8;
        let mut early = PredictionInput::default();
        early.hour = 4;

        let peak_count = artifact.predict_count(&peak).unwrap();
        let early_count = artifact.predict_count(&early).unwrap();
        assert!(peak_count > early_count);
        assert_eq!(peak_count.get(), 298);
        assert_eq!(early_count.get(), 153);
    }

    #[test]
    fn heavy_weather_lowers_the_forecast() {
        let artifact = ModelArtifact::from_json(FIXTURE).unwrap();

        let clear = PredictionInput::default();
        let mut storm = clear;
        storm.weather_situation = 4;

        let clear_count = artifact.predict_count(&clear).unwrap();
        let storm_count = artifact.predict_count(&storm).unwrap();
        assert!(storm_count < clear_count);
    }
}
