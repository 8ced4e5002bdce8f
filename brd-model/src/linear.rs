use brd_core::input::FEATURE_COUNT;
use serde::{Deserialize, Serialize};

/// Linear regression over the fixed feature vector.
///
/// Prediction is `intercept + weights . features`. Weight positions
/// follow [`brd_core::input::FEATURE_NAMES`].
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub weights: [f64; FEATURE_COUNT],
}

impl LinearModel {
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        self.intercept
            + self
                .weights
                .iter()
                .zip(features.iter())
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::LinearModel;
    use brd_core::input::FEATURE_COUNT;

    #[test]
    fn predicts_intercept_for_zero_features() {
        let model = LinearModel {
            intercept: 120.0,
            weights: [0.0; FEATURE_COUNT],
        };
        assert_eq!(model.predict(&[0.0; FEATURE_COUNT]), 120.0);
    }

    #[test]
    fn predicts_dot_product_plus_intercept() {
        let mut weights = [0.0; FEATURE_COUNT];
        weights[2] = 3.0; // hour
        weights[7] = -2.0; // temperature
        let model = LinearModel {
            intercept: 10.0,
            weights,
        };

        let mut features = [0.0; FEATURE_COUNT];
        features[2] = 8.0;
        features[7] = 4.0;
        assert_eq!(model.predict(&features), 10.0 + 24.0 - 8.0);
    }
}
