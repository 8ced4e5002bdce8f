use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable identity of a trained model.
///
/// Travels inside the artifact so display surfaces never have to
/// introspect the model variant to name it.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Display name, e.g. "Gradient Boosted Trees"
    pub name: String,
    /// Version string of the training run that produced the artifact
    pub version: String,
}

impl fmt::Display for ModelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::ModelDescriptor;

    #[test]
    fn display_joins_name_and_version() {
        let descriptor = ModelDescriptor {
            name: "Gradient Boosted Trees".to_string(),
            version: "1.2.0".to_string(),
        };
        assert_eq!(descriptor.to_string(), "Gradient Boosted Trees v1.2.0");
    }
}
