use crate::ModelError;
use brd_core::input::FEATURE_COUNT;
use serde::{Deserialize, Serialize};

/// A node in a regression tree. Nodes live in a flat arena indexed by
/// position; split children must point forward in the arena so traversal
/// always terminates.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Split {
        /// Feature index into the input feature vector
        feature: usize,
        /// Values strictly below the threshold go left
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// A single regression tree, rooted at node 0.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    /// Walk from the root to a leaf and return its value.
    ///
    /// Assumes the tree passed [`Tree::validate`]; indices are then in
    /// range and strictly increasing along any path.
    pub fn score(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if features[*feature] < *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    /// Check structural invariants: non-empty, feature indices in range,
    /// child indices in range and strictly forward.
    pub fn validate(&self, tree_index: usize) -> Result<(), ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::EmptyTree { tree: tree_index });
        }
        for (node_index, node) in self.nodes.iter().enumerate() {
            if let Node::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature >= FEATURE_COUNT {
                    return Err(ModelError::BadFeatureIndex {
                        tree: tree_index,
                        node: node_index,
                        feature: *feature,
                    });
                }
                for child in [*left, *right] {
                    if child <= node_index || child >= self.nodes.len() {
                        return Err(ModelError::BadChildIndex {
                            tree: tree_index,
                            node: node_index,
                            child,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// An additive ensemble of regression trees.
///
/// Prediction is `base_score + sum of per-tree leaf values`, the usual
/// gradient-boosting decomposition.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct TreeEnsemble {
    pub base_score: f64,
    pub trees: Vec<Tree>,
}

impl TreeEnsemble {
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        self.base_score
            + self
                .trees
                .iter()
                .map(|tree| tree.score(features))
                .sum::<f64>()
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::EmptyEnsemble);
        }
        for (tree_index, tree) in self.trees.iter().enumerate() {
            tree.validate(tree_index)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Node, Tree, TreeEnsemble};
    use crate::ModelError;
    use brd_core::input::FEATURE_COUNT;

    /// A stump splitting on `feature` at `threshold`: left/right leaves.
    fn stump(feature: usize, threshold: f64, below: f64, above: f64) -> Tree {
        Tree {
            nodes: vec![
                Node::Split {
                    feature,
                    threshold,
                    left: 1,
                    right: 2,
                },
                Node::Leaf { value: below },
                Node::Leaf { value: above },
            ],
        }
    }

    #[test]
    fn stump_routes_on_threshold() {
        let tree = stump(2, 12.0, -5.0, 8.0);
        let mut features = [0.0; FEATURE_COUNT];

        features[2] = 11.9;
        assert_eq!(tree.score(&features), -5.0);

        // At the threshold goes right
        features[2] = 12.0;
        assert_eq!(tree.score(&features), 8.0);
    }

    #[test]
    fn ensemble_sums_base_score_and_leaves() {
        let ensemble = TreeEnsemble {
            base_score: 100.0,
            trees: vec![stump(2, 12.0, -5.0, 8.0), stump(7, 5.0, -40.0, 10.0)],
        };
        let mut features = [0.0; FEATURE_COUNT];
        features[2] = 17.0; // right: +8
        features[7] = 3.0; // left: -40
        assert_eq!(ensemble.predict(&features), 68.0);
    }

    #[test]
    fn two_level_tree_traversal() {
        let tree = Tree {
            nodes: vec![
                Node::Split {
                    feature: 2,
                    threshold: 7.0,
                    left: 1,
                    right: 2,
                },
                Node::Leaf { value: -60.0 },
                Node::Split {
                    feature: 2,
                    threshold: 10.0,
                    left: 3,
                    right: 4,
                },
                Node::Leaf { value: 85.0 },
                Node::Leaf { value: 10.0 },
            ],
        };
        let mut features = [0.0; FEATURE_COUNT];
        features[2] = 8.0;
        assert_eq!(tree.score(&features), 85.0);
        features[2] = 12.0;
        assert_eq!(tree.score(&features), 10.0);
        features[2] = 3.0;
        assert_eq!(tree.score(&features), -60.0);
    }

    #[test]
    fn validate_rejects_empty_shapes() {
        let ensemble = TreeEnsemble {
            base_score: 0.0,
            trees: Vec::new(),
        };
        assert_eq!(ensemble.validate(), Err(ModelError::EmptyEnsemble));

        let ensemble = TreeEnsemble {
            base_score: 0.0,
            trees: vec![Tree { nodes: Vec::new() }],
        };
        assert_eq!(ensemble.validate(), Err(ModelError::EmptyTree { tree: 0 }));
    }

    #[test]
    fn validate_rejects_bad_feature_index() {
        let ensemble = TreeEnsemble {
            base_score: 0.0,
            trees: vec![stump(FEATURE_COUNT, 1.0, 0.0, 0.0)],
        };
        assert_eq!(
            ensemble.validate(),
            Err(ModelError::BadFeatureIndex {
                tree: 0,
                node: 0,
                feature: FEATURE_COUNT,
            })
        );
    }

    #[test]
    fn validate_rejects_backward_and_out_of_range_children() {
        // Self-referencing child would loop forever if traversed
        let cyclic = Tree {
            nodes: vec![
                Node::Split {
                    feature: 0,
                    threshold: 1.0,
                    left: 0,
                    right: 1,
                },
                Node::Leaf { value: 0.0 },
            ],
        };
        assert_eq!(
            cyclic.validate(0),
            Err(ModelError::BadChildIndex {
                tree: 0,
                node: 0,
                child: 0,
            })
        );

        let dangling = Tree {
            nodes: vec![
                Node::Split {
                    feature: 0,
                    threshold: 1.0,
                    left: 1,
                    right: 9,
                },
                Node::Leaf { value: 0.0 },
            ],
        };
        assert_eq!(
            dangling.validate(3),
            Err(ModelError::BadChildIndex {
                tree: 3,
                node: 0,
                child: 9,
            })
        );
    }
}
