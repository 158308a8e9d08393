//! Flat decision tree representation and traversal.

use serde::{Deserialize, Serialize};

/// A single node in a flattened decision tree
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Interior split: feature strictly below threshold goes left, else right
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal node carrying an additive margin contribution
    Leaf { value: f64 },
}

/// One regression tree stored as a flat node array, root at index 0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walks the tree for one feature vector and returns the leaf value.
    ///
    /// A value equal to the threshold goes right. The walk is capped at the
    /// node count, so a malformed tree terminates with a zero contribution
    /// instead of spinning.
    pub fn evaluate(&self, features: &[f64]) -> f64 {
        let mut index = 0usize;
        for _ in 0..self.nodes.len() {
            match self.nodes.get(index) {
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = match features.get(*feature) {
                        Some(v) => *v,
                        None => return 0.0,
                    };
                    index = if value < *threshold { *left } else { *right };
                }
                Some(TreeNode::Leaf { value }) => return *value,
                None => return 0.0,
            }
        }
        0.0
    }

    /// Checks structural soundness: children point forward, feature indices
    /// stay inside the declared column count, and all values are finite.
    pub fn validate(&self, feature_count: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= feature_count {
                        return Err(format!(
                            "node {i} splits on unknown feature index {feature}"
                        ));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {i} has non-finite threshold"));
                    }
                    if *left <= i || *right <= i {
                        return Err(format!("node {i} has a non-forward child link"));
                    }
                    if *left >= self.nodes.len() || *right >= self.nodes.len() {
                        return Err(format!("node {i} links past the end of the tree"));
                    }
                }
                TreeNode::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(format!("node {i} has non-finite leaf value"));
                    }
                }
            }
        }
        Ok(())
    }
}
