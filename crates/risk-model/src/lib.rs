//! Dropout Risk Model
//!
//! Loads the pretrained gradient-boosted tree ensemble from disk and serves
//! deterministic predictions over the six ordered student features. The
//! artifact is validated once at startup and then shared read-only for the
//! process lifetime.

mod classifier;
mod model;
mod tree;

pub use classifier::{
    ClassProbabilities, Classifier, DropoutClassifier, Prediction, RiskLabel,
};
pub use model::{GbdtModel, ModelInfo, FORMAT_VERSION};
pub use tree::{DecisionTree, TreeNode};

use thiserror::Error;

/// Errors raised while loading or evaluating the model artifact
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model artifact could not be read: {0}")]
    Io(#[from] std::io::Error),
    #[error("Model artifact is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Model validation failed: {0}")]
    Invalid(String),
    #[error("Feature column mismatch: model expects {expected:?}, artifact has {actual:?}")]
    ColumnMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },
}
