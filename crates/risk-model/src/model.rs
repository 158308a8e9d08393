//! On-disk GBDT artifact schema and raw margin evaluation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use student_profile::{FEATURE_COUNT, FEATURE_NAMES};
use tracing::info;

use crate::tree::DecisionTree;
use crate::ModelError;

/// Artifact schema version this build understands
pub const FORMAT_VERSION: u32 = 1;

/// Descriptive metadata carried inside the artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub algorithm: String,
    pub dataset: String,
    /// Held-out accuracy reported at training time, in [0, 1]
    pub accuracy: f64,
}

/// Pretrained gradient-boosted tree ensemble for binary dropout risk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GbdtModel {
    pub version: u32,
    pub feature_names: Vec<String>,
    pub base_score: f64,
    pub trees: Vec<DecisionTree>,
    pub info: ModelInfo,
}

impl GbdtModel {
    /// Reads and validates an artifact from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, ModelError> {
        let raw = fs::read_to_string(path)?;
        let model: GbdtModel = serde_json::from_str(&raw)?;
        model.validate()?;
        info!(
            model = %model.info.name,
            trees = model.trees.len(),
            accuracy = model.info.accuracy,
            "Loaded dropout risk model"
        );
        Ok(model)
    }

    /// Checks the artifact against the schema this build was compiled for.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.version != FORMAT_VERSION {
            return Err(ModelError::Invalid(format!(
                "unsupported artifact version {} (expected {FORMAT_VERSION})",
                self.version
            )));
        }
        let names_match = self.feature_names.len() == FEATURE_COUNT
            && self
                .feature_names
                .iter()
                .zip(FEATURE_NAMES.iter())
                .all(|(a, b)| a.as_str() == *b);
        if !names_match {
            return Err(ModelError::ColumnMismatch {
                expected: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
                actual: self.feature_names.clone(),
            });
        }
        if !self.base_score.is_finite() {
            return Err(ModelError::Invalid("base score is not finite".to_string()));
        }
        if self.trees.is_empty() {
            return Err(ModelError::Invalid("artifact has no trees".to_string()));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(FEATURE_COUNT)
                .map_err(|e| ModelError::Invalid(format!("tree {i}: {e}")))?;
        }
        if !(0.0..=1.0).contains(&self.info.accuracy) {
            return Err(ModelError::Invalid(format!(
                "reported accuracy {} is outside [0, 1]",
                self.info.accuracy
            )));
        }
        Ok(())
    }

    /// Raw additive margin for one feature vector: base score plus one leaf
    /// contribution per tree. Positive margins favor dropout.
    pub fn margin(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let mut score = self.base_score;
        for tree in &self.trees {
            score += tree.evaluate(features);
        }
        score
    }
}
