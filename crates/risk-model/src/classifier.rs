//! Binary dropout classifier over the tree ensemble.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use student_profile::{StudentProfile, FEATURE_COUNT, FEATURE_NAMES};

use crate::model::{GbdtModel, ModelInfo, FORMAT_VERSION};
use crate::tree::{DecisionTree, TreeNode};
use crate::ModelError;

/// Predicted outcome class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLabel {
    Graduate,
    Dropout,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Graduate => "graduate",
            RiskLabel::Dropout => "dropout",
        }
    }
}

/// Calibrated probability for each outcome class
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassProbabilities {
    pub graduate: f64,
    pub dropout: f64,
}

impl ClassProbabilities {
    /// Hard label under the 0.5 decision threshold. An exact tie reports
    /// dropout so borderline students are surfaced rather than hidden.
    pub fn label(&self) -> RiskLabel {
        if self.dropout >= 0.5 {
            RiskLabel::Dropout
        } else {
            RiskLabel::Graduate
        }
    }
}

/// One classification result with its wall-clock timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub label: RiskLabel,
    pub probabilities: ClassProbabilities,
    pub timestamp_ms: u64,
}

/// Scoring seam shared by the live model and test doubles
pub trait Classifier: Send + Sync {
    /// Class probabilities for one ordered feature vector
    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> ClassProbabilities;

    /// Hard label under the 0.5 threshold
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> RiskLabel {
        self.predict_proba(features).label()
    }
}

/// Pretrained GBDT classifier loaded from the bundled artifact
#[derive(Debug, Clone)]
pub struct DropoutClassifier {
    model: GbdtModel,
}

impl DropoutClassifier {
    /// Loads and validates an artifact from disk.
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let model = GbdtModel::load_json(path)?;
        Ok(Self { model })
    }

    /// Wraps an already-deserialized model after validating it.
    pub fn from_model(model: GbdtModel) -> Result<Self, ModelError> {
        model.validate()?;
        Ok(Self { model })
    }

    /// In-memory copy of the bundled ensemble, for tests and demos.
    pub fn mock() -> Self {
        Self {
            model: mock_model(),
        }
    }

    pub fn info(&self) -> &ModelInfo {
        &self.model.info
    }

    pub fn num_trees(&self) -> usize {
        self.model.trees.len()
    }

    pub fn model(&self) -> &GbdtModel {
        &self.model
    }

    /// Classifies a profile and stamps the result with the current time.
    pub fn predict_full(&self, profile: &StudentProfile) -> Prediction {
        let probabilities = self.predict_proba(&profile.to_features());
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Prediction {
            label: probabilities.label(),
            probabilities,
            timestamp_ms,
        }
    }
}

impl Classifier for DropoutClassifier {
    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> ClassProbabilities {
        let dropout = sigmoid(self.model.margin(features));
        ClassProbabilities {
            graduate: 1.0 - dropout,
            dropout,
        }
    }
}

fn sigmoid(margin: f64) -> f64 {
    1.0 / (1.0 + (-margin).exp())
}

/// The bundled ensemble as an in-memory value. `models/dropout_gbdt.json`
/// is this exact model serialized to disk.
pub(crate) fn mock_model() -> GbdtModel {
    let trees = vec![
        // Units approved in both semesters dominate the margin.
        DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature: 0,
                    threshold: 4.0,
                    left: 1,
                    right: 2,
                },
                TreeNode::Split {
                    feature: 2,
                    threshold: 4.0,
                    left: 3,
                    right: 4,
                },
                TreeNode::Split {
                    feature: 2,
                    threshold: 4.0,
                    left: 5,
                    right: 6,
                },
                TreeNode::Leaf { value: 1.2 },
                TreeNode::Leaf { value: 0.6 },
                TreeNode::Leaf { value: 0.4 },
                TreeNode::Leaf { value: -1.0 },
            ],
        },
        // Tuition status, softened by scholarship support.
        DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature: 1,
                    threshold: 0.5,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf { value: 0.9 },
                TreeNode::Split {
                    feature: 5,
                    threshold: 0.5,
                    left: 3,
                    right: 4,
                },
                TreeNode::Leaf { value: 0.1 },
                TreeNode::Leaf { value: -0.7 },
            ],
        },
        // Late enrollment carries a mild penalty.
        DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature: 4,
                    threshold: 30.5,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf { value: -0.3 },
                TreeNode::Leaf { value: 0.5 },
            ],
        },
    ];
    GbdtModel {
        version: FORMAT_VERSION,
        feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        base_score: 0.0,
        trees,
        info: ModelInfo {
            name: "uci-dropout-gbdt".to_string(),
            algorithm: "Gradient-boosted trees".to_string(),
            dataset: "UCI Student Dropout and Academic Success".to_string(),
            accuracy: 0.89,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn struggling_profile() -> StudentProfile {
        StudentProfile {
            course_code: 9238,
            tuition_up_to_date: false,
            sem1_units_approved: 2,
            sem2_units_approved: 3,
            age_at_enrollment: 28,
            scholarship_holder: false,
        }
    }

    fn supported_profile() -> StudentProfile {
        StudentProfile {
            course_code: 9238,
            tuition_up_to_date: true,
            sem1_units_approved: 8,
            sem2_units_approved: 10,
            age_at_enrollment: 20,
            scholarship_holder: true,
        }
    }

    #[test]
    fn test_struggling_profile_classified_dropout() {
        let classifier = DropoutClassifier::mock();
        let prediction = classifier.predict_full(&struggling_profile());
        assert_eq!(prediction.label, RiskLabel::Dropout);
        // margin 1.2 + 0.9 - 0.3 = 1.8
        assert!((prediction.probabilities.dropout - 0.858).abs() < 0.01);
    }

    #[test]
    fn test_supported_profile_classified_graduate() {
        let classifier = DropoutClassifier::mock();
        let prediction = classifier.predict_full(&supported_profile());
        assert_eq!(prediction.label, RiskLabel::Graduate);
        // margin -1.0 - 0.7 - 0.3 = -2.0
        assert!((prediction.probabilities.dropout - 0.119).abs() < 0.01);
    }

    #[test]
    fn test_units_at_split_threshold_go_right() {
        let classifier = DropoutClassifier::mock();
        let mut profile = supported_profile();
        profile.sem1_units_approved = 5;
        profile.scholarship_holder = false;
        profile.age_at_enrollment = 24;

        profile.sem2_units_approved = 4;
        assert_eq!(classifier.predict(&profile.to_features()), RiskLabel::Graduate);

        profile.sem2_units_approved = 3;
        assert_eq!(classifier.predict(&profile.to_features()), RiskLabel::Dropout);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let classifier = DropoutClassifier::mock();
        let p = classifier.predict_proba(&struggling_profile().to_features());
        assert!((p.graduate + p.dropout - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_exact_tie_reports_dropout() {
        let p = ClassProbabilities {
            graduate: 0.5,
            dropout: 0.5,
        };
        assert_eq!(p.label(), RiskLabel::Dropout);
    }

    #[test]
    fn test_zero_margin_is_borderline_dropout() {
        let model = GbdtModel {
            trees: vec![DecisionTree {
                nodes: vec![TreeNode::Leaf { value: 0.0 }],
            }],
            ..mock_model()
        };
        let classifier = DropoutClassifier::from_model(model).unwrap();
        let p = classifier.predict_proba(&supported_profile().to_features());
        assert!((p.dropout - 0.5).abs() < 1e-12);
        assert_eq!(p.label(), RiskLabel::Dropout);
    }

    #[test]
    fn test_bundled_artifact_matches_builtin_mock() {
        let path = concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../models/dropout_gbdt.json"
        );
        let loaded = GbdtModel::load_json(Path::new(path)).unwrap();
        let bundled = serde_json::to_value(&loaded).unwrap();
        let builtin = serde_json::to_value(&mock_model()).unwrap();
        assert_eq!(bundled, builtin);
    }

    #[test]
    fn test_from_path_round_trips() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&mock_model()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let classifier = DropoutClassifier::from_path(file.path()).unwrap();
        assert_eq!(classifier.num_trees(), 3);
        assert_eq!(
            classifier.predict(&struggling_profile().to_features()),
            RiskLabel::Dropout
        );
    }

    #[test]
    fn test_from_path_rejects_corrupt_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(matches!(
            DropoutClassifier::from_path(file.path()),
            Err(ModelError::Malformed(_))
        ));
    }

    #[test]
    fn test_from_path_rejects_reordered_columns() {
        let mut model = mock_model();
        model.feature_names.swap(0, 3);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&model).unwrap();
        file.write_all(json.as_bytes()).unwrap();
        assert!(matches!(
            DropoutClassifier::from_path(file.path()),
            Err(ModelError::ColumnMismatch { .. })
        ));
    }

    #[test]
    fn test_label_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RiskLabel::Dropout).unwrap(),
            "\"dropout\""
        );
        assert_eq!(RiskLabel::Graduate.as_str(), "graduate");
    }
}
