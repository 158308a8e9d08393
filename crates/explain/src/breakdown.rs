//! Baseline-substitution contribution breakdown.

use std::cmp::Ordering;
use std::sync::Arc;

use risk_model::Classifier;
use serde::{Deserialize, Serialize};
use student_profile::{StudentProfile, FEATURE_COUNT, FEATURE_NAMES};

/// How much one feature moved the dropout probability for one prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureContribution {
    /// Feature name as trained
    pub feature: String,
    /// The student's value for this feature
    pub value: f64,
    /// Shift in dropout probability versus the cohort baseline value.
    /// Positive means this value pushed the prediction toward dropout.
    pub contribution: f64,
}

/// Seam for attribution backends
pub trait Explainer: Send + Sync {
    /// Per-feature breakdown for one profile, largest magnitude first
    fn explain(&self, profile: &StudentProfile) -> Vec<FeatureContribution>;
}

/// Attribution by single-feature substitution against a cohort baseline.
///
/// For each feature the student's value is swapped with the baseline's and
/// the model is re-scored. The probability shift is that feature's
/// contribution. The deltas are indicative of direction and weight; they do
/// not sum to the total distance from the baseline prediction. Six extra
/// model evaluations per explanation, which is negligible for an ensemble of
/// this size.
pub struct BaselineExplainer<C: Classifier> {
    classifier: Arc<C>,
    baseline: StudentProfile,
}

impl<C: Classifier> BaselineExplainer<C> {
    /// Uses the built-in cohort baseline.
    pub fn new(classifier: Arc<C>) -> Self {
        Self::with_baseline(classifier, crate::cohort_baseline())
    }

    /// Uses a caller-supplied baseline profile.
    pub fn with_baseline(classifier: Arc<C>, baseline: StudentProfile) -> Self {
        Self {
            classifier,
            baseline,
        }
    }
}

impl<C: Classifier> Explainer for BaselineExplainer<C> {
    fn explain(&self, profile: &StudentProfile) -> Vec<FeatureContribution> {
        let features = profile.to_features();
        let actual = self.classifier.predict_proba(&features).dropout;

        let mut contributions: Vec<FeatureContribution> = (0..FEATURE_COUNT)
            .map(|column| {
                let substituted = profile.with_column_from(column, &self.baseline);
                let shifted = self.classifier.predict_proba(&substituted.to_features());
                FeatureContribution {
                    feature: FEATURE_NAMES[column].to_string(),
                    value: features[column],
                    contribution: actual - shifted.dropout,
                }
            })
            .collect();

        // Stable sort keeps the trained column order among equal magnitudes.
        contributions.sort_by(|a, b| {
            b.contribution
                .abs()
                .partial_cmp(&a.contribution.abs())
                .unwrap_or(Ordering::Equal)
        });
        contributions
    }
}
