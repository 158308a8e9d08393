//! Advice attachment policy.

use risk_model::RiskLabel;
use serde::{Deserialize, Serialize};

/// Controls whether counselling output accompanies every prediction or only
/// predicted dropouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvicePolicy {
    /// Attach suggestions and the factor breakdown to every prediction
    #[default]
    Always,
    /// Attach them only when the predicted label is dropout
    DropoutOnly,
}

impl AdvicePolicy {
    /// Whether counselling output should be attached for this label
    pub fn attaches_for(&self, label: RiskLabel) -> bool {
        match self {
            AdvicePolicy::Always => true,
            AdvicePolicy::DropoutOnly => label == RiskLabel::Dropout,
        }
    }
}
