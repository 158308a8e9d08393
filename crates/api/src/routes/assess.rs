//! Assessment Route

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use metrics::{counter, histogram};
use serde::Serialize;
use tracing::debug;

use advisor::Suggestion;
use explain::{Explainer, FeatureContribution};
use risk_model::Prediction;
use student_profile::StudentProfile;

use crate::{ApiError, AppState};

/// Response for the assessment endpoint
#[derive(Debug, Serialize)]
pub struct AssessResponse {
    #[serde(flatten)]
    pub prediction: Prediction,
    /// Counselling suggestions, present when the advice policy attaches them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<Suggestion>>,
    /// Per-feature contribution breakdown, gated together with suggestions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factors: Option<Vec<FeatureContribution>>,
    pub latency_ms: f64,
}

/// Assess one student profile
pub async fn assess(
    State(state): State<Arc<AppState>>,
    Json(profile): Json<StudentProfile>,
) -> Result<Json<AssessResponse>, ApiError> {
    let started = Instant::now();
    profile.validate()?;

    let prediction = state.classifier.predict_full(&profile);

    let (suggestions, factors) = if state.advice_policy.attaches_for(prediction.label) {
        (
            Some(advisor::advise(&profile)),
            Some(state.explainer.explain(&profile)),
        )
    } else {
        (None, None)
    };

    let elapsed = started.elapsed();
    counter!("assessments_total", "label" => prediction.label.as_str()).increment(1);
    histogram!("assessment_latency_seconds").record(elapsed.as_secs_f64());
    debug!(
        label = prediction.label.as_str(),
        p_dropout = prediction.probabilities.dropout,
        "Assessed student profile"
    );

    Ok(Json(AssessResponse {
        prediction,
        suggestions,
        factors,
        latency_ms: elapsed.as_secs_f64() * 1000.0,
    }))
}
