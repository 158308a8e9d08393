//! Model Metadata Route

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use risk_model::ModelInfo;
use student_profile::FEATURE_NAMES;

use crate::AppState;

/// Response for the model metadata endpoint
#[derive(Debug, Serialize)]
pub struct ModelResponse {
    #[serde(flatten)]
    pub info: ModelInfo,
    /// Trained column order; assessment payloads are mapped onto this
    pub feature_order: Vec<String>,
    pub num_trees: usize,
}

/// Describe the loaded model
pub async fn get_model(State(state): State<Arc<AppState>>) -> Json<ModelResponse> {
    Json(ModelResponse {
        info: state.classifier.info().clone(),
        feature_order: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        num_trees: state.classifier.num_trees(),
    })
}
