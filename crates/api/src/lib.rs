//! Dropout Advisory API Server
//!
//! REST API for the dropout prediction and counselling dashboard.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde::Serialize;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tower_governor::GovernorLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

pub mod config;
mod rate_limit;
mod routes;

use advisor::AdvicePolicy;
use explain::BaselineExplainer;
use risk_model::{DropoutClassifier, ModelError};
use student_profile::ProfileError;

use crate::config::AppConfig;

/// Application state shared across handlers
pub struct AppState {
    /// Loaded classifier, shared with the explainer
    pub classifier: Arc<DropoutClassifier>,
    /// Attribution backend
    pub explainer: BaselineExplainer<DropoutClassifier>,
    /// When counselling output accompanies a prediction
    pub advice_policy: AdvicePolicy,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create application state around an already-loaded classifier
    pub fn new(classifier: DropoutClassifier, advice_policy: AdvicePolicy) -> Self {
        let classifier = Arc::new(classifier);
        Self {
            explainer: BaselineExplainer::new(classifier.clone()),
            classifier,
            advice_policy,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Load the model artifact named by the config and build state
    pub fn from_config(config: &AppConfig) -> Result<Self, ModelError> {
        let classifier = DropoutClassifier::from_path(Path::new(&config.model_path))?;
        Ok(Self::new(classifier, config.advice_policy))
    }
}

/// Errors surfaced to API clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// Profile field outside its documented domain
    #[error("{0}")]
    InvalidProfile(#[from] ProfileError),
    /// Classifier failure; details are logged, not returned
    #[error("model evaluation failed")]
    Model(#[from] ModelError),
    #[error("unknown page: {0}")]
    UnknownPage(String),
}

/// Wire shape of an error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ApiError::InvalidProfile(_) => StatusCode::BAD_REQUEST,
            ApiError::Model(err) => {
                error!("Model evaluation failed: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::UnknownPage(_) => StatusCode::NOT_FOUND,
        };
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub model: ModelSummary,
}

/// Loaded-model summary reported by the health endpoint
#[derive(Debug, Serialize)]
pub struct ModelSummary {
    pub name: String,
    pub num_trees: usize,
    pub accuracy: f64,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/model", get(routes::model::get_model))
        .route("/api/v1/view/:page", get(routes::pages::get_view))
        .route("/api/v1/navigate", post(routes::pages::navigate))
        .route("/api/v1/assess", post(routes::assess::assess))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let info = state.classifier.info();
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        model: ModelSummary {
            name: info.name.clone(),
            num_trees: state.classifier.num_trees(),
            accuracy: info.accuracy,
        },
    };

    Json(response)
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to install tracing subscriber");
}

/// Run the server with rate limiting and the Prometheus exporter attached
pub async fn run_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::from_config(&config)?);
    info!(
        model = %state.classifier.info().name,
        policy = ?state.advice_policy,
        "Starting advisory API server on {}",
        config.bind_addr
    );

    // Exporter install failure is non-fatal; the server runs without /metrics.
    let metrics_handle = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            describe_counter!("assessments_total", "Assessment requests served");
            describe_histogram!(
                "assessment_latency_seconds",
                "End-to-end assessment handler latency"
            );
            Some(handle)
        }
        Err(err) => {
            warn!("Prometheus exporter unavailable, /metrics disabled: {err}");
            None
        }
    };

    let mut app = create_router(state);
    if let Some(handle) = metrics_handle {
        app = app.route("/metrics", get(move || async move { handle.render() }));
    }
    let app = app.layer(GovernorLayer {
        config: rate_limit::governor_config(&config.rate_limit),
    });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
