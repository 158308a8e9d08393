//! View descriptions rendered by the dashboard front end.

use risk_model::ModelInfo;
use serde::{Deserialize, Serialize};
use student_profile::{FieldBounds, StudentProfile};

use crate::nav::{NavAction, Page};

/// One headline metric shown on the landing page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

/// Landing page content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeView {
    pub title: String,
    pub subtitle: String,
    pub metrics: Vec<Metric>,
    pub overview: Vec<String>,
    pub action_label: String,
    pub action: NavAction,
}

/// Input widget kind for one form field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Bounded integer input
    Number { min: i64, max: i64 },
    /// Boolean selector
    Toggle,
}

/// One field of the assessment form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Wire name matching the profile field
    pub name: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldSpec {
    fn number(name: &str, label: &str, bounds: FieldBounds) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Number {
                min: bounds.min,
                max: bounds.max,
            },
        }
    }

    fn toggle(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Toggle,
        }
    }
}

/// Assessment form page content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictView {
    pub title: String,
    pub fields: Vec<FieldSpec>,
    pub submit_label: String,
    pub back_label: String,
    pub back: NavAction,
}

/// Content of one page, tagged by page name
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    Home(HomeView),
    Predict(PredictView),
}

/// Builds the view for one page from the loaded model's metadata.
pub fn render(page: Page, model: &ModelInfo) -> PageView {
    match page {
        Page::Home => PageView::Home(home_view(model)),
        Page::Predict => PageView::Predict(predict_view()),
    }
}

fn home_view(model: &ModelInfo) -> HomeView {
    HomeView {
        title: "AI-Powered Dropout Prediction & Counselling".to_string(),
        subtitle: "Predict at-risk students early, understand why, and provide tailored support"
            .to_string(),
        metrics: vec![
            Metric {
                label: "Dataset".to_string(),
                value: model.dataset.clone(),
            },
            Metric {
                label: "Model".to_string(),
                value: model.algorithm.clone(),
            },
            Metric {
                label: "Accuracy".to_string(),
                value: format!("≈ {:.0}%", model.accuracy * 100.0),
            },
        ],
        overview: vec![
            "Flag students at risk of dropping out".to_string(),
            "Explain the contributing factors behind each prediction".to_string(),
            "Suggest tailored counselling strategies".to_string(),
        ],
        action_label: "Start Prediction".to_string(),
        action: NavAction::StartPrediction,
    }
}

fn predict_view() -> PredictView {
    PredictView {
        title: "Student Risk Assessment".to_string(),
        fields: vec![
            FieldSpec::number(
                "course_code",
                "Course code",
                StudentProfile::COURSE_CODE_BOUNDS,
            ),
            FieldSpec::toggle("tuition_up_to_date", "Tuition up to date"),
            FieldSpec::number(
                "sem1_units_approved",
                "1st semester units approved",
                StudentProfile::UNITS_BOUNDS,
            ),
            FieldSpec::number(
                "sem2_units_approved",
                "2nd semester units approved",
                StudentProfile::UNITS_BOUNDS,
            ),
            FieldSpec::number(
                "age_at_enrollment",
                "Age at enrollment",
                StudentProfile::AGE_BOUNDS,
            ),
            FieldSpec::toggle("scholarship_holder", "Scholarship holder"),
        ],
        submit_label: "Predict".to_string(),
        back_label: "Back to Home".to_string(),
        back: NavAction::BackToHome,
    }
}
