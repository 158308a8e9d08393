//! Page enum and pure navigation transition.

use serde::{Deserialize, Serialize};

/// Dashboard pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Landing page with the project overview
    #[default]
    Home,
    /// Assessment form page
    Predict,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Predict => "predict",
        }
    }

    /// Looks a page up by its wire name.
    pub fn from_name(name: &str) -> Option<Page> {
        match name {
            "home" => Some(Page::Home),
            "predict" => Some(Page::Predict),
            _ => None,
        }
    }
}

/// User-initiated navigation actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    StartPrediction,
    BackToHome,
}

/// Next page for one action. Actions that do not apply to the current page
/// leave it unchanged.
pub fn transition(current: Page, action: NavAction) -> Page {
    match (current, action) {
        (Page::Home, NavAction::StartPrediction) => Page::Predict,
        (Page::Predict, NavAction::BackToHome) => Page::Home,
        (current, _) => current,
    }
}
