//! Page Navigation Routes

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use session::{transition, NavAction, Page, PageView};

use crate::{ApiError, AppState};

/// View description for one page
pub async fn get_view(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
) -> Result<Json<PageView>, ApiError> {
    let page = Page::from_name(&page).ok_or(ApiError::UnknownPage(page))?;
    Ok(Json(session::render(page, state.classifier.info())))
}

/// Request body for one navigation step
#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub current: Page,
    pub action: NavAction,
}

/// Next page and its rendered view
#[derive(Debug, Serialize)]
pub struct NavigateResponse {
    pub next: Page,
    pub view: PageView,
}

/// Apply one navigation action
pub async fn navigate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NavigateRequest>,
) -> Json<NavigateResponse> {
    let next = transition(request.current, request.action);
    Json(NavigateResponse {
        next,
        view: session::render(next, state.classifier.info()),
    })
}
