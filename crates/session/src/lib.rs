//! Dashboard Session
//!
//! Two-page navigation model for the counselling dashboard and the view
//! descriptions each page renders from. Navigation is a pure function of the
//! current page and a user action; the server keeps no per-client state.

mod nav;
mod view;

pub use nav::{transition, NavAction, Page};
pub use view::{render, FieldKind, FieldSpec, HomeView, Metric, PageView, PredictView};
