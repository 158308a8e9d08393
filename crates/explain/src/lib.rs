//! Prediction Explainability
//!
//! Produces a per-feature contribution breakdown for a single prediction by
//! substituting one feature at a time with a cohort-typical baseline value
//! and measuring the shift in dropout probability.

mod baseline;
mod breakdown;

pub use baseline::cohort_baseline;
pub use breakdown::{BaselineExplainer, Explainer, FeatureContribution};
