//! Student Profile
//!
//! Defines the six-field student profile consumed by the dropout classifier
//! and the advisory rule engine, along with the fixed feature-vector ordering
//! the pretrained model was trained on. Field domains are documented on the
//! type itself.

mod profile;

pub use profile::{FieldBounds, StudentProfile, FEATURE_COUNT, FEATURE_NAMES};

use thiserror::Error;

/// Errors raised when a profile violates its documented domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// Field value outside the documented bounds
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}
