//! Counselling Advisor
//!
//! Rule-based counselling engine: maps a student profile to an ordered list
//! of support suggestions. Rules are checked in a fixed order and every match
//! contributes one suggestion. A profile that matches nothing still receives
//! a low-risk monitoring note.

mod policy;
mod rules;

pub use policy::AdvicePolicy;
pub use rules::{advise, Suggestion, LOW_RISK_TOPIC, RULE_COUNT};
