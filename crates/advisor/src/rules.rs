//! Counselling rule table and evaluation.

use serde::{Deserialize, Serialize};
use student_profile::StudentProfile;
use tracing::debug;

/// Topic key used for the fallback suggestion when no rule matches
pub const LOW_RISK_TOPIC: &str = "low_risk";

const LOW_RISK_MESSAGE: &str =
    "No immediate risk factors detected. Continue routine monitoring.";

/// One counselling recommendation produced by the rule table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Stable key naming the rule that fired
    pub topic: String,
    /// Human-readable counselling action
    pub message: String,
}

impl Suggestion {
    fn new(topic: &str, message: &str) -> Self {
        Self {
            topic: topic.to_string(),
            message: message.to_string(),
        }
    }
}

struct AdviceRule {
    topic: &'static str,
    message: &'static str,
    applies: fn(&StudentProfile) -> bool,
}

/// Number of counselling rules in the table
pub const RULE_COUNT: usize = RULES.len();

/// Checked top to bottom; every matching rule appends one suggestion.
/// The unit and age comparisons are strict: four approved units or
/// enrollment at exactly thirty does not fire.
const RULES: [AdviceRule; 5] = [
    AdviceRule {
        topic: "tuition_support",
        message: "Encourage resolving tuition payments and review financial aid options.",
        applies: |p| !p.tuition_up_to_date,
    },
    AdviceRule {
        topic: "first_semester_support",
        message: "Recommend tutoring and mentoring for first-semester courses.",
        applies: |p| p.sem1_units_approved < 4,
    },
    AdviceRule {
        topic: "second_semester_support",
        message: "Recommend remedial sessions and study groups for the second semester.",
        applies: |p| p.sem2_units_approved < 4,
    },
    AdviceRule {
        topic: "mature_student_services",
        message: "Offer flexible scheduling to balance work and study commitments.",
        applies: |p| p.age_at_enrollment > 30,
    },
    AdviceRule {
        topic: "scholarship_outreach",
        message: "Encourage scholarship and grant applications.",
        applies: |p| !p.scholarship_holder,
    },
];

/// Evaluates the rule table for one profile.
///
/// The result is never empty and its order always follows the table. Calling
/// twice with the same profile yields identical output.
pub fn advise(profile: &StudentProfile) -> Vec<Suggestion> {
    let mut suggestions: Vec<Suggestion> = RULES
        .iter()
        .filter(|rule| (rule.applies)(profile))
        .map(|rule| Suggestion::new(rule.topic, rule.message))
        .collect();

    if suggestions.is_empty() {
        suggestions.push(Suggestion::new(LOW_RISK_TOPIC, LOW_RISK_MESSAGE));
    }

    debug!(count = suggestions.len(), "Evaluated counselling rules");
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn profile(
        tuition: bool,
        sem1: u8,
        sem2: u8,
        age: u8,
        scholarship: bool,
    ) -> StudentProfile {
        StudentProfile {
            course_code: 9238,
            tuition_up_to_date: tuition,
            sem1_units_approved: sem1,
            sem2_units_approved: sem2,
            age_at_enrollment: age,
            scholarship_holder: scholarship,
        }
    }

    fn topics(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.topic.as_str()).collect()
    }

    #[test]
    fn test_every_rule_fires_in_table_order() {
        let suggestions = advise(&profile(false, 2, 3, 38, false));
        assert_eq!(
            topics(&suggestions),
            vec![
                "tuition_support",
                "first_semester_support",
                "second_semester_support",
                "mature_student_services",
                "scholarship_outreach",
            ]
        );
    }

    #[test]
    fn test_struggling_young_student_skips_age_rule() {
        // Age 28 is under the mature-student cutoff, so four rules fire.
        let suggestions = advise(&profile(false, 2, 3, 28, false));
        assert_eq!(suggestions.len(), 4);
        assert_eq!(suggestions[0].topic, "tuition_support");
        assert!(!topics(&suggestions).contains(&"mature_student_services"));
    }

    #[test]
    fn test_no_matches_returns_low_risk_sentinel() {
        let suggestions = advise(&profile(true, 8, 10, 20, true));
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].topic, LOW_RISK_TOPIC);
    }

    #[test]
    fn test_single_rule_match() {
        let suggestions = advise(&profile(true, 4, 5, 24, false));
        assert_eq!(topics(&suggestions), vec!["scholarship_outreach"]);
    }

    #[test]
    fn test_sem1_boundary_is_strict() {
        let fires = |sem1| {
            topics(&advise(&profile(true, sem1, 10, 20, true)))
                .contains(&"first_semester_support")
        };
        assert!(!fires(4));
        assert!(fires(3));
    }

    #[test]
    fn test_sem2_boundary_is_strict() {
        let fires = |sem2| {
            topics(&advise(&profile(true, 10, sem2, 20, true)))
                .contains(&"second_semester_support")
        };
        assert!(!fires(4));
        assert!(fires(3));
    }

    #[test]
    fn test_age_boundary_is_strict() {
        let fires = |age| {
            topics(&advise(&profile(true, 10, 10, age, true)))
                .contains(&"mature_student_services")
        };
        assert!(!fires(30));
        assert!(fires(31));
    }

    #[test]
    fn test_suggestion_serializes_with_topic_and_message() {
        let json = serde_json::to_value(&advise(&profile(true, 4, 5, 24, false))[0]).unwrap();
        assert_eq!(json["topic"], "scholarship_outreach");
        assert!(json["message"].as_str().unwrap().contains("scholarship"));
    }

    fn any_profile() -> impl Strategy<Value = StudentProfile> {
        (
            0..=9999u16,
            any::<bool>(),
            0..=20u8,
            0..=20u8,
            16..=60u8,
            any::<bool>(),
        )
            .prop_map(|(course, tuition, sem1, sem2, age, scholarship)| {
                StudentProfile {
                    course_code: course,
                    tuition_up_to_date: tuition,
                    sem1_units_approved: sem1,
                    sem2_units_approved: sem2,
                    age_at_enrollment: age,
                    scholarship_holder: scholarship,
                }
            })
    }

    proptest! {
        #[test]
        fn prop_advise_never_empty(profile in any_profile()) {
            prop_assert!(!advise(&profile).is_empty());
        }

        #[test]
        fn prop_advise_is_idempotent(profile in any_profile()) {
            prop_assert_eq!(advise(&profile), advise(&profile));
        }

        #[test]
        fn prop_sentinel_only_when_no_rule_fires(profile in any_profile()) {
            let suggestions = advise(&profile);
            let any_rule_fires = !profile.tuition_up_to_date
                || profile.sem1_units_approved < 4
                || profile.sem2_units_approved < 4
                || profile.age_at_enrollment > 30
                || !profile.scholarship_holder;
            let has_sentinel = suggestions.iter().any(|s| s.topic == LOW_RISK_TOPIC);
            prop_assert_eq!(has_sentinel, !any_rule_fires);
            if has_sentinel {
                prop_assert_eq!(suggestions.len(), 1);
            }
        }

        #[test]
        fn prop_output_follows_table_order(profile in any_profile()) {
            let suggestions = advise(&profile);
            if suggestions.len() == 1 && suggestions[0].topic == LOW_RISK_TOPIC {
                return Ok(());
            }
            let table_order = [
                "tuition_support",
                "first_semester_support",
                "second_semester_support",
                "mature_student_services",
                "scholarship_outreach",
            ];
            let mut cursor = 0;
            for suggestion in &suggestions {
                let position = table_order[cursor..]
                    .iter()
                    .position(|t| *t == suggestion.topic);
                match position {
                    Some(offset) => cursor += offset + 1,
                    None => prop_assert!(false, "unexpected topic order"),
                }
            }
            prop_assert!(suggestions.len() <= RULE_COUNT);
        }
    }
}
