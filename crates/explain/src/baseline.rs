//! Cohort baseline used as the substitution reference.

use student_profile::StudentProfile;

/// A typical enrolled student, taken from the training cohort medians.
/// Substituting a feature with this profile's value answers "how much does
/// this student's value move the prediction away from a typical peer's".
pub fn cohort_baseline() -> StudentProfile {
    StudentProfile {
        course_code: 9238,
        tuition_up_to_date: true,
        sem1_units_approved: 5,
        sem2_units_approved: 5,
        age_at_enrollment: 20,
        scholarship_holder: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_is_in_domain() {
        assert!(cohort_baseline().validate().is_ok());
    }
}
