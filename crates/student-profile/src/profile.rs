//! Profile entity and feature-vector assembly

use crate::ProfileError;
use serde::{Deserialize, Serialize};

/// Number of features the pretrained classifier expects
pub const FEATURE_COUNT: usize = 6;

/// Classifier column order.
///
/// The model was trained on exactly these columns in exactly this order;
/// reordering silently corrupts every prediction. All feature vectors in
/// this workspace are produced through [`StudentProfile::to_features`] so
/// the order lives in one place.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "sem2_units_approved",
    "tuition_up_to_date",
    "sem1_units_approved",
    "course_code",
    "age_at_enrollment",
    "scholarship_holder",
];

/// Inclusive bounds for one numeric profile field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub min: i64,
    pub max: i64,
}

impl FieldBounds {
    /// Whether a value lies inside the bounds
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One student's profile as entered in the intake form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Degree course code from the institutional catalogue
    pub course_code: u16,
    /// Whether tuition payments are current
    pub tuition_up_to_date: bool,
    /// Curricular units approved in the first semester
    pub sem1_units_approved: u8,
    /// Curricular units approved in the second semester
    pub sem2_units_approved: u8,
    /// Age when the student enrolled
    pub age_at_enrollment: u8,
    /// Whether the student holds a scholarship
    pub scholarship_holder: bool,
}

impl StudentProfile {
    /// Valid course codes
    pub const COURSE_CODE_BOUNDS: FieldBounds = FieldBounds { min: 0, max: 9999 };
    /// Valid approved-unit counts per semester
    pub const UNITS_BOUNDS: FieldBounds = FieldBounds { min: 0, max: 20 };
    /// Valid enrollment ages
    pub const AGE_BOUNDS: FieldBounds = FieldBounds { min: 16, max: 60 };

    /// Validate every field against its documented domain.
    ///
    /// The form layer enforces these same bounds upstream; this check exists
    /// so a profile that bypassed the form cannot reach the classifier.
    pub fn validate(&self) -> Result<(), ProfileError> {
        check(
            "course_code",
            self.course_code as i64,
            Self::COURSE_CODE_BOUNDS,
        )?;
        check(
            "sem1_units_approved",
            self.sem1_units_approved as i64,
            Self::UNITS_BOUNDS,
        )?;
        check(
            "sem2_units_approved",
            self.sem2_units_approved as i64,
            Self::UNITS_BOUNDS,
        )?;
        check(
            "age_at_enrollment",
            self.age_at_enrollment as i64,
            Self::AGE_BOUNDS,
        )?;
        Ok(())
    }

    /// Assemble the classifier feature vector in the trained column order
    /// (see [`FEATURE_NAMES`]). Booleans encode as 0.0 / 1.0.
    pub fn to_features(&self) -> [f64; FEATURE_COUNT] {
        [
            self.sem2_units_approved as f64,
            if self.tuition_up_to_date { 1.0 } else { 0.0 },
            self.sem1_units_approved as f64,
            self.course_code as f64,
            self.age_at_enrollment as f64,
            if self.scholarship_holder { 1.0 } else { 0.0 },
        ]
    }

    /// Copy of this profile with one feature column taken from `donor`.
    ///
    /// `column` indexes [`FEATURE_NAMES`]; an out-of-range column returns an
    /// unmodified copy. Used by attribution to substitute single features
    /// while staying inside the documented domain.
    pub fn with_column_from(&self, column: usize, donor: &StudentProfile) -> StudentProfile {
        let mut out = self.clone();
        match column {
            0 => out.sem2_units_approved = donor.sem2_units_approved,
            1 => out.tuition_up_to_date = donor.tuition_up_to_date,
            2 => out.sem1_units_approved = donor.sem1_units_approved,
            3 => out.course_code = donor.course_code,
            4 => out.age_at_enrollment = donor.age_at_enrollment,
            5 => out.scholarship_holder = donor.scholarship_holder,
            _ => {}
        }
        out
    }
}

fn check(field: &'static str, value: i64, bounds: FieldBounds) -> Result<(), ProfileError> {
    if bounds.contains(value) {
        Ok(())
    } else {
        Err(ProfileError::OutOfRange {
            field,
            value,
            min: bounds.min,
            max: bounds.max,
        })
    }
}
