// libs/booking-form-cell/src/models.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ==============================================================================
// FORM FIELD NAMES
// ==============================================================================

pub const FIELD_PATIENT_NAME: &str = "patientName";
pub const FIELD_PATIENT_AGE: &str = "patientAge";
pub const FIELD_GENDER: &str = "gender";
pub const FIELD_DEPARTMENT: &str = "department";
pub const FIELD_PREFERRED_DATE: &str = "preferredDate";
pub const FIELD_SYMPTOMS: &str = "symptoms";

/// Required fields, in the order their errors are reported.
pub const REQUIRED_FIELDS: [&str; 5] = [
    FIELD_PATIENT_NAME,
    FIELD_PATIENT_AGE,
    FIELD_GENDER,
    FIELD_DEPARTMENT,
    FIELD_PREFERRED_DATE,
];

// ==============================================================================
// FORM INPUT MODELS
// ==============================================================================

/// Raw key/value snapshot of the booking form, as the page hands it over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormSnapshot {
    values: HashMap<String, String>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &str, value: &str) {
        self.values.insert(field.to_string(), value.to_string());
    }

    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.set(field, value);
        self
    }

    /// Trimmed value for a field; a missing or blank entry reads as `None`,
    /// matching the page treating an empty input as unset.
    pub fn value(&self, field: &str) -> Option<&str> {
        self.values
            .get(field)
            .map(|raw| raw.trim())
            .filter(|raw| !raw.is_empty())
    }
}

/// One booking attempt, extracted from a form snapshot. Values stay raw text
/// here; typed interpretation (age, date) happens during validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingRequest {
    pub patient_name: Option<String>,
    pub patient_age: Option<String>,
    pub gender: Option<String>,
    pub department: Option<String>,
    pub preferred_date: Option<String>,
    pub symptoms: Option<String>,
}

impl BookingRequest {
    pub fn from_snapshot(form: &FormSnapshot) -> Self {
        let field = |name: &str| form.value(name).map(str::to_string);

        Self {
            patient_name: field(FIELD_PATIENT_NAME),
            patient_age: field(FIELD_PATIENT_AGE),
            gender: field(FIELD_GENDER),
            department: field(FIELD_DEPARTMENT),
            preferred_date: field(FIELD_PREFERRED_DATE),
            symptoms: field(FIELD_SYMPTOMS),
        }
    }

    /// Raw value for one of the [`REQUIRED_FIELDS`], by form field name.
    pub fn required_value(&self, field: &str) -> Option<&str> {
        match field {
            FIELD_PATIENT_NAME => self.patient_name.as_deref(),
            FIELD_PATIENT_AGE => self.patient_age.as_deref(),
            FIELD_GENDER => self.gender.as_deref(),
            FIELD_DEPARTMENT => self.department.as_deref(),
            FIELD_PREFERRED_DATE => self.preferred_date.as_deref(),
            _ => None,
        }
    }

    pub fn parsed_age(&self) -> Option<i32> {
        self.patient_age.as_deref().and_then(|raw| raw.parse().ok())
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.preferred_date
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
    }

    pub fn has_symptoms(&self) -> bool {
        self.symptoms.is_some()
    }
}

// ==============================================================================
// VALIDATION MODELS
// ==============================================================================

/// Ordered, human-readable validation errors. Empty means the request is
/// acceptable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

#[derive(Debug, Clone)]
pub struct FormValidationRules {
    pub min_age: i32,
    pub max_age: i32,
}

impl Default for FormValidationRules {
    fn default() -> Self {
        Self {
            min_age: 1,
            max_age: 120,
        }
    }
}

// ==============================================================================
// SUBMISSION STATE
// ==============================================================================

/// Where the booking form is in its submission lifecycle. Lives only for the
/// page view; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Submitting,
    SucceededRecently,
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionState::Idle => write!(f, "idle"),
            SubmissionState::Submitting => write!(f, "submitting"),
            SubmissionState::SucceededRecently => write!(f, "succeeded_recently"),
        }
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum BookingFormError {
    #[error("Booking form validation failed: {}", .0.errors().join("; "))]
    ValidationFailed(ValidationReport),

    #[error("A booking submission is already in flight")]
    SubmissionInFlight,

    #[error("Booking form controller has been shut down")]
    ShutDown,
}
