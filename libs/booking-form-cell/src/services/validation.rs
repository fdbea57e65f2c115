// libs/booking-form-cell/src/services/validation.rs
use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::models::{BookingRequest, FormValidationRules, ValidationReport, REQUIRED_FIELDS};

/// Validates a booking request against the form rules. Pure: no side effects,
/// every check runs, errors accumulate in a fixed order.
pub struct FormValidationService {
    rules: FormValidationRules,
}

impl FormValidationService {
    pub fn new() -> Self {
        Self {
            rules: FormValidationRules::default(),
        }
    }

    pub fn with_rules(rules: FormValidationRules) -> Self {
        Self { rules }
    }

    pub fn validate(&self, request: &BookingRequest) -> ValidationReport {
        self.validate_with_today(request, Local::now().date_naive())
    }

    /// Same as [`validate`](Self::validate) with the reference date supplied,
    /// so date rules stay deterministic under test.
    pub fn validate_with_today(
        &self,
        request: &BookingRequest,
        today: NaiveDate,
    ) -> ValidationReport {
        let mut report = ValidationReport::default();

        for field in REQUIRED_FIELDS {
            if request.required_value(field).is_none() {
                report.push(format!("{} is required", humanize_field(field)));
            }
        }

        // Range rules only apply to values that parse; an absent or
        // unparseable entry is covered by the required check alone.
        if let Some(age) = request.parsed_age() {
            if age < self.rules.min_age || age > self.rules.max_age {
                report.push(format!(
                    "Age must be between {} and {}",
                    self.rules.min_age, self.rules.max_age
                ));
            }
        }

        if let Some(date) = request.parsed_date() {
            if date < today {
                report.push("Preferred date cannot be in the past");
            }
        }

        debug!(
            "Validated booking request for department {:?}: {} errors",
            request.department,
            report.errors().len()
        );
        report
    }
}

impl Default for FormValidationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns a camelCase field name into its error-message form:
/// a space before each internal capital, then all lowercase.
/// `patientAge` becomes "patient age".
fn humanize_field(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 2);
    for ch in field.chars() {
        if ch.is_ascii_uppercase() {
            out.push(' ');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::humanize_field;

    #[test]
    fn humanizes_camel_case_field_names() {
        assert_eq!(humanize_field("patientName"), "patient name");
        assert_eq!(humanize_field("patientAge"), "patient age");
        assert_eq!(humanize_field("preferredDate"), "preferred date");
        assert_eq!(humanize_field("gender"), "gender");
    }
}
