// =====================================================================================
// BOOKING FORM CELL - APPOINTMENT FORM VALIDATION & SUBMISSION LIFECYCLE
// =====================================================================================
//
// This cell owns the booking page's one real state machine:
// - Field validation with ordered, human-readable errors
// - The simulated submission flow (busy button, fixed latency, form reset)
// - The success banner and its auto-dismiss window
//
// The page itself is reached only through the shared-dom collaborator traits.
//
// =====================================================================================

pub mod models;
pub mod services;

pub use models::{
    BookingFormError, BookingRequest, FormSnapshot, FormValidationRules, SubmissionState,
    ValidationReport, FIELD_DEPARTMENT, FIELD_GENDER, FIELD_PATIENT_AGE, FIELD_PATIENT_NAME,
    FIELD_PREFERRED_DATE, FIELD_SYMPTOMS, REQUIRED_FIELDS,
};

pub use services::{BookingSubmissionService, FormValidationService, SuccessBanner, BUSY_LABEL};
