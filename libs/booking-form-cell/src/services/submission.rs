// libs/booking-form-cell/src/services/submission.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use analytics_cell::{track_form_submission, EventTracker};
use shared_config::AppConfig;
use shared_dom::{FormReset, SubmitAffordance, Viewport};

use crate::models::{BookingFormError, BookingRequest, SubmissionState};
use crate::services::banner::SuccessBanner;
use crate::services::validation::FormValidationService;

/// Label shown on the submit button while a booking is in flight.
pub const BUSY_LABEL: &str = "Booking...";

/// Drives the booking form through its submission lifecycle:
/// validate, disable the button, wait out the simulated backend latency,
/// then reset the form and surface the success banner.
///
/// At most one submission is in flight at a time; the disabled button
/// enforces this on the page, the in-flight guard enforces it here.
pub struct BookingSubmissionService {
    validation: FormValidationService,
    button: Arc<dyn SubmitAffordance>,
    banner: Arc<SuccessBanner>,
    viewport: Arc<dyn Viewport>,
    form: Arc<dyn FormReset>,
    tracker: Option<Arc<dyn EventTracker>>,
    latency: Duration,
    in_flight: AtomicBool,
    is_shutdown: AtomicBool,
}

impl BookingSubmissionService {
    pub fn new(
        config: &AppConfig,
        button: Arc<dyn SubmitAffordance>,
        banner: Arc<SuccessBanner>,
        viewport: Arc<dyn Viewport>,
        form: Arc<dyn FormReset>,
    ) -> Self {
        Self {
            validation: FormValidationService::new(),
            button,
            banner,
            viewport,
            form,
            tracker: None,
            latency: config.submission_latency(),
            in_flight: AtomicBool::new(false),
            is_shutdown: AtomicBool::new(false),
        }
    }

    pub fn with_tracker(mut self, tracker: Arc<dyn EventTracker>) -> Self {
        self.tracker = Some(tracker);
        self
    }

    pub fn validation(&self) -> &FormValidationService {
        &self.validation
    }

    /// Submits one booking attempt. Validation failures are returned
    /// synchronously and leave the form untouched; a valid request runs the
    /// full simulated booking before resolving.
    pub async fn submit(&self, request: &BookingRequest) -> Result<(), BookingFormError> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(BookingFormError::ShutDown);
        }

        let report = self.validation.validate(request);
        if !report.is_valid() {
            warn!(
                "Booking form rejected with {} validation errors",
                report.errors().len()
            );
            return Err(BookingFormError::ValidationFailed(report));
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("Booking submission attempted while one is already in flight");
            return Err(BookingFormError::SubmissionInFlight);
        }

        info!(
            "Booking submission started for department {:?}",
            request.department
        );

        let original_label = self.button.label();
        self.button.disable();
        self.button.set_label(BUSY_LABEL);

        // Simulated backend round trip; a real implementation would await the
        // booking API here with its own timeout and retry policy.
        sleep(self.latency).await;

        if self.is_shutdown.load(Ordering::SeqCst) {
            self.in_flight.store(false, Ordering::SeqCst);
            debug!("Controller shut down mid-flight, leaving the page alone");
            return Err(BookingFormError::ShutDown);
        }

        self.form.reset_all();
        self.button.set_label(&original_label);
        self.button.enable();
        self.banner.show();
        self.viewport.scroll_to_top();
        self.in_flight.store(false, Ordering::SeqCst);

        if let Some(tracker) = &self.tracker {
            track_form_submission(
                tracker.as_ref(),
                request.department.as_deref(),
                request.has_symptoms(),
            );
        }

        info!("Booking submission completed");
        Ok(())
    }

    /// User closed the success banner.
    pub fn dismiss_success(&self) {
        self.banner.dismiss();
    }

    pub fn state(&self) -> SubmissionState {
        if self.in_flight.load(Ordering::SeqCst) {
            SubmissionState::Submitting
        } else if self.banner.is_visible() {
            SubmissionState::SucceededRecently
        } else {
            SubmissionState::Idle
        }
    }

    /// Tears the controller down: pending timers complete without touching
    /// the collaborators.
    pub fn shutdown(&self) {
        info!("Shutting down booking form controller");
        self.is_shutdown.store(true, Ordering::SeqCst);
        self.banner.shutdown();
    }
}
