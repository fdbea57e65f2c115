pub mod tracker;

pub use tracker::{
    track_form_submission, EventTracker, RecordingEventTracker, TracingEventTracker,
    EVENT_APPOINTMENT_SUBMITTED,
};
