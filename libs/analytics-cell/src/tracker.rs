// libs/analytics-cell/src/tracker.rs
use serde_json::{json, Value};
use std::sync::Mutex;
use tracing::{debug, info};

use shared_config::AppConfig;

pub const EVENT_APPOINTMENT_SUBMITTED: &str = "appointment_submitted";

pub trait EventTracker: Send + Sync {
    fn track(&self, event: &str, data: Value);
}

/// Log-backed tracker; stands in for a real analytics pipeline.
pub struct TracingEventTracker {
    enabled: bool,
}

impl TracingEventTracker {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            enabled: config.analytics_enabled,
        }
    }
}

impl Default for TracingEventTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventTracker for TracingEventTracker {
    fn track(&self, event: &str, data: Value) {
        if !self.enabled {
            debug!("Analytics disabled, dropping event {}", event);
            return;
        }
        info!(target: "analytics", "Event tracked: {} {}", event, data);
    }
}

/// Records a successful booking submission. Only coarse facts leave the form:
/// which department, and whether symptoms were described.
pub fn track_form_submission(
    tracker: &dyn EventTracker,
    department: Option<&str>,
    has_symptoms: bool,
) {
    tracker.track(
        EVENT_APPOINTMENT_SUBMITTED,
        json!({
            "department": department,
            "has_symptoms": has_symptoms,
        }),
    );
}

/// Captures events in memory for assertions.
#[derive(Default)]
pub struct RecordingEventTracker {
    events: Mutex<Vec<(String, Value)>>,
}

impl RecordingEventTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(String, Value)> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl EventTracker for RecordingEventTracker {
    fn track(&self, event: &str, data: Value) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((event.to_string(), data));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_submission_event_carries_department_and_symptom_flag() {
        let tracker = RecordingEventTracker::new();

        track_form_submission(&tracker, Some("Cardiology"), true);

        let events = tracker.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, EVENT_APPOINTMENT_SUBMITTED);
        assert_eq!(
            events[0].1,
            json!({"department": "Cardiology", "has_symptoms": true})
        );
    }

    #[test]
    fn missing_department_tracks_as_null() {
        let tracker = RecordingEventTracker::new();

        track_form_submission(&tracker, None, false);

        let events = tracker.events();
        assert_eq!(
            events[0].1,
            json!({"department": null, "has_symptoms": false})
        );
    }
}
