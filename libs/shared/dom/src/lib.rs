// libs/shared/dom/src/lib.rs
//
// Capability seams over the host page. The cells drive the page exclusively
// through these traits; the real page binds them to DOM elements, tests and
// the simulator bind them to the in-memory stubs below.

pub mod stubs;

use thiserror::Error;

/// The interactive control that triggers a booking submission and reflects
/// busy/idle state.
pub trait SubmitAffordance: Send + Sync {
    fn disable(&self);
    fn enable(&self);
    fn set_label(&self, text: &str);
    fn label(&self) -> String;
}

/// A transient visual element, e.g. the success banner. Visibility lifecycle
/// (auto-dismiss timing) is owned by the caller, not the visual.
pub trait Notification: Send + Sync {
    fn show(&self);
    fn hide(&self);
}

pub trait Viewport: Send + Sync {
    fn scroll_to_top(&self);
}

/// Clears every form field back to its empty/default state.
pub trait FormReset: Send + Sync {
    fn reset_all(&self);
}

/// Applies a theme attribute to the document root.
pub trait ThemeSink: Send + Sync {
    fn apply_theme(&self, theme_attr: &str);
}

#[derive(Debug, Clone, Error)]
pub enum PreferenceStoreError {
    #[error("Preference read failed: {0}")]
    Read(String),

    #[error("Preference write failed: {0}")]
    Write(String),
}

/// Key/value persistence for page preferences (the local-storage analogue).
/// Only one flag lives here today: the theme.
pub trait PreferenceStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceStoreError>;
    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceStoreError>;
}
