// libs/shared/dom/src/stubs.rs
//
// In-memory collaborator implementations. Cell tests and the page simulator
// use these instead of a real document.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::{
    FormReset, Notification, PreferenceStore, PreferenceStoreError, SubmitAffordance, ThemeSink,
    Viewport,
};

/// Submit button double that records every label it is given.
pub struct StubSubmitButton {
    enabled: AtomicBool,
    label: Mutex<String>,
    label_history: Mutex<Vec<String>>,
}

impl StubSubmitButton {
    pub fn new(label: &str) -> Self {
        Self {
            enabled: AtomicBool::new(true),
            label: Mutex::new(label.to_string()),
            label_history: Mutex::new(Vec::new()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub fn label_history(&self) -> Vec<String> {
        lock(&self.label_history).clone()
    }
}

impl SubmitAffordance for StubSubmitButton {
    fn disable(&self) {
        self.enabled.store(false, Ordering::SeqCst);
    }

    fn enable(&self) {
        self.enabled.store(true, Ordering::SeqCst);
    }

    fn set_label(&self, text: &str) {
        *lock(&self.label) = text.to_string();
        lock(&self.label_history).push(text.to_string());
    }

    fn label(&self) -> String {
        lock(&self.label).clone()
    }
}

#[derive(Default)]
pub struct StubBanner {
    visible: AtomicBool,
    show_count: AtomicUsize,
    hide_count: AtomicUsize,
}

impl StubBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    pub fn show_count(&self) -> usize {
        self.show_count.load(Ordering::SeqCst)
    }

    pub fn hide_count(&self) -> usize {
        self.hide_count.load(Ordering::SeqCst)
    }
}

impl Notification for StubBanner {
    fn show(&self) {
        self.visible.store(true, Ordering::SeqCst);
        self.show_count.fetch_add(1, Ordering::SeqCst);
    }

    fn hide(&self) {
        self.visible.store(false, Ordering::SeqCst);
        self.hide_count.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct StubViewport {
    scroll_to_top_count: AtomicUsize,
}

impl StubViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_to_top_count(&self) -> usize {
        self.scroll_to_top_count.load(Ordering::SeqCst)
    }
}

impl Viewport for StubViewport {
    fn scroll_to_top(&self) {
        self.scroll_to_top_count.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct StubFormReset {
    reset_count: AtomicUsize,
}

impl StubFormReset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset_count(&self) -> usize {
        self.reset_count.load(Ordering::SeqCst)
    }
}

impl FormReset for StubFormReset {
    fn reset_all(&self) {
        self.reset_count.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct StubThemeSink {
    applied: Mutex<Vec<String>>,
}

impl StubThemeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> Vec<String> {
        lock(&self.applied).clone()
    }

    pub fn last_applied(&self) -> Option<String> {
        lock(&self.applied).last().cloned()
    }
}

impl ThemeSink for StubThemeSink {
    fn apply_theme(&self, theme_attr: &str) {
        lock(&self.applied).push(theme_attr.to_string());
    }
}

#[derive(Default)]
pub struct InMemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        lock(&store.values).insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceStoreError> {
        Ok(lock(&self.values).get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceStoreError> {
        lock(&self.values).insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// Stub state is never left inconsistent by a panicking holder, so a poisoned
// lock is safe to keep using.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
