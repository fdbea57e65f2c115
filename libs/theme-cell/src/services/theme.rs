// libs/theme-cell/src/services/theme.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

use shared_dom::{PreferenceStore, ThemeSink};

use crate::models::{Theme, ThemeError, ThemeIcon};

/// The single persisted preference flag the page keeps.
pub const THEME_PREFERENCE_KEY: &str = "theme";

/// Owns the page theme: loads the persisted flag on init, applies the theme
/// through the sink, persists every toggle.
pub struct ThemeService {
    dark: AtomicBool,
    store: Arc<dyn PreferenceStore>,
    sink: Arc<dyn ThemeSink>,
}

impl ThemeService {
    pub fn new(store: Arc<dyn PreferenceStore>, sink: Arc<dyn ThemeSink>) -> Self {
        Self {
            dark: AtomicBool::new(false),
            store,
            sink,
        }
    }

    /// Loads the stored preference and applies it. A missing or unrecognized
    /// flag falls back to light, the page default.
    pub fn init(&self) -> Result<Theme, ThemeError> {
        let stored = self.store.load(THEME_PREFERENCE_KEY)?;
        let theme = stored
            .as_deref()
            .and_then(Theme::from_attribute)
            .unwrap_or_default();

        if stored.is_some() {
            debug!("Loaded persisted theme preference: {}", theme);
        }

        self.apply(theme);
        Ok(theme)
    }

    /// Flips the theme, applies it, and persists the new flag.
    pub fn toggle(&self) -> Result<Theme, ThemeError> {
        let theme = self.current().toggled();
        self.apply(theme);
        self.store.save(THEME_PREFERENCE_KEY, theme.attribute())?;
        info!("Theme toggled to {}", theme);
        Ok(theme)
    }

    pub fn current(&self) -> Theme {
        if self.dark.load(Ordering::SeqCst) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn icon(&self) -> ThemeIcon {
        self.current().icon()
    }

    fn apply(&self, theme: Theme) {
        self.dark.store(theme == Theme::Dark, Ordering::SeqCst);
        self.sink.apply_theme(theme.attribute());
    }
}
