pub mod models;
pub mod services;

pub use models::{Theme, ThemeError, ThemeIcon};
pub use services::{FilePreferenceStore, ThemeService, THEME_PREFERENCE_KEY};
