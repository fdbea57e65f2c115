pub mod store;
pub mod theme;

pub use store::FilePreferenceStore;
pub use theme::{ThemeService, THEME_PREFERENCE_KEY};
