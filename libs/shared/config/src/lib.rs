use std::env;
use std::time::Duration;
use tracing::warn;

/// Page behavior configuration, sourced from the environment with sensible
/// defaults for every knob. The page works out of the box without any of
/// these set.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Simulated backend latency for a booking submission, in milliseconds.
    pub submission_latency_ms: u64,
    /// How long the success banner stays visible before dismissing itself.
    pub banner_auto_dismiss_ms: u64,
    /// Where the theme preference flag is persisted.
    pub theme_preference_path: String,
    pub analytics_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            submission_latency_ms: 2000,
            banner_auto_dismiss_ms: 5000,
            theme_preference_path: "theme_preference.json".to_string(),
            analytics_enabled: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            submission_latency_ms: env_u64("SUBMISSION_LATENCY_MS", defaults.submission_latency_ms),
            banner_auto_dismiss_ms: env_u64("BANNER_AUTO_DISMISS_MS", defaults.banner_auto_dismiss_ms),
            theme_preference_path: env::var("THEME_PREFERENCE_PATH")
                .unwrap_or(defaults.theme_preference_path),
            analytics_enabled: env_bool("ANALYTICS_ENABLED", defaults.analytics_enabled),
        }
    }

    pub fn submission_latency(&self) -> Duration {
        Duration::from_millis(self.submission_latency_ms)
    }

    pub fn banner_auto_dismiss(&self) -> Duration {
        Duration::from_millis(self.banner_auto_dismiss_ms)
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} is not a valid number, using default {}", key, default);
            default
        }),
        Err(_) => default,
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} is not a valid boolean, using default {}", key, default);
            default
        }),
        Err(_) => default,
    }
}
