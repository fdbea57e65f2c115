// libs/theme-cell/src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use shared_dom::PreferenceStoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value written to the document root's theme attribute and to the
    /// preference store.
    pub fn attribute(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_attribute(raw: &str) -> Option<Theme> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The toggle shows the theme you would switch to the mood of: sun while
    /// dark, moon while light.
    pub fn icon(self) -> ThemeIcon {
        match self {
            Theme::Light => ThemeIcon::Moon,
            Theme::Dark => ThemeIcon::Sun,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.attribute())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

impl ThemeIcon {
    pub fn class_name(self) -> &'static str {
        match self {
            ThemeIcon::Sun => "fas fa-sun",
            ThemeIcon::Moon => "fas fa-moon",
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ThemeError {
    #[error("Theme preference error: {0}")]
    Store(#[from] PreferenceStoreError),
}
