//! User settings
//!
//! Display preferences persisted alongside the financial data. Always has a
//! value: missing or malformed stored settings fall back to these defaults.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse from the lowercase wire form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme (light <-> dark)
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// User display preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Currency symbol prefixed to formatted amounts
    pub currency: String,

    /// Date display pattern using DD/MM/YYYY tokens
    pub date_format: String,

    /// Color theme
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "₹".to_string(),
            date_format: "DD/MM/YYYY".to_string(),
            theme: Theme::Light,
        }
    }
}
