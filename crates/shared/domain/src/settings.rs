//! Dashboard appearance settings.

use serde::{Deserialize, Serialize};

/// Dashboard color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Seller-configurable dashboard appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearanceSettings {
    pub theme: ThemeMode,
    pub font_family: String,
    pub logo_url: Option<String>,
    pub contact_email: String,
    pub contact_phone: String,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            font_family: "Inter".to_owned(),
            logo_url: None,
            contact_email: String::new(),
            contact_phone: String::new(),
        }
    }
}
