use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration shared across slices.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub storage: StorageConfig,
    pub onboarding: OnboardingConfig,
    pub voice: VoiceConfig,
    pub share: ShareConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Store root directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

/// Timing knobs for the simulated onboarding backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OnboardingConfig {
    /// Simulated network delay before a submission is accepted, in ms.
    pub submit_delay_ms: u64,
    /// Window over which incomplete checklist items auto-complete, in ms.
    pub checklist_window_ms: u64,
}

/// Voice command behavior knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Pause between scrolling a match into view and clicking it, in ms.
    pub click_delay_ms: u64,
    /// How long match feedback stays visible before auto-dismissal, in ms.
    pub feedback_ttl_ms: u64,
}

/// Shareable link generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Base URL that share identifiers are appended to.
    pub base_url: String,
}

// --- Default ---

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from("data") }
    }
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self { submit_delay_ms: 1_500, checklist_window_ms: 5_000 }
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self { click_delay_ms: 300, feedback_ttl_ms: 4_000 }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self { base_url: "https://seller-tsp.example/experience".to_owned() }
    }
}
