//! Onboarding feature slice: the registration wizard, its field validation
//! rules, and the post-submission checklist simulation.

pub mod checklist;
mod error;
pub mod validation;
pub mod wizard;

pub use crate::checklist::{ChecklistSimulator, default_board};
pub use crate::error::{OnboardingError, OnboardingErrorExt};
pub use crate::wizard::{StepOutcome, Wizard, WizardPhase};

use std::any::Any;
use std::time::Duration;
use tsp_domain::config::AppConfig;
use tsp_domain::registry::{FeatureSlice, InitializedSlice};

/// Onboarding feature state: per-session factories driven by config timing.
#[derive(Debug, Clone)]
pub struct Onboarding {
    config: tsp_domain::config::OnboardingConfig,
}

impl Onboarding {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self { config: config.onboarding.clone() }
    }

    /// Starts a fresh registration session.
    #[must_use]
    pub fn wizard(&self) -> Wizard {
        Wizard::new(&self.config)
    }

    /// Creates the checklist session for a submitted registration.
    #[must_use]
    pub fn checklist(&self) -> ChecklistSimulator {
        ChecklistSimulator::new(
            default_board(),
            Duration::from_millis(self.config.checklist_window_ms),
        )
    }
}

impl FeatureSlice for Onboarding {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the onboarding feature.
///
/// # Errors
///
/// Infallible today; the signature leaves room for config validation.
pub fn init(config: &AppConfig) -> Result<InitializedSlice, OnboardingError> {
    tracing::info!("Onboarding slice initialized");
    Ok(InitializedSlice::new(Onboarding::new(config)))
}
