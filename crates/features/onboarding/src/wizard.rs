//! The registration wizard state machine.
//!
//! Phases: `Intro -> Step(0) -> ... -> Step(N-1) -> Submitted`. Advancing
//! validates exactly the current step's field set; a failed validation keeps
//! the phase and records field-scoped messages. Once submitted, the record is
//! frozen.

use crate::error::OnboardingError;
use crate::validation;
use fxhash::FxHashMap;
use std::time::Duration;
use tracing::{debug, info};
use tsp_domain::config::OnboardingConfig;
use tsp_domain::registration::{Field, RegistrationForm, STEP_COUNT, step_fields};

/// Where the wizard currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    /// Landing state, before the user begins.
    Intro,
    /// Collecting fields for step `0..STEP_COUNT`.
    Step(usize),
    /// The record was accepted. Frozen.
    Submitted,
}

/// Outcome of an advance or submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The current step validated and the wizard moved on.
    Advanced,
    /// Validation failed; the phase is unchanged and the error map holds the
    /// per-field messages.
    Rejected,
}

/// One registration session.
#[derive(Debug)]
pub struct Wizard {
    phase: WizardPhase,
    form: RegistrationForm,
    errors: FxHashMap<Field, &'static str>,
    completed_steps: usize,
    submit_delay: Duration,
}

impl Wizard {
    #[must_use]
    pub fn new(config: &OnboardingConfig) -> Self {
        Self {
            phase: WizardPhase::Intro,
            form: RegistrationForm::default(),
            errors: FxHashMap::default(),
            completed_steps: 0,
            submit_delay: Duration::from_millis(config.submit_delay_ms),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> WizardPhase {
        self.phase
    }

    #[must_use]
    pub const fn form(&self) -> &RegistrationForm {
        &self.form
    }

    /// Field-scoped validation messages from the last rejected advance.
    #[must_use]
    pub const fn errors(&self) -> &FxHashMap<Field, &'static str> {
        &self.errors
    }

    /// Highest step index the user has validated past. Never decreases.
    #[must_use]
    pub const fn completed_steps(&self) -> usize {
        self.completed_steps
    }

    /// Form-phase progress in percent: `completed_steps / STEP_COUNT`.
    ///
    /// Distinct from checklist progress; the two metrics are never combined.
    #[must_use]
    pub const fn progress_percent(&self) -> u8 {
        (self.completed_steps * 100 / STEP_COUNT) as u8
    }

    /// Begins the wizard: `Intro -> Step(0)`.
    ///
    /// # Errors
    ///
    /// Returns [`OnboardingError::InvalidTransition`] if the wizard already
    /// started.
    pub fn start(&mut self) -> Result<(), OnboardingError> {
        if self.phase != WizardPhase::Intro {
            return Err(OnboardingError::InvalidTransition {
                message: "start() is only valid from the intro phase".into(),
                context: None,
            });
        }
        self.phase = WizardPhase::Step(0);
        debug!("Registration wizard started");
        Ok(())
    }

    /// Updates one field and clears its recorded error.
    ///
    /// # Errors
    ///
    /// Returns [`OnboardingError::FormFrozen`] after submission and
    /// [`OnboardingError::InvalidTransition`] before [`Wizard::start`].
    pub fn set_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), OnboardingError> {
        match self.phase {
            WizardPhase::Intro => Err(OnboardingError::InvalidTransition {
                message: "Fields can only be edited after start()".into(),
                context: None,
            }),
            WizardPhase::Submitted => Err(OnboardingError::FormFrozen {
                message: field.as_str().into(),
                context: Some("The record cannot change after submission".into()),
            }),
            WizardPhase::Step(_) => {
                self.form.set(field, value);
                self.errors.remove(&field);
                Ok(())
            },
        }
    }

    /// Validates the current step and advances to the next one.
    ///
    /// On validation failure the phase does not change, per-field messages
    /// are recorded, and `completed_steps` does not advance.
    ///
    /// # Errors
    ///
    /// Returns [`OnboardingError::InvalidTransition`] outside `Step(_)` or on
    /// the final step, which is advanced through [`Wizard::submit`] instead.
    pub fn next(&mut self) -> Result<StepOutcome, OnboardingError> {
        let WizardPhase::Step(step) = self.phase else {
            return Err(OnboardingError::InvalidTransition {
                message: "next() is only valid while collecting a step".into(),
                context: None,
            });
        };

        if step == STEP_COUNT - 1 {
            return Err(OnboardingError::InvalidTransition {
                message: "The final step is completed through submit()".into(),
                context: None,
            });
        }

        if !self.validate_step(step) {
            return Ok(StepOutcome::Rejected);
        }

        self.phase = WizardPhase::Step(step + 1);
        self.completed_steps = self.completed_steps.max(step + 1);
        debug!(step = step + 1, "Wizard advanced");
        Ok(StepOutcome::Advanced)
    }

    /// Steps backwards, keeping all entered data and `completed_steps`.
    ///
    /// `Step(0)` returns to the intro. A no-op in the intro phase.
    ///
    /// # Errors
    ///
    /// Returns [`OnboardingError::FormFrozen`] after submission.
    pub fn back(&mut self) -> Result<(), OnboardingError> {
        match self.phase {
            WizardPhase::Submitted => Err(OnboardingError::FormFrozen {
                message: "back".into(),
                context: Some("The wizard cannot reopen after submission".into()),
            }),
            WizardPhase::Step(0) => {
                self.phase = WizardPhase::Intro;
                Ok(())
            },
            WizardPhase::Step(step) => {
                self.phase = WizardPhase::Step(step - 1);
                Ok(())
            },
            WizardPhase::Intro => Ok(()),
        }
    }

    /// Validates the final step and submits the record.
    ///
    /// The whole record is accepted without cross-field revalidation; earlier
    /// steps were gated individually. A simulated network delay (which always
    /// succeeds) elapses before the phase becomes `Submitted` and the record
    /// freezes.
    ///
    /// # Errors
    ///
    /// Returns [`OnboardingError::InvalidTransition`] unless the wizard is on
    /// the final step.
    pub async fn submit(&mut self) -> Result<StepOutcome, OnboardingError> {
        let WizardPhase::Step(step) = self.phase else {
            return Err(OnboardingError::InvalidTransition {
                message: "submit() is only valid while collecting a step".into(),
                context: None,
            });
        };

        if step != STEP_COUNT - 1 {
            return Err(OnboardingError::InvalidTransition {
                message: "submit() is only valid on the final step".into(),
                context: None,
            });
        }

        if !self.validate_step(step) {
            return Ok(StepOutcome::Rejected);
        }

        self.completed_steps = STEP_COUNT;
        tokio::time::sleep(self.submit_delay).await;
        self.phase = WizardPhase::Submitted;
        info!("Registration submitted");
        Ok(StepOutcome::Advanced)
    }

    /// Runs the rules for one step's field set, recording failures.
    fn validate_step(&mut self, step: usize) -> bool {
        let mut ok = true;
        for &field in step_fields(step) {
            match validation::validate_field(field, self.form.get(field)) {
                Ok(()) => {
                    self.errors.remove(&field);
                },
                Err(message) => {
                    self.errors.insert(field, message);
                    ok = false;
                },
            }
        }
        ok
    }
}
