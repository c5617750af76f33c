use std::borrow::Cow;

/// Errors that can occur in the onboarding slice.
///
/// Field validation failures are not errors; they are recorded on the wizard
/// and reported through its error map so the flow stays recoverable.
#[tsp_derive::tsp_error]
pub enum OnboardingError {
    /// The requested operation is not valid in the wizard's current phase.
    #[error("Invalid wizard transition{}: {message}", format_context(.context))]
    InvalidTransition { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The registration record is frozen after submission.
    #[error("Registration record is frozen{}: {message}", format_context(.context))]
    FormFrozen { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
