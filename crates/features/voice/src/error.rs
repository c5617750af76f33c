use std::borrow::Cow;

/// Errors that can occur in the voice slice.
///
/// Unmatched transcripts and missing elements are informational outcomes
/// ([`crate::MatchOutcome`]), not errors; they never end a session.
#[tsp_derive::tsp_error]
pub enum VoiceError {
    /// Internal logic errors.
    #[error("Internal voice error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
