use std::borrow::Cow;
use tsp_store::StoreError;

/// Errors that can occur in the settings slice.
#[tsp_derive::tsp_error]
pub enum SettingsError {
    /// Underlying store failure.
    #[error("Store failure{}: {source}", format_context(.context))]
    Store { source: StoreError, context: Option<Cow<'static, str>> },
}
