use std::borrow::Cow;
use tsp_store::StoreError;

/// Errors that can occur in the access slice.
#[tsp_derive::tsp_error]
pub enum AccessError {
    /// Underlying store failure.
    #[error("Store failure{}: {source}", format_context(.context))]
    Store { source: StoreError, context: Option<Cow<'static, str>> },
}
