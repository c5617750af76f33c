use std::borrow::Cow;
use tsp_store::StoreError;

/// Errors that can occur in the catalog slice.
#[tsp_derive::tsp_error]
pub enum CatalogError {
    /// No experience exists under the requested share id. Corrupted payloads
    /// surface here too, after the store discards the bad key.
    #[error("Share not found{}: {message}", format_context(.context))]
    ShareNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The string is not a well-formed share id.
    #[error("Invalid share id{}: {message}", format_context(.context))]
    InvalidShareId { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Underlying store failure.
    #[error("Store failure{}: {source}", format_context(.context))]
    Store { source: StoreError, context: Option<Cow<'static, str>> },
}
