//! Field validators - one function per validated field.
//!
//! Validators never touch an entity; they take a candidate value and return
//! the value to store, or the rule it broke. Entities and drafts call them
//! from their setters before assigning anything.

mod author;
mod post;

pub use author::AuthorValidator;
pub use post::{
    CLICKBAIT_PHRASES, MAX_SUMMARY_CHARS, MIN_CONTENT_CHARS, PostValidator, VALID_CATEGORIES,
};

use crate::error::ValidationError;

/// Passes a validator outcome through, logging a rejection against its entity.
///
/// Every validator routes its result through here so that rejections are
/// reported the same way regardless of which field failed.
pub(crate) fn validate_field<T>(
    entity: &'static str,
    outcome: Result<T, ValidationError>,
) -> Result<T, ValidationError> {
    outcome.inspect_err(|err| {
        tracing::debug!(entity, field = err.field(), error = %err, "Field assignment rejected");
    })
}

/// Treats an empty string the same as a missing value.
pub(crate) fn non_empty(candidate: Option<&str>) -> Option<&str> {
    candidate.filter(|value| !value.is_empty())
}
