//! Domain-level error types.

use thiserror::Error;

/// A rejected field value.
///
/// Every validation rule maps to exactly one variant, and the message names
/// the rule that was violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Author name cannot be empty")]
    EmptyName,

    #[error("Author name must be unique")]
    DuplicateName,

    #[error("Phone number must be exactly 10 digits")]
    InvalidPhoneNumber,

    #[error("Post title cannot be empty")]
    EmptyTitle,

    #[error("Title must contain one of the following phrases: Won't Believe, Secret, Top, Guess")]
    MissingClickbaitPhrase,

    #[error("Content must be at least 250 characters long")]
    ContentTooShort,

    #[error("Category must be one of: Fiction, Non-Fiction")]
    InvalidCategory,

    #[error("Summary cannot exceed 250 characters")]
    SummaryTooLong,
}

impl ValidationError {
    /// Name of the field whose assignment was rejected.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::DuplicateName => "name",
            Self::InvalidPhoneNumber => "phone_number",
            Self::EmptyTitle | Self::MissingClickbaitPhrase => "title",
            Self::ContentTooShort => "content",
            Self::InvalidCategory => "category",
            Self::SummaryTooLong => "summary",
        }
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i64 },

    #[error("Storage error: {0}")]
    Repository(#[from] RepoError),
}

impl DomainError {
    /// The validation error, if this failure was a rejected field.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_rule() {
        assert_eq!(
            ValidationError::DuplicateName.to_string(),
            "Author name must be unique"
        );
        assert_eq!(
            ValidationError::InvalidCategory.to_string(),
            "Category must be one of: Fiction, Non-Fiction"
        );
    }

    #[test]
    fn test_domain_error_wraps_validation() {
        let err: DomainError = ValidationError::ContentTooShort.into();
        assert_eq!(err.as_validation(), Some(&ValidationError::ContentTooShort));
        assert_eq!(
            err.to_string(),
            "Validation failed: Content must be at least 250 characters long"
        );
    }

    #[test]
    fn test_field_names() {
        assert_eq!(ValidationError::EmptyName.field(), "name");
        assert_eq!(ValidationError::InvalidPhoneNumber.field(), "phone_number");
        assert_eq!(ValidationError::SummaryTooLong.field(), "summary");
    }
}
