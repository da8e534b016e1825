use crate::error::{DomainError, ValidationError};
use crate::ports::AuthorRepository;

use super::{non_empty, validate_field};

const ENTITY: &str = "author";

/// Number of digits a stored phone number must have.
const PHONE_DIGITS: usize = 10;

/// Validators for author fields.
///
/// Name validation needs to look at existing authors, so the validator borrows
/// the author repository. Phone number validation is pure.
pub struct AuthorValidator<'a> {
    authors: &'a dyn AuthorRepository,
}

impl<'a> AuthorValidator<'a> {
    pub fn new(authors: &'a dyn AuthorRepository) -> Self {
        Self { authors }
    }

    /// Accept a non-empty name that no stored author already has.
    ///
    /// The comparison is exact and case-sensitive. A failed lookup is reported
    /// as a repository error, not as a rejected name.
    pub async fn validate_name(&self, candidate: Option<&str>) -> Result<String, DomainError> {
        let name = validate_field(ENTITY, non_empty(candidate).ok_or(ValidationError::EmptyName))?;

        let outcome = match self.authors.find_by_name(name).await? {
            Some(existing) => {
                tracing::debug!(existing_id = existing.id(), "Author name already taken");
                Err(ValidationError::DuplicateName)
            }
            None => Ok(name.to_string()),
        };

        Ok(validate_field(ENTITY, outcome)?)
    }

    /// Strip formatting from a phone number and require exactly ten digits.
    ///
    /// A missing or empty phone number is accepted and stored as absent.
    pub fn validate_phone_number(
        candidate: Option<&str>,
    ) -> Result<Option<String>, ValidationError> {
        let Some(raw) = non_empty(candidate) else {
            return Ok(None);
        };

        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != PHONE_DIGITS {
            return validate_field(ENTITY, Err(ValidationError::InvalidPhoneNumber));
        }

        Ok(Some(digits))
    }
}
