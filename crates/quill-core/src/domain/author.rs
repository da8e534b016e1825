use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{DomainError, ValidationError};
use crate::ports::AuthorRepository;
use crate::validation::AuthorValidator;

/// Author entity - a stored author with a unique name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: i64,
    name: String,
    phone_number: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Author {
    /// Rebuild an author from a stored row.
    ///
    /// For storage adapters only: the values are trusted to have passed
    /// validation when they were written.
    pub fn hydrate(
        id: i64,
        name: String,
        phone_number: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            phone_number,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ten bare digits, if the author has a phone number.
    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Stamp the time of the latest stored update.
    pub fn touched(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = Some(at);
        self
    }

    /// Validate and assign a new name. On rejection the author is unchanged.
    ///
    /// The uniqueness check sees every stored author, this one included, so
    /// re-assigning the current name is rejected as a duplicate.
    pub async fn set_name(
        &mut self,
        candidate: &str,
        authors: &dyn AuthorRepository,
    ) -> Result<(), DomainError> {
        self.name = AuthorValidator::new(authors)
            .validate_name(Some(candidate))
            .await?;
        Ok(())
    }

    /// Validate and assign a phone number. `None` or `""` clears it.
    pub fn set_phone_number(&mut self, candidate: Option<&str>) -> Result<(), ValidationError> {
        self.phone_number = AuthorValidator::validate_phone_number(candidate)?;
        Ok(())
    }
}

/// An author under construction. Each field is validated as it is set.
#[derive(Debug, Clone, Default)]
pub struct AuthorDraft {
    name: Option<String>,
    phone_number: Option<String>,
}

impl AuthorDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_name(
        &mut self,
        candidate: &str,
        authors: &dyn AuthorRepository,
    ) -> Result<&mut Self, DomainError> {
        self.name = Some(
            AuthorValidator::new(authors)
                .validate_name(Some(candidate))
                .await?,
        );
        Ok(self)
    }

    pub fn set_phone_number(&mut self, candidate: Option<&str>) -> Result<&mut Self, ValidationError> {
        self.phone_number = AuthorValidator::validate_phone_number(candidate)?;
        Ok(self)
    }

    /// Complete the draft. A name is required.
    pub fn finish(self) -> Result<NewAuthor, ValidationError> {
        let name = self.name.ok_or(ValidationError::EmptyName)?;
        Ok(NewAuthor {
            name,
            phone_number: self.phone_number,
        })
    }
}

/// A fully validated author that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    name: String,
    phone_number: Option<String>,
}

impl NewAuthor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    /// Turn into a stored author once storage has assigned an id.
    pub fn into_author(self, id: i64, created_at: DateTime<Utc>) -> Author {
        Author::hydrate(id, self.name, self.phone_number, created_at, None)
    }
}
