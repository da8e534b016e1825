use std::sync::Arc;

use serde::Deserialize;

use crate::domain::{Author, AuthorDraft};
use crate::error::{DomainError, RepoError, ValidationError};
use crate::ports::AuthorRepository;

/// Input for creating an author. A missing name deserializes as empty and is
/// rejected by validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAuthor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Fields to change on an existing author. `None` leaves a field untouched;
/// `Some(None)` clears the phone number.
#[derive(Debug, Clone, Default)]
pub struct AuthorChanges {
    pub name: Option<String>,
    pub phone_number: Option<Option<String>>,
}

/// Author writes.
pub struct AuthorService {
    authors: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(authors: Arc<dyn AuthorRepository>) -> Self {
        Self { authors }
    }

    /// Validate name and phone number, then insert.
    pub async fn create(&self, input: CreateAuthor) -> Result<Author, DomainError> {
        let mut draft = AuthorDraft::new();
        draft.set_name(&input.name, self.authors.as_ref()).await?;
        draft.set_phone_number(input.phone_number.as_deref())?;
        let new_author = draft.finish()?;

        let author = self
            .authors
            .insert(new_author)
            .await
            .map_err(name_conflict)?;

        tracing::info!(author_id = author.id(), "Author created");
        Ok(author)
    }

    /// Re-validate only the changed fields, then update.
    pub async fn update(&self, id: i64, changes: AuthorChanges) -> Result<Author, DomainError> {
        let mut author = self.get(id).await?;

        if let Some(name) = changes.name.as_deref() {
            author.set_name(name, self.authors.as_ref()).await?;
        }
        if let Some(phone_number) = changes.phone_number.as_ref() {
            author.set_phone_number(phone_number.as_deref())?;
        }

        let author = self.authors.update(author).await.map_err(name_conflict)?;

        tracing::info!(author_id = author.id(), "Author updated");
        Ok(author)
    }

    pub async fn get(&self, id: i64) -> Result<Author, DomainError> {
        self.authors
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "author",
                id,
            })
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Author>, DomainError> {
        Ok(self.authors.find_by_name(name).await?)
    }
}

/// Storage refused the write on its own uniqueness constraint: another writer
/// took the name between our check and our write.
fn name_conflict(err: RepoError) -> DomainError {
    match err {
        RepoError::Constraint(detail) => {
            tracing::warn!(%detail, "Author name conflict reported by storage");
            ValidationError::DuplicateName.into()
        }
        other => other.into(),
    }
}
