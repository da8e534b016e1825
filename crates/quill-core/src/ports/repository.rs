use async_trait::async_trait;

use crate::domain::{Author, Category, NewAuthor, NewPost, Post};
use crate::error::RepoError;

/// Generic repository trait over the storage collaborator.
///
/// `T` is the stored entity, `N` the validated-but-unsaved form that `insert`
/// accepts. Ids are assigned by storage.
#[async_trait]
pub trait BaseRepository<T, N>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, RepoError>;

    /// Store a new entity, assigning its id and creation time.
    async fn insert(&self, new: N) -> Result<T, RepoError>;

    /// Overwrite a stored entity, stamping its update time.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: i64) -> Result<(), RepoError>;
}

/// Author repository.
///
/// Implementations must refuse a second author with the same name and report
/// it as [`RepoError::Constraint`].
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, NewAuthor> {
    /// Exact, case-sensitive lookup by name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, NewPost> {
    async fn find_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError>;
}
