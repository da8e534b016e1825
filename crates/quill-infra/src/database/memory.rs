//! In-memory repositories - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::domain::{Author, Category, NewAuthor, NewPost, Post};
use quill_core::error::RepoError;
use quill_core::ports::{AuthorRepository, BaseRepository, PostRepository};

/// Rows keyed by id, with ids handed out sequentially from 1.
struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

/// In-memory author store.
///
/// Name uniqueness is checked under the same write lock as the write, so two
/// concurrent inserts of one name cannot both succeed.
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryAuthorRepository {
    table: RwLock<Table<Author>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn name_taken(table: &Table<Author>, name: &str, except_id: Option<i64>) -> bool {
        table
            .rows
            .values()
            .any(|a| a.name() == name && Some(a.id()) != except_id)
    }
}

fn unique_name_violation(name: &str) -> RepoError {
    RepoError::Constraint(format!("authors.name must be unique: {name}"))
}

#[async_trait]
impl BaseRepository<Author, NewAuthor> for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, new: NewAuthor) -> Result<Author, RepoError> {
        let mut table = self.table.write().await;
        if Self::name_taken(&table, new.name(), None) {
            return Err(unique_name_violation(new.name()));
        }

        let id = table.next_id();
        let author = new.into_author(id, Utc::now());
        table.rows.insert(id, author.clone());
        Ok(author)
    }

    async fn update(&self, entity: Author) -> Result<Author, RepoError> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&entity.id()) {
            return Err(RepoError::NotFound);
        }
        if Self::name_taken(&table, entity.name(), Some(entity.id())) {
            return Err(unique_name_violation(entity.name()));
        }

        let author = entity.touched(Utc::now());
        table.rows.insert(author.id(), author.clone());
        Ok(author)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|a| a.name() == name).cloned())
    }
}

/// In-memory post store.
#[derive(Default)]
pub struct InMemoryPostRepository {
    table: RwLock<Table<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, NewPost> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, new: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        let id = table.next_id();
        let post = new.into_post(id, Utc::now());
        table.rows.insert(id, post.clone());
        Ok(post)
    }

    async fn update(&self, entity: Post) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        let slot = table
            .rows
            .get_mut(&entity.id())
            .ok_or(RepoError::NotFound)?;
        *slot = entity.touched(Utc::now());
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|p| p.category() == category)
            .cloned()
            .collect())
    }
}
