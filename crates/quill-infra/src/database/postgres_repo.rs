//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};

use quill_core::domain::{Author, Category, NewAuthor, NewPost, Post};
use quill_core::error::RepoError;
use quill_core::ports::{AuthorRepository, BaseRepository, PostRepository};

use super::entity::author::{self, Entity as AuthorEntity};
use super::entity::post::{self, CategoryColumn, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL author repository. Name uniqueness is enforced by the
/// `authors.name` unique column.
pub type PostgresAuthorRepository = PostgresBaseRepository<AuthorEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl BaseRepository<Author, NewAuthor> for PostgresAuthorRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, RepoError> {
        Ok(self.find_model(id).await?.map(Into::into))
    }

    async fn insert(&self, new: NewAuthor) -> Result<Author, RepoError> {
        let model = author::ActiveModel::from(new)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(author_id = model.id, "Author row inserted");
        Ok(model.into())
    }

    async fn update(&self, entity: Author) -> Result<Author, RepoError> {
        let model = author::ActiveModel::from(entity)
            .update(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        self.delete_model(id).await
    }
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
        tracing::debug!(author_name = %name, "Finding author by name");

        let result = AuthorEntity::find()
            .filter(author::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl BaseRepository<Post, NewPost> for PostgresPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        Ok(self.find_model(id).await?.map(Into::into))
    }

    async fn insert(&self, new: NewPost) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(new)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(post_id = model.id, "Post row inserted");
        Ok(model.into())
    }

    async fn update(&self, entity: Post) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(entity)
            .update(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        self.delete_model(id).await
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Category.eq(CategoryColumn::from(category)))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
