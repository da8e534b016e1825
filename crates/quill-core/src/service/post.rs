use std::sync::Arc;

use serde::Deserialize;

use crate::domain::{Category, Post, PostDraft};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Input for creating a post.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Fields to change on an existing post. `None` leaves a field untouched;
/// `Some(None)` clears an optional one.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<Option<String>>,
    pub category: Option<String>,
    pub summary: Option<Option<String>>,
}

/// Post writes.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    pub async fn create(&self, input: CreatePost) -> Result<Post, DomainError> {
        let mut draft = PostDraft::new();
        draft
            .set_title(&input.title)?
            .set_content(input.content.as_deref())?
            .set_category(input.category.as_deref())?
            .set_summary(input.summary.as_deref())?;

        let post = self.posts.insert(draft.finish()?).await?;

        tracing::info!(post_id = post.id(), category = %post.category(), "Post created");
        Ok(post)
    }

    pub async fn update(&self, id: i64, changes: PostChanges) -> Result<Post, DomainError> {
        let mut post = self.get(id).await?;

        if let Some(title) = changes.title.as_deref() {
            post.set_title(title)?;
        }
        if let Some(content) = changes.content.as_ref() {
            post.set_content(content.as_deref())?;
        }
        if let Some(category) = changes.category.as_deref() {
            post.set_category(category)?;
        }
        if let Some(summary) = changes.summary.as_ref() {
            post.set_summary(summary.as_deref())?;
        }

        let post = self.posts.update(post).await?;

        tracing::info!(post_id = post.id(), "Post updated");
        Ok(post)
    }

    pub async fn get(&self, id: i64) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "post",
                id,
            })
    }

    pub async fn list_by_category(&self, category: Category) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_by_category(category).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::ports::testing::StubPosts;

    fn secret_post(content_len: usize) -> CreatePost {
        CreatePost {
            title: "The Secret No One Tells You".to_string(),
            content: Some("x".repeat(content_len)),
            category: Some("Fiction".to_string()),
            summary: Some("short".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_valid_post() {
        let service = PostService::new(Arc::new(StubPosts::default()));
        let post = service.create(secret_post(250)).await.unwrap();

        assert_eq!(post.title(), "The Secret No One Tells You");
        assert_eq!(post.category(), Category::Fiction);
        assert_eq!(post.summary(), Some("short"));
    }

    #[tokio::test]
    async fn test_short_content_never_reaches_storage() {
        let posts = Arc::new(StubPosts::default());
        let service = PostService::new(posts.clone());

        let err = service.create(secret_post(100)).await.unwrap_err();
        assert_eq!(err.as_validation(), Some(&ValidationError::ContentTooShort));
        assert_eq!(posts.len(), 0);
    }

    #[tokio::test]
    async fn test_missing_category_is_rejected() {
        let service = PostService::new(Arc::new(StubPosts::default()));
        let err = service
            .create(CreatePost {
                category: None,
                ..secret_post(250)
            })
            .await
            .unwrap_err();
        assert_eq!(err.as_validation(), Some(&ValidationError::InvalidCategory));
    }

    #[tokio::test]
    async fn test_update_and_clear_fields() {
        let service = PostService::new(Arc::new(StubPosts::default()));
        let post = service.create(secret_post(250)).await.unwrap();

        let updated = service
            .update(
                post.id(),
                PostChanges {
                    category: Some("Non-Fiction".to_string()),
                    content: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.category(), Category::NonFiction);
        assert_eq!(updated.content(), None);
        assert_eq!(updated.title(), post.title());
    }

    #[tokio::test]
    async fn test_rejected_update_leaves_stored_post_unchanged() {
        let service = PostService::new(Arc::new(StubPosts::default()));
        let post = service.create(secret_post(250)).await.unwrap();

        let err = service
            .update(
                post.id(),
                PostChanges {
                    title: Some("Top Picks".to_string()),
                    category: Some("fiction".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.as_validation(), Some(&ValidationError::InvalidCategory));
        assert_eq!(service.get(post.id()).await.unwrap(), post);
    }

    #[tokio::test]
    async fn test_list_by_category() {
        let service = PostService::new(Arc::new(StubPosts::default()));
        service.create(secret_post(250)).await.unwrap();
        service
            .create(CreatePost {
                category: Some("Non-Fiction".to_string()),
                ..secret_post(300)
            })
            .await
            .unwrap();

        let fiction = service.list_by_category(Category::Fiction).await.unwrap();
        assert_eq!(fiction.len(), 1);
        assert_eq!(fiction[0].category(), Category::Fiction);
    }
}
