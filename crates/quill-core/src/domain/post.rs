use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::PostValidator;

/// Post category. Stored and serialized as its exact display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Fiction")]
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Fiction, Category::NonFiction];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::NonFiction => "Non-Fiction",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-sensitive: "fiction" is not a category.
impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or(ValidationError::InvalidCategory)
    }
}

/// Post entity - represents a blog post or article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    id: i64,
    title: String,
    content: Option<String>,
    category: Category,
    summary: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Rebuild a post from a stored row. For storage adapters only.
    pub fn hydrate(
        id: i64,
        title: String,
        content: Option<String>,
        category: Category,
        summary: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            category,
            summary,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
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

    pub fn set_title(&mut self, candidate: &str) -> Result<(), ValidationError> {
        self.title = PostValidator::validate_title(Some(candidate))?;
        Ok(())
    }

    pub fn set_content(&mut self, candidate: Option<&str>) -> Result<(), ValidationError> {
        self.content = PostValidator::validate_content(candidate)?;
        Ok(())
    }

    pub fn set_category(&mut self, candidate: &str) -> Result<(), ValidationError> {
        self.category = PostValidator::validate_category(Some(candidate))?;
        Ok(())
    }

    pub fn set_summary(&mut self, candidate: Option<&str>) -> Result<(), ValidationError> {
        self.summary = PostValidator::validate_summary(candidate)?;
        Ok(())
    }
}

/// A post under construction. Each field is validated as it is set.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    title: Option<String>,
    content: Option<String>,
    category: Option<Category>,
    summary: Option<String>,
}

impl PostDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, candidate: &str) -> Result<&mut Self, ValidationError> {
        self.title = Some(PostValidator::validate_title(Some(candidate))?);
        Ok(self)
    }

    pub fn set_content(&mut self, candidate: Option<&str>) -> Result<&mut Self, ValidationError> {
        self.content = PostValidator::validate_content(candidate)?;
        Ok(self)
    }

    pub fn set_category(&mut self, candidate: Option<&str>) -> Result<&mut Self, ValidationError> {
        self.category = Some(PostValidator::validate_category(candidate)?);
        Ok(self)
    }

    pub fn set_summary(&mut self, candidate: Option<&str>) -> Result<&mut Self, ValidationError> {
        self.summary = PostValidator::validate_summary(candidate)?;
        Ok(self)
    }

    /// Complete the draft. Title and category are required.
    pub fn finish(self) -> Result<NewPost, ValidationError> {
        Ok(NewPost {
            title: self.title.ok_or(ValidationError::EmptyTitle)?,
            content: self.content,
            category: self.category.ok_or(ValidationError::InvalidCategory)?,
            summary: self.summary,
        })
    }
}

/// A fully validated post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    content: Option<String>,
    category: Category,
    summary: Option<String>,
}

impl NewPost {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Turn into a stored post once storage has assigned an id.
    pub fn into_post(self, id: i64, created_at: DateTime<Utc>) -> Post {
        Post::hydrate(
            id,
            self.title,
            self.content,
            self.category,
            self.summary,
            created_at,
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_post() -> Post {
        let mut draft = PostDraft::new();
        draft
            .set_title("Top Ten Lighthouses")
            .unwrap()
            .set_content(Some(&"x".repeat(300)))
            .unwrap()
            .set_category(Some("Non-Fiction"))
            .unwrap();
        draft.finish().unwrap().into_post(1, Utc::now())
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("Fiction".parse::<Category>(), Ok(Category::Fiction));
        assert_eq!("Non-Fiction".parse::<Category>(), Ok(Category::NonFiction));
        assert_eq!(
            "fiction".parse::<Category>(),
            Err(ValidationError::InvalidCategory)
        );
        assert_eq!(Category::NonFiction.to_string(), "Non-Fiction");
    }

    #[test]
    fn test_draft_requires_title_and_category() {
        assert_eq!(
            PostDraft::new().finish().unwrap_err(),
            ValidationError::EmptyTitle
        );

        let mut draft = PostDraft::new();
        draft.set_title("Guess Who Called").unwrap();
        assert_eq!(draft.finish().unwrap_err(), ValidationError::InvalidCategory);
    }

    #[test]
    fn test_draft_optional_fields_default_to_none() {
        let mut draft = PostDraft::new();
        draft
            .set_title("Guess Who Called")
            .unwrap()
            .set_category(Some("Fiction"))
            .unwrap();
        let post = draft.finish().unwrap();
        assert_eq!(post.content(), None);
        assert_eq!(post.summary(), None);
    }

    #[test]
    fn test_every_assignment_revalidates() {
        let mut post = stored_post();
        post.set_summary(Some("short")).unwrap();
        assert_eq!(post.summary(), Some("short"));

        assert_eq!(
            post.set_summary(Some(&"s".repeat(251))),
            Err(ValidationError::SummaryTooLong)
        );
        assert_eq!(post.summary(), Some("short"));

        post.set_summary(None).unwrap();
        assert_eq!(post.summary(), None);
    }

    #[test]
    fn test_rejected_setters_leave_post_unchanged() {
        let mut post = stored_post();
        let before = post.clone();

        assert!(post.set_title("Plain title").is_err());
        assert!(post.set_content(Some("too short")).is_err());
        assert!(post.set_category("Mystery").is_err());
        assert_eq!(post, before);
    }

    #[test]
    fn test_serialized_layout() {
        let json = serde_json::to_value(stored_post()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Top Ten Lighthouses");
        assert_eq!(json["category"], "Non-Fiction");
        assert!(json["summary"].is_null());
    }
}
