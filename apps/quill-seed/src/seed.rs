//! Seed file format and loader.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use quill_core::DomainError;
use quill_core::service::{CreateAuthor, CreatePost};

use crate::state::AppState;

/// Records to load, in file order.
#[derive(Debug, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub authors: Vec<CreateAuthor>,
    #[serde(default)]
    pub posts: Vec<CreatePost>,
}

impl SeedFile {
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing seed file {}", path.display()))
    }
}

/// A record that validation or storage refused.
#[derive(Debug)]
pub struct Rejection {
    pub kind: &'static str,
    pub index: usize,
    pub error: DomainError,
}

#[derive(Debug, Default)]
pub struct SeedReport {
    pub authors_created: usize,
    pub posts_created: usize,
    pub rejected: Vec<Rejection>,
}

/// Write every record through the services. A rejected record is logged and
/// recorded; loading carries on with the next one.
pub async fn load(state: &AppState, seed: SeedFile) -> SeedReport {
    let mut report = SeedReport::default();

    for (index, author) in seed.authors.into_iter().enumerate() {
        match state.authors.create(author).await {
            Ok(_) => report.authors_created += 1,
            Err(error) => {
                tracing::warn!(index, %error, "Author rejected");
                report.rejected.push(Rejection {
                    kind: "author",
                    index,
                    error,
                });
            }
        }
    }

    for (index, post) in seed.posts.into_iter().enumerate() {
        match state.posts.create(post).await {
            Ok(_) => report.posts_created += 1,
            Err(error) => {
                tracing::warn!(index, %error, "Post rejected");
                report.rejected.push(Rejection {
                    kind: "post",
                    index,
                    error,
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::ValidationError;

    const SEED: &str = r#"{
        "authors": [
            {"name": "Jane Doe", "phone_number": "(555) 123-4567"},
            {"name": "Jane Doe"},
            {"name": "", "phone_number": null}
        ],
        "posts": [
            {"title": "Guess Who Wrote This", "category": "Fiction", "summary": "A teaser"},
            {"title": "Guess Again", "category": "Mystery"}
        ]
    }"#;

    #[tokio::test]
    async fn test_load_reports_each_rejection() {
        let state = AppState::new(None).await;
        let seed: SeedFile = serde_json::from_str(SEED).unwrap();

        let report = load(&state, seed).await;

        assert_eq!(report.authors_created, 1);
        assert_eq!(report.posts_created, 1);

        let rejected: Vec<_> = report
            .rejected
            .iter()
            .map(|r| (r.kind, r.index, r.error.as_validation().cloned()))
            .collect();
        assert_eq!(
            rejected,
            vec![
                ("author", 1, Some(ValidationError::DuplicateName)),
                ("author", 2, Some(ValidationError::EmptyName)),
                ("post", 1, Some(ValidationError::InvalidCategory)),
            ]
        );

        let jane = state.authors.find_by_name("Jane Doe").await.unwrap().unwrap();
        assert_eq!(jane.phone_number(), Some("5551234567"));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let seed: SeedFile = serde_json::from_str("{}").unwrap();
        assert!(seed.authors.is_empty());
        assert!(seed.posts.is_empty());
    }
}
