use crate::domain::Category;
use crate::error::ValidationError;

use super::{non_empty, validate_field};

const ENTITY: &str = "post";

/// Phrases a post title must contain at least one of, compared case-insensitively.
pub const CLICKBAIT_PHRASES: [&str; 4] = ["Won't Believe", "Secret", "Top", "Guess"];

/// Accepted category names, compared exactly.
pub const VALID_CATEGORIES: [&str; 2] = ["Fiction", "Non-Fiction"];

/// Shortest accepted content, in characters.
pub const MIN_CONTENT_CHARS: usize = 250;

/// Longest accepted summary, in characters.
pub const MAX_SUMMARY_CHARS: usize = 250;

/// Validators for post fields. None of them need storage.
pub struct PostValidator;

impl PostValidator {
    /// Require a non-empty title containing a clickbait phrase.
    pub fn validate_title(candidate: Option<&str>) -> Result<String, ValidationError> {
        let title = validate_field(ENTITY, non_empty(candidate).ok_or(ValidationError::EmptyTitle))?;

        let lowered = title.to_lowercase();
        let has_phrase = CLICKBAIT_PHRASES
            .iter()
            .any(|phrase| lowered.contains(&phrase.to_lowercase()));
        if !has_phrase {
            return validate_field(ENTITY, Err(ValidationError::MissingClickbaitPhrase));
        }

        Ok(title.to_string())
    }

    /// Reject content shorter than [`MIN_CONTENT_CHARS`]. Empty content counts as none.
    pub fn validate_content(candidate: Option<&str>) -> Result<Option<String>, ValidationError> {
        match non_empty(candidate) {
            Some(content) if content.chars().count() < MIN_CONTENT_CHARS => {
                validate_field(ENTITY, Err(ValidationError::ContentTooShort))
            }
            content => Ok(content.map(str::to_string)),
        }
    }

    /// Require one of the fixed categories. A missing category is rejected.
    pub fn validate_category(candidate: Option<&str>) -> Result<Category, ValidationError> {
        validate_field(
            ENTITY,
            candidate
                .ok_or(ValidationError::InvalidCategory)
                .and_then(str::parse),
        )
    }

    /// Reject summaries longer than [`MAX_SUMMARY_CHARS`]. Empty summary counts as none.
    pub fn validate_summary(candidate: Option<&str>) -> Result<Option<String>, ValidationError> {
        match non_empty(candidate) {
            Some(summary) if summary.chars().count() > MAX_SUMMARY_CHARS => {
                validate_field(ENTITY, Err(ValidationError::SummaryTooLong))
            }
            summary => Ok(summary.map(str::to_string)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_title_with_phrase_is_returned_unchanged() {
        assert_eq!(
            PostValidator::validate_title(Some("The Secret No One Tells You")),
            Ok("The Secret No One Tells You".to_string())
        );
        assert_eq!(
            PostValidator::validate_title(Some("you WON'T BELIEVE this")),
            Ok("you WON'T BELIEVE this".to_string())
        );
    }

    #[test]
    fn test_title_rules() {
        assert_eq!(
            PostValidator::validate_title(None),
            Err(ValidationError::EmptyTitle)
        );
        assert_eq!(
            PostValidator::validate_title(Some("")),
            Err(ValidationError::EmptyTitle)
        );
        assert_eq!(
            PostValidator::validate_title(Some("A calm afternoon")),
            Err(ValidationError::MissingClickbaitPhrase)
        );
    }

    #[test]
    fn test_phrase_may_sit_inside_a_word() {
        assert!(PostValidator::validate_title(Some("Stopwatch tricks")).is_ok());
    }

    #[test]
    fn test_content_length_boundary() {
        assert_eq!(
            PostValidator::validate_content(Some(&"x".repeat(249))),
            Err(ValidationError::ContentTooShort)
        );
        assert_eq!(
            PostValidator::validate_content(Some(&"x".repeat(250))),
            Ok(Some("x".repeat(250)))
        );
        assert_eq!(PostValidator::validate_content(None), Ok(None));
        assert_eq!(PostValidator::validate_content(Some("")), Ok(None));
    }

    #[test]
    fn test_content_length_counts_characters() {
        // 250 two-byte characters
        assert!(PostValidator::validate_content(Some(&"é".repeat(250))).is_ok());
        assert!(PostValidator::validate_content(Some(&"é".repeat(125))).is_err());
    }

    #[test]
    fn test_category_membership() {
        assert_eq!(
            PostValidator::validate_category(Some("Fiction")),
            Ok(Category::Fiction)
        );
        assert_eq!(
            PostValidator::validate_category(Some("Non-Fiction")),
            Ok(Category::NonFiction)
        );
        for candidate in [Some("fiction"), Some("Mystery"), Some(""), None] {
            assert_eq!(
                PostValidator::validate_category(candidate),
                Err(ValidationError::InvalidCategory),
                "{candidate:?}"
            );
        }
    }

    #[test]
    fn test_summary_length_boundary() {
        assert_eq!(
            PostValidator::validate_summary(Some(&"s".repeat(250))),
            Ok(Some("s".repeat(250)))
        );
        assert_eq!(
            PostValidator::validate_summary(Some(&"s".repeat(251))),
            Err(ValidationError::SummaryTooLong)
        );
        assert_eq!(PostValidator::validate_summary(None), Ok(None));
    }

    proptest! {
        #[test]
        fn prop_titles_without_phrases_fail(title in "[a-fh-z ]{1,40}") {
            // No 'g' or apostrophe, so only "top" and "secret" could appear.
            prop_assume!(!title.contains("top") && !title.contains("secret"));
            prop_assert_eq!(
                PostValidator::validate_title(Some(&title)),
                Err(ValidationError::MissingClickbaitPhrase)
            );
        }

        #[test]
        fn prop_secret_in_any_case_passes(
            prefix in "[a-z ]{0,20}",
            secret in "[sS][eE][cC][rR][eE][tT]",
            suffix in "[a-z ]{0,20}",
        ) {
            let title = format!("{prefix}{secret}{suffix}");
            prop_assert_eq!(PostValidator::validate_title(Some(&title)), Ok(title.clone()));
        }
    }
}
