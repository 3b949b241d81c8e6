//! Prompt - A stored text template plus metadata
//!
//! Pure domain entity without infrastructure dependencies.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;

/// Upper bound on title length, matching the API contract.
pub const MAX_TITLE_LEN: usize = 200;
/// Upper bound on description length.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Prompt - A reusable text template with optional `{{name}}` placeholders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub collection_id: Option<Uuid>,
    /// Case-sensitive labels; the set keeps them deduplicated and
    /// surfaces them in lexicographic order.
    pub tags: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Prompt {
    /// Create a new prompt with a fresh id and matching timestamps
    pub fn new(
        title: String,
        content: String,
        description: Option<String>,
        collection_id: Option<Uuid>,
        tags: BTreeSet<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            description,
            collection_id,
            tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check structural invariants before any store interaction
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be empty".into()));
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(DomainError::Validation(format!(
                "title must be at most {} characters",
                MAX_TITLE_LEN
            )));
        }
        if self.content.is_empty() {
            return Err(DomainError::Validation("content must not be empty".into()));
        }
        if let Some(desc) = &self.description {
            if desc.chars().count() > MAX_DESCRIPTION_LEN {
                return Err(DomainError::Validation(format!(
                    "description must be at most {} characters",
                    MAX_DESCRIPTION_LEN
                )));
            }
        }
        validate_tags(&self.tags)?;
        Ok(())
    }
}

/// Tag labels must carry visible characters
pub fn validate_tags<'a, I>(tags: I) -> Result<(), DomainError>
where
    I: IntoIterator<Item = &'a String>,
{
    for tag in tags {
        if tag.trim().is_empty() {
            return Err(DomainError::Validation(
                "tags must not be empty or whitespace-only".into(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(labels: &[&str]) -> BTreeSet<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_assigns_id_and_equal_timestamps() {
        let prompt = Prompt::new(
            "Greeting".to_string(),
            "Hello {{name}}".to_string(),
            None,
            None,
            BTreeSet::new(),
        );
        assert_eq!(prompt.created_at, prompt.updated_at);
        assert!(prompt.validate().is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        let prompt = Prompt::new(
            "   ".to_string(),
            "content".to_string(),
            None,
            None,
            BTreeSet::new(),
        );
        assert!(matches!(
            prompt.validate(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_title_length_cap() {
        let prompt = Prompt::new(
            "t".repeat(MAX_TITLE_LEN + 1),
            "content".to_string(),
            None,
            None,
            BTreeSet::new(),
        );
        assert!(prompt.validate().is_err());
    }

    #[test]
    fn test_empty_content_rejected() {
        let prompt = Prompt::new(
            "title".to_string(),
            String::new(),
            None,
            None,
            BTreeSet::new(),
        );
        assert!(prompt.validate().is_err());
    }

    #[test]
    fn test_description_length_cap() {
        let prompt = Prompt::new(
            "title".to_string(),
            "content".to_string(),
            Some("d".repeat(MAX_DESCRIPTION_LEN + 1)),
            None,
            BTreeSet::new(),
        );
        assert!(prompt.validate().is_err());
    }

    #[test]
    fn test_blank_tag_rejected() {
        let prompt = Prompt::new(
            "title".to_string(),
            "content".to_string(),
            None,
            None,
            tags(&["ok", "  "]),
        );
        assert!(prompt.validate().is_err());
    }

    #[test]
    fn test_tags_deduplicate_and_sort() {
        let mut labels = BTreeSet::new();
        labels.insert("writing".to_string());
        labels.insert("ai".to_string());
        labels.insert("writing".to_string());

        let prompt = Prompt::new(
            "title".to_string(),
            "content".to_string(),
            None,
            None,
            labels,
        );
        let surfaced: Vec<&str> = prompt.tags.iter().map(String::as_str).collect();
        assert_eq!(surfaced, vec!["ai", "writing"]);
    }
}
