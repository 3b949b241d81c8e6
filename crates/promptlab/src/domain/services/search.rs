//! Prompt search and filtering
//!
//! All criteria are conjunctive; the result order is deterministic
//! (`created_at` ascending, ties broken by id) so listings are stable
//! without pagination.

use uuid::Uuid;

use crate::domain::entities::Prompt;

/// List-query criteria; every supplied criterion must match
#[derive(Debug, Clone, Default)]
pub struct PromptFilter {
    /// Exact match on the prompt's collection
    pub collection_id: Option<Uuid>,
    /// Case-insensitive substring over title, content and description
    pub search: Option<String>,
    /// Exact, case-sensitive membership in the tag set
    pub tag: Option<String>,
}

impl PromptFilter {
    pub fn matches(&self, prompt: &Prompt) -> bool {
        if let Some(collection_id) = self.collection_id {
            if prompt.collection_id != Some(collection_id) {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let in_title = prompt.title.to_lowercase().contains(&needle);
            let in_content = prompt.content.to_lowercase().contains(&needle);
            let in_description = prompt
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
            if !(in_title || in_content || in_description) {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !prompt.tags.contains(tag) {
                return false;
            }
        }
        true
    }
}

/// Retain matching prompts and impose the canonical listing order
pub fn filter_and_sort(prompts: Vec<Prompt>, filter: &PromptFilter) -> Vec<Prompt> {
    let mut matched: Vec<Prompt> = prompts
        .into_iter()
        .filter(|prompt| filter.matches(prompt))
        .collect();
    matched.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    matched
}
