//! Prompt Application Service (Use Case)
//!
//! Orchestrates domain operations for prompt management: reference
//! validation before any write, full and partial updates, tag
//! mutation, rendering and listing.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use promptlab::domain::validate_tags;
use promptlab::{
    filter_and_sort, DomainError, Patch, Prompt, PromptFilter, PromptRepository, Template,
};

/// Application service for prompt operations
pub struct PromptService<R: PromptRepository> {
    repo: Arc<R>,
}

impl<R: PromptRepository> PromptService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// A supplied collection reference must name a live collection
    /// before any mutation is applied
    async fn check_reference(&self, collection_id: Uuid) -> Result<(), DomainError> {
        if !self.repo.collection_exists(collection_id).await? {
            return Err(DomainError::InvalidReference { collection_id });
        }
        Ok(())
    }

    /// Create a new prompt
    pub async fn create(
        &self,
        title: String,
        content: String,
        description: Option<String>,
        collection_id: Option<Uuid>,
        tags: BTreeSet<String>,
    ) -> Result<Prompt, DomainError> {
        if let Some(collection_id) = collection_id {
            self.check_reference(collection_id).await?;
        }

        let prompt = Prompt::new(title, content, description, collection_id, tags);
        prompt.validate()?;
        let saved = self.repo.save(&prompt).await?;

        tracing::info!("Created prompt: {} ({})", saved.title, saved.id);

        Ok(saved)
    }

    /// Get a prompt by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Prompt>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// List prompts matching the filter, with the post-filter total
    pub async fn list(&self, filter: &PromptFilter) -> Result<(Vec<Prompt>, usize), DomainError> {
        let prompts = filter_and_sort(self.repo.find_all().await?, filter);
        let total = prompts.len();
        Ok((prompts, total))
    }

    /// Full replace: every mutable field is set from the input, so an
    /// omitted optional clears the stored value
    pub async fn update(
        &self,
        id: Uuid,
        title: String,
        content: String,
        description: Option<String>,
        collection_id: Option<Uuid>,
        tags: BTreeSet<String>,
    ) -> Result<Prompt, DomainError> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))?;

        if let Some(collection_id) = collection_id {
            self.check_reference(collection_id).await?;
        }

        let updated = Prompt {
            id: current.id,
            title,
            content,
            description,
            collection_id,
            tags,
            created_at: current.created_at,
            updated_at: Utc::now(),
        };
        updated.validate()?;

        self.repo.save(&updated).await
    }

    /// Partial update: only supplied fields change
    pub async fn patch(
        &self,
        id: Uuid,
        title: Option<String>,
        content: Option<String>,
        description: Patch<String>,
        collection_id: Patch<Uuid>,
        tags: Option<BTreeSet<String>>,
    ) -> Result<Prompt, DomainError> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))?;

        if let Some(collection_id) = collection_id.as_set() {
            self.check_reference(*collection_id).await?;
        }

        let updated = Prompt {
            id: current.id,
            title: title.unwrap_or(current.title),
            content: content.unwrap_or(current.content),
            description: description.apply(current.description),
            collection_id: collection_id.apply(current.collection_id),
            tags: tags.unwrap_or(current.tags),
            created_at: current.created_at,
            updated_at: Utc::now(),
        };
        updated.validate()?;

        self.repo.save(&updated).await
    }

    /// Delete a prompt
    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted prompt: {}", id);
        }
        Ok(deleted)
    }

    /// Render the prompt's content against the supplied variables
    pub async fn render(
        &self,
        id: Uuid,
        variables: &HashMap<String, String>,
    ) -> Result<String, DomainError> {
        let prompt = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))?;

        Template::parse(&prompt.content).render(variables)
    }

    /// Placeholder names the prompt's content requires, without
    /// attempting a render
    pub async fn variables(&self, id: Uuid) -> Result<BTreeSet<String>, DomainError> {
        let prompt = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))?;

        Ok(Template::parse(&prompt.content).variable_names())
    }

    /// Add tags to a prompt; duplicates collapse into the set
    pub async fn add_tags(&self, id: Uuid, labels: Vec<String>) -> Result<Prompt, DomainError> {
        if labels.is_empty() {
            return Err(DomainError::Validation("tags input cannot be empty".into()));
        }
        validate_tags(&labels)?;

        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))?;

        let mut tags = current.tags.clone();
        tags.extend(labels);

        let updated = Prompt {
            tags,
            updated_at: Utc::now(),
            ..current
        };
        self.repo.save(&updated).await
    }

    /// Remove a tag from a prompt; unknown labels are NotFound
    pub async fn remove_tag(&self, id: Uuid, label: &str) -> Result<Prompt, DomainError> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))?;

        let mut tags = current.tags.clone();
        if !tags.remove(label) {
            return Err(DomainError::not_found_str("Tag", label));
        }

        let updated = Prompt {
            tags,
            updated_at: Utc::now(),
            ..current
        };
        self.repo.save(&updated).await
    }
}

#[cfg(test)]
mod tests {
    use crate::adapters::{MemoryPromptRepository, MemoryStore};
    use promptlab::Collection;

    use super::*;

    fn service() -> (Arc<MemoryStore>, PromptService<MemoryPromptRepository>) {
        let store = Arc::new(MemoryStore::new());
        let repo = Arc::new(MemoryPromptRepository::new(store.clone()));
        (store, PromptService::new(repo))
    }

    async fn seed_collection(store: &MemoryStore) -> Uuid {
        let collection = Collection::new("Writing".to_string(), None);
        let id = collection.id;
        store.inner.write().await.collections.insert(id, collection);
        id
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let (_store, service) = service();
        let created = service
            .create(
                "Greeting".to_string(),
                "Hello {{name}}".to_string(),
                Some("says hi".to_string()),
                None,
                BTreeSet::new(),
            )
            .await
            .unwrap();

        let fetched = service.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.title, created.title);
        assert_eq!(fetched.content, created.content);
        assert_eq!(fetched.description, created.description);
        assert_eq!(fetched.created_at, created.created_at);
        assert_eq!(fetched.updated_at, created.updated_at);
    }

    #[tokio::test]
    async fn test_create_with_unknown_collection_persists_nothing() {
        let (_store, service) = service();
        let err = service
            .create(
                "t".to_string(),
                "c".to_string(),
                None,
                Some(Uuid::new_v4()),
                BTreeSet::new(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidReference { .. }));

        let (prompts, total) = service.list(&PromptFilter::default()).await.unwrap();
        assert!(prompts.is_empty());
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_create_with_live_collection_succeeds() {
        let (store, service) = service();
        let collection_id = seed_collection(&store).await;

        let created = service
            .create(
                "t".to_string(),
                "c".to_string(),
                None,
                Some(collection_id),
                BTreeSet::new(),
            )
            .await
            .unwrap();
        assert_eq!(created.collection_id, Some(collection_id));
    }

    #[tokio::test]
    async fn test_patch_retains_omitted_fields() {
        let (_store, service) = service();
        let created = service
            .create(
                "old title".to_string(),
                "content".to_string(),
                Some("x".to_string()),
                None,
                BTreeSet::new(),
            )
            .await
            .unwrap();

        let patched = service
            .patch(
                created.id,
                Some("new".to_string()),
                None,
                Patch::Keep,
                Patch::Keep,
                None,
            )
            .await
            .unwrap();

        assert_eq!(patched.title, "new");
        assert_eq!(patched.content, "content");
        assert_eq!(patched.description, Some("x".to_string()));
        assert_eq!(patched.created_at, created.created_at);
        assert!(patched.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn test_patch_with_null_clears_description() {
        let (_store, service) = service();
        let created = service
            .create(
                "title".to_string(),
                "content".to_string(),
                Some("x".to_string()),
                None,
                BTreeSet::new(),
            )
            .await
            .unwrap();

        let patched = service
            .patch(created.id, None, None, Patch::Clear, Patch::Keep, None)
            .await
            .unwrap();
        assert_eq!(patched.description, None);
    }

    #[tokio::test]
    async fn test_update_clears_omitted_optionals() {
        let (store, service) = service();
        let collection_id = seed_collection(&store).await;
        let created = service
            .create(
                "title".to_string(),
                "content".to_string(),
                Some("x".to_string()),
                Some(collection_id),
                BTreeSet::new(),
            )
            .await
            .unwrap();

        let updated = service
            .update(
                created.id,
                "new".to_string(),
                "other content".to_string(),
                None,
                None,
                BTreeSet::new(),
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "new");
        assert_eq!(updated.description, None);
        assert_eq!(updated.collection_id, None);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_patch_with_unknown_collection_leaves_prompt_unchanged() {
        let (_store, service) = service();
        let created = service
            .create(
                "title".to_string(),
                "content".to_string(),
                None,
                None,
                BTreeSet::new(),
            )
            .await
            .unwrap();

        let err = service
            .patch(
                created.id,
                Some("mutated".to_string()),
                None,
                Patch::Keep,
                Patch::Set(Uuid::new_v4()),
                None,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidReference { .. }));

        let unchanged = service.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(unchanged.title, "title");
        assert_eq!(unchanged.updated_at, created.updated_at);
    }

    #[tokio::test]
    async fn test_update_unknown_prompt_is_not_found() {
        let (_store, service) = service();
        let err = service
            .update(
                Uuid::new_v4(),
                "t".to_string(),
                "c".to_string(),
                None,
                None,
                BTreeSet::new(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_render_through_service() {
        let (_store, service) = service();
        let created = service
            .create(
                "Order".to_string(),
                "Hello {{name}}, your {{item}} is ready".to_string(),
                None,
                None,
                BTreeSet::new(),
            )
            .await
            .unwrap();

        let mut variables = HashMap::new();
        variables.insert("name".to_string(), "Ana".to_string());

        let err = service.render(created.id, &variables).await.unwrap_err();
        assert!(matches!(err, DomainError::MissingVariable(name) if name == "item"));

        variables.insert("item".to_string(), "order".to_string());
        let rendered = service.render(created.id, &variables).await.unwrap();
        assert_eq!(rendered, "Hello Ana, your order is ready");

        // Rendering mutates nothing.
        let after = service.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(after.updated_at, created.updated_at);
    }

    #[tokio::test]
    async fn test_variables_reports_required_names() {
        let (_store, service) = service();
        let created = service
            .create(
                "Order".to_string(),
                "{{b}} then {{a}}".to_string(),
                None,
                None,
                BTreeSet::new(),
            )
            .await
            .unwrap();

        let names: Vec<String> = service
            .variables(created.id)
            .await
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn test_add_tags_deduplicates() {
        let (_store, service) = service();
        let created = service
            .create(
                "title".to_string(),
                "content".to_string(),
                None,
                None,
                BTreeSet::new(),
            )
            .await
            .unwrap();

        let tagged = service
            .add_tags(
                created.id,
                vec!["fun".to_string(), "ai".to_string(), "fun".to_string()],
            )
            .await
            .unwrap();
        let labels: Vec<&str> = tagged.tags.iter().map(String::as_str).collect();
        assert_eq!(labels, vec!["ai", "fun"]);
        assert!(tagged.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn test_add_blank_tag_rejected() {
        let (_store, service) = service();
        let created = service
            .create(
                "title".to_string(),
                "content".to_string(),
                None,
                None,
                BTreeSet::new(),
            )
            .await
            .unwrap();

        let err = service
            .add_tags(created.id, vec!["  ".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = service.add_tags(created.id, vec![]).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_remove_tag() {
        let (_store, service) = service();
        let created = service
            .create(
                "title".to_string(),
                "content".to_string(),
                None,
                None,
                ["fun".to_string()].into_iter().collect(),
            )
            .await
            .unwrap();

        let untagged = service.remove_tag(created.id, "fun").await.unwrap();
        assert!(untagged.tags.is_empty());

        let err = service.remove_tag(created.id, "fun").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_filters_conjunctively() {
        let (store, service) = service();
        let collection_id = seed_collection(&store).await;

        service
            .create(
                "Alpha".to_string(),
                "content".to_string(),
                None,
                Some(collection_id),
                ["fun".to_string()].into_iter().collect(),
            )
            .await
            .unwrap();
        service
            .create(
                "Beta".to_string(),
                "content".to_string(),
                None,
                Some(collection_id),
                ["fun".to_string()].into_iter().collect(),
            )
            .await
            .unwrap();

        let (prompts, total) = service
            .list(&PromptFilter {
                collection_id: Some(collection_id),
                search: Some("Alpha".to_string()),
                tag: Some("fun".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(total, 1);
        assert_eq!(prompts[0].title, "Alpha");

        let (prompts, total) = service
            .list(&PromptFilter {
                tag: Some("serious".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(prompts.is_empty());
        assert_eq!(total, 0);
    }
}
