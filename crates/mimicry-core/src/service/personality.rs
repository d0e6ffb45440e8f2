//! Custom personality service.
//!
//! Wraps the trainer with validation and persistence: a personality is
//! trained from an in-memory document, turned into a `CustomPersonality`
//! record, and written through the repository in the same call.

use mimicry_types::error::{PersonalityError, RepositoryError};
use mimicry_types::persona::{CustomPersonality, PersonalityId};

use crate::repository::personality::PersonalityRepository;
use crate::trainer::{self, TrainingOutcome};

/// Input for [`PersonalityService::create`].
#[derive(Debug, Clone)]
pub struct CreatePersonalityRequest {
    /// Owner of the new record.
    pub user_id: String,
    /// User-entered label; also names the persona when no sender is found.
    pub name: String,
    pub description: Option<String>,
    /// Decoded contents of the training document.
    pub training_text: String,
}

/// Service orchestrating personality training and storage.
///
/// Generic over the repository to keep mimicry-core free of infrastructure.
pub struct PersonalityService<R: PersonalityRepository> {
    repo: R,
    fallback_name: String,
}

impl<R: PersonalityRepository> PersonalityService<R> {
    /// Create a new PersonalityService.
    ///
    /// - `repo`: persistence for personality records
    /// - `fallback_name`: persona name for previews that carry no name
    pub fn new(repo: R, fallback_name: impl Into<String>) -> Self {
        Self {
            repo,
            fallback_name: fallback_name.into(),
        }
    }

    /// Train without persisting anything.
    pub fn preview(
        &self,
        training_text: &str,
        name: Option<&str>,
        description: Option<&str>,
    ) -> TrainingOutcome {
        let fallback = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(self.fallback_name.as_str());
        trainer::train(training_text, fallback, description)
    }

    /// Train a personality and persist it.
    ///
    /// Rejects a blank name or blank training text before the trainer runs.
    pub async fn create(
        &self,
        request: CreatePersonalityRequest,
    ) -> Result<CustomPersonality, PersonalityError> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(PersonalityError::InvalidName(
                "name cannot be empty".to_string(),
            ));
        }
        if request.training_text.trim().is_empty() {
            return Err(PersonalityError::EmptyTrainingText);
        }

        let description = request
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let outcome = trainer::train(&request.training_text, &name, description.as_deref());

        let personality = CustomPersonality {
            id: PersonalityId::new(),
            user_id: request.user_id,
            name,
            description,
            custom_prompt: outcome.custom_prompt,
            profile: outcome.profile,
            created_at: chrono::Utc::now(),
        };

        self.repo
            .save(&personality)
            .await
            .map_err(storage_error)?;

        tracing::info!(
            id = %personality.id,
            user_id = %personality.user_id,
            persona = %personality.profile.name,
            messages = personality.profile.message_count,
            "custom personality created"
        );

        Ok(personality)
    }

    /// Get a personality by ID.
    pub async fn get(&self, id: &PersonalityId) -> Result<CustomPersonality, PersonalityError> {
        self.repo
            .get(id)
            .await
            .map_err(storage_error)?
            .ok_or(PersonalityError::NotFound)
    }

    /// List a user's personalities, newest first.
    pub async fn list(&self, user_id: &str) -> Result<Vec<CustomPersonality>, PersonalityError> {
        self.repo
            .list_for_user(user_id)
            .await
            .map_err(storage_error)
    }

    /// Delete a personality.
    pub async fn delete(&self, id: &PersonalityId) -> Result<(), PersonalityError> {
        let existed = self.repo.delete(id).await.map_err(storage_error)?;
        if !existed {
            return Err(PersonalityError::NotFound);
        }
        tracing::info!(id = %id, "custom personality deleted");
        Ok(())
    }
}

fn storage_error(e: RepositoryError) -> PersonalityError {
    match e {
        RepositoryError::NotFound => PersonalityError::NotFound,
        other => PersonalityError::StorageError(other.to_string()),
    }
}
