//! Custom personality repository trait definition.

use mimicry_types::error::RepositoryError;
use mimicry_types::persona::{CustomPersonality, PersonalityId};

/// Repository trait for persisted custom personalities.
///
/// Records are immutable once saved; a personality is replaced by deleting it
/// and training a new one.
pub trait PersonalityRepository: Send + Sync {
    /// Persist a newly trained personality.
    fn save(
        &self,
        personality: &CustomPersonality,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Get a personality by ID.
    fn get(
        &self,
        id: &PersonalityId,
    ) -> impl std::future::Future<Output = Result<Option<CustomPersonality>, RepositoryError>> + Send;

    /// List a user's personalities, newest first.
    fn list_for_user(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<CustomPersonality>, RepositoryError>> + Send;

    /// Delete a personality. Returns `false` when no record existed.
    fn delete(
        &self,
        id: &PersonalityId,
    ) -> impl std::future::Future<Output = Result<bool, RepositoryError>> + Send;
}
