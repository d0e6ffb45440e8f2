//! SQLite custom personality repository.
//!
//! Implements `PersonalityRepository` from `mimicry-core`. The persona profile
//! is stored as JSON text; timestamps are fixed-width RFC 3339 so that
//! `ORDER BY created_at` sorts chronologically.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::Row;

use mimicry_core::repository::personality::PersonalityRepository;
use mimicry_types::error::RepositoryError;
use mimicry_types::persona::{CustomPersonality, PersonaProfile, PersonalityId};

use super::pool::DatabasePool;

/// SQLite-backed implementation of `PersonalityRepository`.
pub struct SqlitePersonalityRepository {
    pool: DatabasePool,
}

impl SqlitePersonalityRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row type for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

struct PersonalityRow {
    id: String,
    user_id: String,
    name: String,
    description: Option<String>,
    custom_prompt: String,
    profile: String,
    created_at: String,
}

impl PersonalityRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            custom_prompt: row.try_get("custom_prompt")?,
            profile: row.try_get("profile")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_personality(self) -> Result<CustomPersonality, RepositoryError> {
        let id: PersonalityId = self
            .id
            .parse()
            .map_err(|e| RepositoryError::Query(format!("invalid personality id: {e}")))?;
        let profile: PersonaProfile = serde_json::from_str(&self.profile)
            .map_err(|e| RepositoryError::Query(format!("invalid profile JSON: {e}")))?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(CustomPersonality {
            id,
            user_id: self.user_id,
            name: self.name,
            description: self.description,
            custom_prompt: self.custom_prompt,
            profile,
            created_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn query_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Query(e.to_string())
}

// ---------------------------------------------------------------------------
// PersonalityRepository implementation
// ---------------------------------------------------------------------------

impl PersonalityRepository for SqlitePersonalityRepository {
    async fn save(&self, personality: &CustomPersonality) -> Result<(), RepositoryError> {
        let profile = serde_json::to_string(&personality.profile)
            .map_err(|e| RepositoryError::Query(format!("failed to serialize profile: {e}")))?;

        sqlx::query(
            r#"INSERT INTO custom_personalities
               (id, user_id, name, description, custom_prompt, profile, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(personality.id.to_string())
        .bind(&personality.user_id)
        .bind(&personality.name)
        .bind(&personality.description)
        .bind(&personality.custom_prompt)
        .bind(&profile)
        .bind(format_datetime(&personality.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::Conflict(format!("personality {} already exists", personality.id))
            }
            other => query_error(other),
        })?;

        Ok(())
    }

    async fn get(&self, id: &PersonalityId) -> Result<Option<CustomPersonality>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM custom_personalities WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        match row {
            Some(row) => {
                let personality_row = PersonalityRow::from_row(&row).map_err(query_error)?;
                Ok(Some(personality_row.into_personality()?))
            }
            None => Ok(None),
        }
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<CustomPersonality>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM custom_personalities WHERE user_id = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_error)?;

        rows.iter()
            .map(|row| {
                PersonalityRow::from_row(row)
                    .map_err(query_error)?
                    .into_personality()
            })
            .collect()
    }

    async fn delete(&self, id: &PersonalityId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM custom_personalities WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::database_url;
    use chrono::Duration;
    use mimicry_types::persona::ConversationStyle;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let url = database_url(dir.path());
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    fn personality(user_id: &str, name: &str, created_at: DateTime<Utc>) -> CustomPersonality {
        CustomPersonality {
            id: PersonalityId::new(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            description: Some("from the group chat".to_string()),
            custom_prompt: format!("You are {name}."),
            profile: PersonaProfile {
                name: name.to_string(),
                common_phrases: vec!["coding".to_string(), "projects".to_string()],
                sample_responses: vec!["lol working on stuff".to_string()],
                message_count: 1,
                conversation_style: ConversationStyle::Casual,
            },
            created_at,
        }
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let repo = SqlitePersonalityRepository::new(test_pool().await);
        let p = personality("local", "Sarah", Utc::now());
        repo.save(&p).await.unwrap();

        let got = repo.get(&p.id).await.unwrap().unwrap();
        assert_eq!(got.id, p.id);
        assert_eq!(got.name, "Sarah");
        assert_eq!(got.description.as_deref(), Some("from the group chat"));
        assert_eq!(got.profile, p.profile);
        assert_eq!(
            got.created_at.timestamp_micros(),
            p.created_at.timestamp_micros()
        );
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = SqlitePersonalityRepository::new(test_pool().await);
        assert!(repo.get(&PersonalityId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id_is_conflict() {
        let repo = SqlitePersonalityRepository::new(test_pool().await);
        let p = personality("local", "Sarah", Utc::now());
        repo.save(&p).await.unwrap();
        assert!(matches!(
            repo.save(&p).await,
            Err(RepositoryError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_list_for_user_newest_first() {
        let repo = SqlitePersonalityRepository::new(test_pool().await);
        let now = Utc::now();
        let older = personality("local", "Older", now - Duration::minutes(5));
        let newer = personality("local", "Newer", now);
        let foreign = personality("other", "Foreign", now);
        repo.save(&older).await.unwrap();
        repo.save(&newer).await.unwrap();
        repo.save(&foreign).await.unwrap();

        let listed = repo.list_for_user("local").await.unwrap();
        let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Newer", "Older"]);
    }

    #[tokio::test]
    async fn test_delete_reports_existence() {
        let repo = SqlitePersonalityRepository::new(test_pool().await);
        let p = personality("local", "Sarah", Utc::now());
        repo.save(&p).await.unwrap();

        assert!(repo.delete(&p.id).await.unwrap());
        assert!(!repo.delete(&p.id).await.unwrap());
        assert!(repo.get(&p.id).await.unwrap().is_none());
    }
}
