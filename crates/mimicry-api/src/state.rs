//! Application state wiring services together.
//!
//! The personality service is generic over its repository; AppState pins it
//! to the SQLite implementation. The database is opened (and migrated) once at
//! startup and every create writes through immediately.

use std::sync::Arc;

use anyhow::Context;

use mimicry_core::service::personality::PersonalityService;
use mimicry_infra::config::load_global_config;
use mimicry_infra::filesystem::resolve_data_dir;
use mimicry_infra::sqlite::personality::SqlitePersonalityRepository;
use mimicry_infra::sqlite::pool::{DatabasePool, database_url};
use mimicry_types::config::GlobalConfig;

pub type ConcretePersonalityService = PersonalityService<SqlitePersonalityRepository>;

/// Shared application state used by CLI commands.
#[derive(Clone)]
pub struct AppState {
    pub personality_service: Arc<ConcretePersonalityService>,
    pub config: GlobalConfig,
}

impl AppState {
    /// Resolve the data directory, load config, open the database.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir)
            .await
            .with_context(|| format!("failed to create data dir {}", data_dir.display()))?;

        let config = load_global_config(&data_dir).await;

        let db_pool = DatabasePool::new(&database_url(&data_dir))
            .await
            .context("failed to open personality database")?;

        let personality_service = PersonalityService::new(
            SqlitePersonalityRepository::new(db_pool),
            config.fallback_name.clone(),
        );

        tracing::debug!(data_dir = %data_dir.display(), "application state ready");

        Ok(Self {
            personality_service: Arc::new(personality_service),
            config,
        })
    }
}
