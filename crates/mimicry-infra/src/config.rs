//! Global configuration loader for Mimicry.
//!
//! Reads `config.toml` from the data directory (`~/.mimicry/` in production)
//! and deserializes it into [`GlobalConfig`]. Falls back to sensible defaults
//! when the file is missing or malformed.

use std::path::Path;

use mimicry_types::config::GlobalConfig;

/// Smallest training document limit honoured from config (1 KiB).
const MIN_TRAINING_BYTES: u64 = 1024;

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

/// Resolve the training document size limit.
///
/// A per-invocation override wins over the configured value; either way a
/// floor of 1 KiB is enforced.
pub fn resolve_training_limit(global_config: &GlobalConfig, cli_override: Option<u64>) -> u64 {
    cli_override
        .unwrap_or(global_config.max_training_bytes)
        .max(MIN_TRAINING_BYTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_global_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.default_user_id, "local");
        assert_eq!(config.max_training_bytes, 10 * 1024 * 1024);
    }

    #[tokio::test]
    async fn load_global_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
default_user_id = "student-42"
fallback_name = "Study Buddy"
"#,
        )
        .await
        .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.default_user_id, "student-42");
        assert_eq!(config.fallback_name, "Study Buddy");
        assert_eq!(config.max_training_bytes, 10 * 1024 * 1024);
    }

    #[tokio::test]
    async fn load_global_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.default_user_id, "local");
    }

    #[test]
    fn resolve_training_limit_prefers_override() {
        let global = GlobalConfig::default();
        assert_eq!(resolve_training_limit(&global, Some(4096)), 4096);
        assert_eq!(
            resolve_training_limit(&global, None),
            global.max_training_bytes
        );
    }

    #[test]
    fn resolve_training_limit_enforces_minimum() {
        let global = GlobalConfig {
            max_training_bytes: 10,
            ..GlobalConfig::default()
        };
        assert_eq!(resolve_training_limit(&global, None), MIN_TRAINING_BYTES);
        assert_eq!(resolve_training_limit(&global, Some(1)), MIN_TRAINING_BYTES);
    }
}
