//! Global configuration types for Mimicry.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls the
//! default owner of new personalities, the fallback persona name, and the
//! training document size limit.

use serde::{Deserialize, Serialize};

/// Default upper bound on a training document (10 MiB).
pub const DEFAULT_MAX_TRAINING_BYTES: u64 = 10 * 1024 * 1024;

/// Top-level configuration.
///
/// Loaded from `~/.mimicry/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// User id stamped on personalities created without `--user`.
    #[serde(default = "default_user_id")]
    pub default_user_id: String,

    /// Persona name used when no sender can be extracted from the document.
    #[serde(default = "default_fallback_name")]
    pub fallback_name: String,

    /// Largest training document accepted, in bytes.
    #[serde(default = "default_max_training_bytes")]
    pub max_training_bytes: u64,
}

fn default_user_id() -> String {
    "local".to_string()
}

fn default_fallback_name() -> String {
    "Custom Personality".to_string()
}

fn default_max_training_bytes() -> u64 {
    DEFAULT_MAX_TRAINING_BYTES
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_user_id: default_user_id(),
            fallback_name: default_fallback_name(),
            max_training_bytes: default_max_training_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.default_user_id, "local");
        assert_eq!(config.fallback_name, "Custom Personality");
        assert_eq!(config.max_training_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_global_config_deserialize_with_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.default_user_id, "local");
        assert_eq!(config.max_training_bytes, DEFAULT_MAX_TRAINING_BYTES);
    }

    #[test]
    fn test_global_config_deserialize_with_values() {
        let toml_str = r#"
default_user_id = "alice"
fallback_name = "My Twin"
max_training_bytes = 2048
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.default_user_id, "alice");
        assert_eq!(config.fallback_name, "My Twin");
        assert_eq!(config.max_training_bytes, 2048);
    }
}
