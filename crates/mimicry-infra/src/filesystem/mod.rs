//! Filesystem adapters for Mimicry.
//!
//! Data directory resolution and the training document loader.

pub mod training;

use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "MIMICRY_DATA_DIR";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `MIMICRY_DATA_DIR` environment variable
/// 2. `~/.mimicry`
/// 3. `.mimicry` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".mimicry");
    }

    PathBuf::from(".mimicry")
}
