//! Infrastructure layer for Mimicry.
//!
//! Contains implementations of the repository traits defined in `mimicry-core`
//! (SQLite storage), the global config loader, and filesystem adapters for
//! data directory resolution and training document loading.

pub mod config;
pub mod filesystem;
pub mod sqlite;
