//! Shared domain types for Mimicry.
//!
//! This crate contains the core domain types used across the workspace:
//! parsed chat messages, persona profiles, persisted custom personalities,
//! global configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod error;
pub mod message;
pub mod persona;
