//! Business logic and repository trait definitions for Mimicry.
//!
//! Holds the chat-personality trainer and the "ports" (repository traits)
//! that the infrastructure layer implements. It depends only on
//! `mimicry-types` -- never on `mimicry-infra` or any database/IO crate.

pub mod persona_attrs;
pub mod repository;
pub mod service;
pub mod trainer;
