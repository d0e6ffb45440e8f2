//! Observability setup for Mimicry.

pub mod tracing_setup;
