//! Tracing subscriber initialization with structured logging and optional
//! OpenTelemetry trace export.
//!
//! # Usage
//!
//! ```no_run
//! use mimicry_observe::tracing_setup::{init_tracing, LogLevel};
//!
//! // Structured logging only, warnings and above
//! init_tracing(LogLevel::from_flags(0, false), false).unwrap();
//! ```

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use std::sync::OnceLock;

/// Stores the OTel tracer provider so it can be shut down cleanly on exit.
static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// Verbosity selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Quiet,
    Normal,
    Verbose,
    Trace,
}

impl LogLevel {
    /// Map `-v` count and `--quiet` to a level.
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match verbose {
            0 if quiet => LogLevel::Quiet,
            0 => LogLevel::Normal,
            1 => LogLevel::Verbose,
            _ => LogLevel::Trace,
        }
    }

    /// Default filter directive when `RUST_LOG` is unset.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Quiet => "error",
            LogLevel::Normal => "warn",
            LogLevel::Verbose => "info,mimicry=debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// - Installs a `fmt` layer; span close timing is shown from `Verbose` up.
/// - `RUST_LOG` takes precedence over the verbosity flags.
/// - When `enable_otel` is true, additionally bridges tracing spans to
///   OpenTelemetry using a stdout exporter.
///
/// # Errors
///
/// Returns an error if the global subscriber has already been set.
pub fn init_tracing(level: LogLevel, enable_otel: bool) -> Result<(), Box<dyn std::error::Error>> {
    let span_events = match level {
        LogLevel::Verbose | LogLevel::Trace => FmtSpan::CLOSE,
        LogLevel::Quiet | LogLevel::Normal => FmtSpan::NONE,
    };
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_span_events(span_events);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));

    if enable_otel {
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build();
        let tracer = provider.tracer("mimicry");
        let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);

        let _ = TRACER_PROVIDER.set(provider.clone());
        opentelemetry::global::set_tracer_provider(provider);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}

/// Flush pending traces and shut down the OpenTelemetry tracer provider.
///
/// No-op when OTel was not enabled.
pub fn shutdown_tracing() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            eprintln!("Warning: OTel tracer provider shutdown error: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_flags() {
        assert_eq!(LogLevel::from_flags(0, true), LogLevel::Quiet);
        assert_eq!(LogLevel::from_flags(0, false), LogLevel::Normal);
        assert_eq!(LogLevel::from_flags(1, true), LogLevel::Verbose);
        assert_eq!(LogLevel::from_flags(3, false), LogLevel::Trace);
    }

    #[test]
    fn test_directives() {
        assert_eq!(LogLevel::Quiet.directive(), "error");
        assert_eq!(LogLevel::Verbose.directive(), "info,mimicry=debug");
    }
}
