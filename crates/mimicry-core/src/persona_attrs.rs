//! Span and event attribute names for the trainer.
//!
//! Usable as `tracing` field names through the `{ CONST } = value` form, or
//! with `Span::record` on fields declared `Empty`.

/// Span name for one training pass.
pub const SPAN_TRAIN: &str = "persona.train";

/// Size of the training document in bytes.
pub const PERSONA_INPUT_BYTES: &str = "persona.input_bytes";

/// Messages parsed from the document, across all senders.
pub const PERSONA_PARSED_MESSAGES: &str = "persona.parsed_messages";

/// Persona name (main sender or fallback label).
pub const PERSONA_NAME: &str = "persona.name";

/// Messages attributed to the main sender.
pub const PERSONA_MESSAGE_COUNT: &str = "persona.message_count";

/// Classified conversation style (`casual` or `formal`).
pub const PERSONA_STYLE: &str = "persona.style";
