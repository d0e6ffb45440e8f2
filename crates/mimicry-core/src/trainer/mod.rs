//! Local chat-personality trainer.
//!
//! Pure, single-pass pipeline from an exported chat log to a persona profile:
//!
//! 1. `parser` turns raw text into ordered `ParsedMessage`s
//! 2. `sender` picks the main sender and keeps only their messages
//! 3. `phrases` counts frequent words and classifies the tone
//! 4. `assembler` packages the profile and renders the persona prompt
//!
//! Nothing here performs I/O or fails: empty input produces an empty,
//! formal profile named after the caller's fallback label.

pub mod assembler;
pub mod counter;
pub mod parser;
pub mod phrases;
pub mod sender;

use serde::{Deserialize, Serialize};
use tracing::field::{Empty, display};
use tracing::info_span;

use mimicry_types::persona::PersonaProfile;

use crate::persona_attrs::{
    PERSONA_INPUT_BYTES, PERSONA_MESSAGE_COUNT, PERSONA_NAME, PERSONA_PARSED_MESSAGES,
    PERSONA_STYLE, SPAN_TRAIN,
};

/// A trained profile plus the prompt synthesized from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingOutcome {
    pub profile: PersonaProfile,
    pub custom_prompt: String,
    /// Messages parsed from the document, across all senders.
    pub parsed_messages: usize,
}

/// Derive a persona profile from `text`.
///
/// `fallback_name` names the persona when no sender could be extracted.
pub fn train_profile(text: &str, fallback_name: &str) -> PersonaProfile {
    derive(text, fallback_name).0
}

/// Train a profile and render its persona prompt in one call.
pub fn train(text: &str, fallback_name: &str, description: Option<&str>) -> TrainingOutcome {
    let (profile, parsed_messages) = derive(text, fallback_name);
    let custom_prompt = assembler::build_custom_prompt(&profile, description);

    TrainingOutcome {
        profile,
        custom_prompt,
        parsed_messages,
    }
}

fn derive(text: &str, fallback_name: &str) -> (PersonaProfile, usize) {
    let span = info_span!(
        SPAN_TRAIN,
        { PERSONA_INPUT_BYTES } = text.len(),
        { PERSONA_PARSED_MESSAGES } = Empty,
        { PERSONA_NAME } = Empty,
        { PERSONA_MESSAGE_COUNT } = Empty,
        { PERSONA_STYLE } = Empty,
    );
    let _guard = span.enter();

    let messages = parser::parse_messages(text);
    let main_sender = sender::select_main_sender(&messages);
    let sender_messages = match main_sender {
        Some(name) => sender::messages_from(&messages, name),
        None => Vec::new(),
    };

    let profile = assembler::assemble_profile(main_sender, &sender_messages, fallback_name);

    span.record(PERSONA_PARSED_MESSAGES, messages.len());
    span.record(PERSONA_NAME, display(&profile.name));
    span.record(PERSONA_MESSAGE_COUNT, profile.message_count);
    span.record(PERSONA_STYLE, display(profile.conversation_style));
    tracing::debug!("persona profile derived");

    (profile, messages.len())
}
