//! Main-sender selection.
//!
//! The persona's voice is the first participant, in order of appearance, who
//! is not the reserved `system` sender. A conversation made only of system
//! lines falls back to its first sender.

use std::collections::HashSet;

use mimicry_types::message::{ParsedMessage, is_system_sender};

/// Distinct sender names in order of first appearance.
pub fn distinct_senders(messages: &[ParsedMessage]) -> Vec<&str> {
    let mut seen = HashSet::new();
    messages
        .iter()
        .map(|m| m.sender.as_str())
        .filter(|sender| seen.insert(*sender))
        .collect()
}

/// Pick the main sender, or `None` when there are no messages.
pub fn select_main_sender(messages: &[ParsedMessage]) -> Option<&str> {
    let senders = distinct_senders(messages);
    senders
        .iter()
        .copied()
        .find(|sender| !is_system_sender(sender))
        .or_else(|| senders.first().copied())
}

/// Messages written by `sender`, in original order.
pub fn messages_from<'a>(messages: &'a [ParsedMessage], sender: &str) -> Vec<&'a ParsedMessage> {
    messages.iter().filter(|m| m.sender == sender).collect()
}
