use serde::{Deserialize, Serialize};

/// A single chat line attributed to a sender.
///
/// Produced by the line parser from a training document. Sender names are
/// not unique across a collection and keep the casing found in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMessage {
    pub sender: String,
    pub message: String,
}

impl ParsedMessage {
    pub fn new(sender: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            message: message.into(),
        }
    }
}

/// Sender name reserved for export notices ("Messages are end-to-end encrypted").
pub const SYSTEM_SENDER: &str = "system";

/// Whether `sender` is the reserved `system` participant, ignoring case.
pub fn is_system_sender(sender: &str) -> bool {
    sender.eq_ignore_ascii_case(SYSTEM_SENDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_system_case_insensitive() {
        assert!(is_system_sender("System"));
        assert!(is_system_sender("SYSTEM"));
        assert!(!is_system_sender("Systematic"));
    }
}
