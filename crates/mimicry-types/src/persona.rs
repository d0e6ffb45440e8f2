use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Maximum number of frequent words kept in a profile.
pub const MAX_COMMON_PHRASES: usize = 10;

/// Maximum number of sample lines kept in a profile.
pub const MAX_SAMPLE_RESPONSES: usize = 20;

/// Unique identifier for a custom personality, wrapping a UUID v7 (time-sortable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonalityId(pub Uuid);

impl PersonalityId {
    /// Create a new PersonalityId using UUID v7.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for PersonalityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonalityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PersonalityId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Coarse tone of the main sender's writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStyle {
    Casual,
    Formal,
}

impl fmt::Display for ConversationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversationStyle::Casual => write!(f, "casual"),
            ConversationStyle::Formal => write!(f, "formal"),
        }
    }
}

impl FromStr for ConversationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "casual" => Ok(ConversationStyle::Casual),
            "formal" => Ok(ConversationStyle::Formal),
            other => Err(format!("invalid conversation style: '{other}'")),
        }
    }
}

impl Default for ConversationStyle {
    fn default() -> Self {
        ConversationStyle::Formal
    }
}

/// Summary of one person's writing style, derived from their chat history.
///
/// Immutable once computed. `common_phrases` holds at most
/// [`MAX_COMMON_PHRASES`] entries and `sample_responses` at most
/// [`MAX_SAMPLE_RESPONSES`], both drawn only from the main sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaProfile {
    /// Display name of the persona (main sender, or the caller's fallback label).
    pub name: String,
    /// Most frequent words, highest count first.
    pub common_phrases: Vec<String>,
    /// First lines written by the main sender, original casing.
    pub sample_responses: Vec<String>,
    /// Number of messages attributed to the main sender.
    pub message_count: usize,
    pub conversation_style: ConversationStyle,
}

/// A trained persona persisted for later use by a chat front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPersonality {
    pub id: PersonalityId,
    /// Owner of the record.
    pub user_id: String,
    /// User-entered label for the personality.
    pub name: String,
    pub description: Option<String>,
    /// System prompt handed to the downstream language model.
    pub custom_prompt: String,
    pub profile: PersonaProfile,
    pub created_at: DateTime<Utc>,
}
