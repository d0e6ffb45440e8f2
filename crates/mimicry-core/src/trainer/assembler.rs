//! Profile assembly and persona prompt synthesis.
//!
//! The prompt is the only artifact consumed downstream: a chat front end
//! prepends it to live user messages before calling a language model.
//!
//! Layout:
//! ```text
//! You are {name}. Reply the way {name} writes in their own chats.
//! Conversation style: {style}
//! Words {name} uses often: {phrase, phrase, ...}
//! About {name}: {description}
//! Example messages from {name}:
//! - ...
//! Keep replies short and natural. Mirror {name}'s vocabulary, ...
//! ```

use mimicry_types::message::ParsedMessage;
use mimicry_types::persona::{ConversationStyle, PersonaProfile};

use super::phrases;

/// Number of sample lines quoted in the prompt as style examples.
const PROMPT_EXAMPLE_LINES: usize = 5;

/// Build the profile for `sender` from that sender's messages.
///
/// `sender` is `None` only when nothing was parsed, in which case the
/// persona takes `fallback_name`.
pub fn assemble_profile(
    sender: Option<&str>,
    sender_messages: &[&ParsedMessage],
    fallback_name: &str,
) -> PersonaProfile {
    PersonaProfile {
        name: sender.unwrap_or(fallback_name).to_string(),
        common_phrases: phrases::common_phrases(sender_messages),
        sample_responses: phrases::sample_responses(sender_messages),
        message_count: sender_messages.len(),
        conversation_style: phrases::classify_style(sender_messages),
    }
}

/// Render the system prompt that asks a model to imitate `profile`.
pub fn build_custom_prompt(profile: &PersonaProfile, description: Option<&str>) -> String {
    let name = &profile.name;
    let mut sections = Vec::with_capacity(5);

    sections.push(format!(
        "You are {name}. Reply the way {name} writes in their own chats."
    ));

    sections.push(format!(
        "Conversation style: {} ({})",
        profile.conversation_style,
        style_hint(profile.conversation_style)
    ));

    if !profile.common_phrases.is_empty() {
        sections.push(format!(
            "Words {name} uses often: {}",
            profile.common_phrases.join(", ")
        ));
    }

    if let Some(description) = description.map(str::trim).filter(|d| !d.is_empty()) {
        sections.push(format!("About {name}: {description}"));
    }

    if !profile.sample_responses.is_empty() {
        let examples: Vec<String> = profile
            .sample_responses
            .iter()
            .take(PROMPT_EXAMPLE_LINES)
            .map(|line| format!("- {line}"))
            .collect();
        sections.push(format!(
            "Example messages from {name}:\n{}",
            examples.join("\n")
        ));
    }

    sections.push(format!(
        "Keep replies short and natural. Mirror {name}'s vocabulary, punctuation and \
         energy, and never mention that you are imitating someone."
    ));

    sections.join("\n\n")
}

fn style_hint(style: ConversationStyle) -> &'static str {
    match style {
        ConversationStyle::Casual => "relaxed, playful, slang and laughter are fine",
        ConversationStyle::Formal => "polite, complete sentences, little slang",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(phrases: &[&str], samples: &[&str], style: ConversationStyle) -> PersonaProfile {
        PersonaProfile {
            name: "John".to_string(),
            common_phrases: phrases.iter().map(|s| s.to_string()).collect(),
            sample_responses: samples.iter().map(|s| s.to_string()).collect(),
            message_count: samples.len(),
            conversation_style: style,
        }
    }

    #[test]
    fn test_assemble_profile_uses_fallback_without_sender() {
        let built = assemble_profile(None, &[], "Custom Personality");
        assert_eq!(built.name, "Custom Personality");
        assert_eq!(built.message_count, 0);
        assert!(built.common_phrases.is_empty());
        assert!(built.sample_responses.is_empty());
        assert_eq!(built.conversation_style, ConversationStyle::Formal);
    }

    #[test]
    fn test_prompt_embeds_name_phrases_and_style() {
        let p = profile(&["coding", "projects"], &["Hey there"], ConversationStyle::Casual);
        let prompt = build_custom_prompt(&p, None);
        assert!(prompt.starts_with("You are John."));
        assert!(prompt.contains("Words John uses often: coding, projects"));
        assert!(prompt.contains("Conversation style: casual"));
        assert!(prompt.contains("- Hey there"));
        assert!(!prompt.contains("About John"));
    }

    #[test]
    fn test_prompt_includes_trimmed_description() {
        let p = profile(&[], &[], ConversationStyle::Formal);
        let prompt = build_custom_prompt(&p, Some("  My college roommate  "));
        assert!(prompt.contains("About John: My college roommate\n"));
        assert!(!prompt.contains("Words John uses often"));
        assert!(!prompt.contains("Example messages"));

        let blank = build_custom_prompt(&p, Some("   "));
        assert!(!blank.contains("About John"));
    }

    #[test]
    fn test_prompt_quotes_at_most_five_examples() {
        let samples = ["one", "two", "three", "four", "five", "six", "seven"];
        let p = profile(&[], &samples, ConversationStyle::Formal);
        let prompt = build_custom_prompt(&p, None);
        assert!(prompt.contains("- five"));
        assert!(!prompt.contains("- six"));
    }
}
