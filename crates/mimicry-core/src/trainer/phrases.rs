//! Word-frequency and tone extraction over the main sender's messages.

use mimicry_types::message::ParsedMessage;
use mimicry_types::persona::{ConversationStyle, MAX_COMMON_PHRASES, MAX_SAMPLE_RESPONSES};

use super::counter::OrderedCounter;

/// Filler words excluded from the frequency count.
pub const STOP_WORDS: [&str; 7] = ["this", "that", "with", "have", "will", "been", "from"];

/// Markers whose presence anywhere in the text marks it as casual.
const CASUAL_MARKERS: [&str; 2] = ["lol", "haha"];

/// Words of at most this many characters are ignored.
const MIN_WORD_CHARS: usize = 3;

/// Whether a lower-cased word counts towards `common_phrases`.
pub fn is_candidate_word(word: &str) -> bool {
    word.chars().count() > MIN_WORD_CHARS && !STOP_WORDS.contains(&word)
}

/// Count candidate words across all messages.
pub fn word_frequencies(messages: &[&ParsedMessage]) -> OrderedCounter {
    let mut counter = OrderedCounter::new();
    for message in messages {
        let lowered = message.message.to_lowercase();
        for word in lowered.split_whitespace().filter(|w| is_candidate_word(w)) {
            counter.add(word);
        }
    }
    counter
}

/// The most frequent candidate words, capped at [`MAX_COMMON_PHRASES`].
pub fn common_phrases(messages: &[&ParsedMessage]) -> Vec<String> {
    word_frequencies(messages).top(MAX_COMMON_PHRASES)
}

/// The first [`MAX_SAMPLE_RESPONSES`] messages in original casing.
pub fn sample_responses(messages: &[&ParsedMessage]) -> Vec<String> {
    messages
        .iter()
        .take(MAX_SAMPLE_RESPONSES)
        .map(|m| m.message.clone())
        .collect()
}

/// Substring scan for casual markers over the space-joined, lower-cased text.
///
/// Not tokenized: "hahaha" and "lollipop" both count.
pub fn classify_style(messages: &[&ParsedMessage]) -> ConversationStyle {
    let joined = messages
        .iter()
        .map(|m| m.message.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    if CASUAL_MARKERS.iter().any(|marker| joined.contains(marker)) {
        ConversationStyle::Casual
    } else {
        ConversationStyle::Formal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(lines: &[&str]) -> Vec<ParsedMessage> {
        lines.iter().map(|l| ParsedMessage::new("John", *l)).collect()
    }

    fn refs(messages: &[ParsedMessage]) -> Vec<&ParsedMessage> {
        messages.iter().collect()
    }

    #[test]
    fn test_candidate_word_filter() {
        assert!(!is_candidate_word("the"));
        assert!(!is_candidate_word("this"));
        assert!(!is_candidate_word("from"));
        assert!(is_candidate_word("code"));
        assert!(is_candidate_word("café"));
        assert!(!is_candidate_word("été"));
    }

    #[test]
    fn test_common_phrases_ranked_by_count_then_first_seen() {
        let messages = owned(&[
            "Coding today, coding tomorrow",
            "Pizza tonight? pizza PIZZA",
            "tomorrow works",
        ]);
        let phrases = common_phrases(&refs(&messages));
        assert_eq!(
            phrases,
            vec!["pizza", "coding", "tomorrow", "today,", "tonight?", "works"]
        );
    }

    #[test]
    fn test_stop_words_and_short_words_excluded() {
        let messages = owned(&["this is that with have will been from the cat"]);
        assert!(common_phrases(&refs(&messages)).is_empty());
    }

    #[test]
    fn test_common_phrases_capped() {
        let lines: Vec<String> = (0..50).map(|i| format!("word{i} word{i}x")).collect();
        let messages: Vec<ParsedMessage> = lines
            .iter()
            .map(|l| ParsedMessage::new("John", l.as_str()))
            .collect();
        let phrases = common_phrases(&refs(&messages));
        assert_eq!(phrases.len(), MAX_COMMON_PHRASES);
        assert_eq!(phrases[0], "word0");
    }

    #[test]
    fn test_sample_responses_keep_case_and_order() {
        let lines: Vec<String> = (0..30).map(|i| format!("Line {i}")).collect();
        let messages: Vec<ParsedMessage> = lines
            .iter()
            .map(|l| ParsedMessage::new("John", l.as_str()))
            .collect();
        let samples = sample_responses(&refs(&messages));
        assert_eq!(samples.len(), MAX_SAMPLE_RESPONSES);
        assert_eq!(samples[0], "Line 0");
        assert_eq!(samples[19], "Line 19");
    }

    #[test]
    fn test_classify_style_substring_match() {
        let casual = owned(&["That was HAHAHA great"]);
        assert_eq!(classify_style(&refs(&casual)), ConversationStyle::Casual);

        let embedded = owned(&["I bought a lollipop"]);
        assert_eq!(classify_style(&refs(&embedded)), ConversationStyle::Casual);

        let formal = owned(&["Good afternoon.", "Regards."]);
        assert_eq!(classify_style(&refs(&formal)), ConversationStyle::Formal);
    }

    #[test]
    fn test_classify_style_does_not_join_across_messages() {
        let split = owned(&["lo", "l"]);
        assert_eq!(classify_style(&refs(&split)), ConversationStyle::Formal);
    }

    #[test]
    fn test_classify_style_empty_is_formal() {
        assert_eq!(classify_style(&[]), ConversationStyle::Formal);
    }
}
