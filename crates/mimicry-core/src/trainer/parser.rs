//! Line parser: raw training text -> ordered `ParsedMessage`s.
//!
//! Two matchers are tried per line. The chat-export matcher recognises
//! WhatsApp-style lines (`12/01/24, 2:30 PM - John: Hey`). When it fails, the
//! fallback splits `Name: message` at the first colon. Lines matching neither
//! are dropped without error.

use mimicry_types::message::ParsedMessage;

/// Parse every non-blank line of `text`, preserving input order.
pub fn parse_messages(text: &str) -> Vec<ParsedMessage> {
    let mut messages = Vec::new();
    let mut dropped = 0usize;

    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        match parse_line(line) {
            Some(message) => messages.push(message),
            None => dropped += 1,
        }
    }

    tracing::debug!(parsed = messages.len(), dropped, "parsed training text");
    messages
}

/// Try the chat-export matcher, then the `Name: message` fallback.
///
/// A line whose timestamp prefix matched never reaches the fallback, since
/// the naive split would cut inside the timestamp.
pub fn parse_line(line: &str) -> Option<ParsedMessage> {
    match scan_chat_export(line) {
        ExportLine::Message(message) => Some(message),
        ExportLine::Blank => None,
        ExportLine::NoMatch => match_name_colon(line),
    }
}

/// Match `D/M/YY, H:MM am|pm - Sender: Message`.
///
/// The am/pm marker is case-insensitive. Sender and message are trimmed and
/// both must be non-empty.
pub fn match_chat_export(line: &str) -> Option<ParsedMessage> {
    match scan_chat_export(line) {
        ExportLine::Message(message) => Some(message),
        ExportLine::Blank | ExportLine::NoMatch => None,
    }
}

/// Result of scanning one line against the chat-export shape.
enum ExportLine {
    Message(ParsedMessage),
    /// The shape matched but the sender or message is blank.
    Blank,
    NoMatch,
}

fn scan_chat_export(line: &str) -> ExportLine {
    match export_body(line) {
        Some((sender, message)) => {
            let (sender, message) = (sender.trim(), message.trim());
            if sender.is_empty() || message.is_empty() {
                ExportLine::Blank
            } else {
                ExportLine::Message(ParsedMessage::new(sender, message))
            }
        }
        None => ExportLine::NoMatch,
    }
}

/// Raw `(sender, message)` after the timestamp prefix and `- `.
fn export_body(line: &str) -> Option<(&str, &str)> {
    let mut cursor = Cursor::new(line);

    // Date: D/M/YY
    cursor.digits(1, 2)?;
    cursor.literal("/")?;
    cursor.digits(1, 2)?;
    cursor.literal("/")?;
    cursor.digits(2, 2)?;
    cursor.literal(",")?;
    cursor.whitespace()?;

    // Time: H:MM am|pm
    cursor.digits(1, 2)?;
    cursor.literal(":")?;
    cursor.digits(2, 2)?;
    cursor.whitespace()?;
    cursor.meridiem()?;

    cursor.whitespace()?;
    cursor.literal("-")?;
    cursor.whitespace()?;

    cursor.rest().split_once(':')
}

/// Naive `Name: Message` split at the first colon.
///
/// Lines starting with `[` (bracketed timestamps from other exporters) are
/// rejected, as are lines whose message part is blank.
pub fn match_name_colon(line: &str) -> Option<ParsedMessage> {
    if line.starts_with('[') {
        return None;
    }

    let (name, message) = line.split_once(':')?;
    let message = message.trim();
    if message.is_empty() {
        return None;
    }

    Some(ParsedMessage::new(name.trim(), message))
}

/// Forward-only scanner over one line.
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn rest(&self) -> &'a str {
        self.rest
    }

    /// Consume between `min` and `max` ASCII digits.
    ///
    /// Fails if a further digit follows, since every pattern position after
    /// a digit run expects a non-digit.
    fn digits(&mut self, min: usize, max: usize) -> Option<()> {
        let count = self
            .rest
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if count < min || count > max {
            return None;
        }
        self.rest = &self.rest[count..];
        Some(())
    }

    fn literal(&mut self, expected: &str) -> Option<()> {
        self.rest = self.rest.strip_prefix(expected)?;
        Some(())
    }

    /// Consume one or more whitespace characters.
    fn whitespace(&mut self) -> Option<()> {
        let trimmed = self.rest.trim_start();
        if trimmed.len() == self.rest.len() {
            return None;
        }
        self.rest = trimmed;
        Some(())
    }

    fn meridiem(&mut self) -> Option<()> {
        let marker = self.rest.get(..2)?;
        if marker.eq_ignore_ascii_case("am") || marker.eq_ignore_ascii_case("pm") {
            self.rest = &self.rest[2..];
            Some(())
        } else {
            None
        }
    }
}
