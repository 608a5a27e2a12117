//! Plain-text rendering of a conversation transcript

use crate::conversation::models::Message;

/// Render messages as `Label: content` lines, one per message, in order.
pub fn format_transcript(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|message| format!("{}: {}", role_label(&message.role), message.text()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Human-readable speaker label for a role.
pub fn role_label(role: &str) -> String {
    match role {
        "user" => "User".to_string(),
        "assistant" => "Agent".to_string(),
        other => capitalize(other),
    }
}

// First character uppercased, the rest lowercased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
