//! Conversion from wire-side session records to the message model.
//!
//! Pure functions, no I/O. Structured content parts are flattened to text;
//! role tags the client does not recognize map to `System`.

use super::record::{ContentPart, RawContent, RawMessage};
use crate::conversation::{ChatMessage, MessageRole};

/// Converts a raw message log into the in-memory message model.
///
/// Order is preserved. Trace ids are not assigned here; that is the
/// restorer's reconciliation step.
pub fn to_chat_messages(raw: &[RawMessage]) -> Vec<ChatMessage> {
    raw.iter()
        .map(|message| ChatMessage::new(parse_role(&message.role), flatten_content(&message.content)))
        .collect()
}

/// Maps a wire role tag to a [`MessageRole`].
///
/// Unknown tags map to `System` rather than failing, so a session stored by
/// a newer backend still renders.
pub fn parse_role(role: &str) -> MessageRole {
    match role {
        "user" => MessageRole::User,
        "assistant" => MessageRole::Assistant,
        _ => MessageRole::System,
    }
}

/// Flattens wire content to plain text.
///
/// Part sequences concatenate the text of their text parts; non-text parts
/// contribute nothing.
pub fn flatten_content(content: &RawContent) -> String {
    match content {
        RawContent::Text(text) => text.clone(),
        RawContent::Parts(parts) => parts
            .iter()
            .filter_map(|part| match part {
                ContentPart::Text { text } => Some(text.as_str()),
                ContentPart::Unknown => None,
            })
            .collect::<Vec<_>>()
            .join(""),
    }
}
