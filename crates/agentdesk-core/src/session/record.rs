//! Wire-side session records.
//!
//! These types mirror what the console backend returns for a stored session.
//! They are deliberately tolerant: message content arrives either as a plain
//! string or as a sequence of typed content parts, and unknown part kinds
//! must not fail deserialization of the whole session.

use serde::{Deserialize, Serialize};

/// A stored session as returned by `GET /api/sessions/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique session identifier.
    pub id: String,
    /// Human-readable session title.
    #[serde(default)]
    pub title: Option<String>,
    /// Raw message log in chronological order.
    #[serde(default)]
    pub messages: Vec<RawMessage>,
    /// Timestamp when the session was created (ISO 8601 format).
    #[serde(default)]
    pub created_at: Option<String>,
    /// Timestamp when the session was last updated (ISO 8601 format).
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One raw message turn as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMessage {
    /// Role tag as the backend stores it ("user", "assistant", ...).
    pub role: String,
    /// Message content, plain or structured.
    pub content: RawContent,
}

/// Message content on the wire: a plain string or a part sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawContent {
    /// Plain text content.
    Text(String),
    /// Structured content parts.
    Parts(Vec<ContentPart>),
}

/// A typed content part inside a structured message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Plain text part.
    Text { text: String },
    /// Any part kind this client does not understand. Contributes nothing
    /// to the flattened text but keeps the message deserializable.
    #[serde(other)]
    Unknown,
}

/// A session list entry as returned by `GET /api/sessions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Unique session identifier.
    pub id: String,
    /// Human-readable session title.
    #[serde(default)]
    pub title: Option<String>,
    /// Timestamp when the session was last updated (ISO 8601 format).
    #[serde(default)]
    pub updated_at: Option<String>,
}
