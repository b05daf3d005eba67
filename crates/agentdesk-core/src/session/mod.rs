//! Session domain module.
//!
//! This module contains the wire-side session records, the conversion from
//! those records to the message model, and the API trait the backend client
//! implements.
//!
//! # Module Structure
//!
//! - `record`: Wire records (`SessionRecord`, `RawMessage`, `RawContent`,
//!   `ContentPart`, `SessionSummary`)
//! - `convert`: Pure conversion to `ChatMessage`
//! - `api`: Backend client trait (`SessionApi`)

mod api;
mod convert;
mod record;

// Re-export public API
pub use api::SessionApi;
pub use convert::{flatten_content, parse_role, to_chat_messages};
pub use record::{ContentPart, RawContent, RawMessage, SessionRecord, SessionSummary};
