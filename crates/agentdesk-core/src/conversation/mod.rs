//! Conversation domain module.
//!
//! This module contains the message model and the shared conversation store
//! that the chat surface, the live messaging pipeline, and the session
//! restorer all operate on.
//!
//! # Module Structure
//!
//! - `message`: Conversation message types (`MessageRole`, `ChatMessage`)
//! - `store`: Shared ordered message log (`ConversationStore`)

mod message;
mod store;

// Re-export public API
pub use message::{ChatMessage, MessageRole};
pub use store::ConversationStore;
