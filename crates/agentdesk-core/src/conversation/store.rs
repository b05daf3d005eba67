//! In-memory conversation store.
//!
//! The store holds the ordered message log for the active session and the
//! flags that gate restoration. It is shared state: the chat surface reads
//! it to render, the live messaging pipeline appends to it while an exchange
//! streams, and the session restorer fills it when an existing session is
//! activated.

use super::message::ChatMessage;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct ConversationState {
    /// The active session id, if any.
    session_id: Option<String>,
    /// Ordered message log. Append-only, never reordered.
    messages: Vec<ChatMessage>,
    /// True while a live exchange is in flight for this session.
    running: bool,
}

/// A cloneable handle to the shared conversation state.
///
/// All reads return snapshots; the only mutation available for the message
/// log is [`append`](ConversationStore::append), so concurrent readers
/// observe a strictly growing, order-preserving prefix. The store performs
/// no validation of trace-id uniqueness or role ordering; callers uphold
/// those by construction.
#[derive(Clone, Default)]
pub struct ConversationStore {
    inner: Arc<RwLock<ConversationState>>,
}

impl ConversationStore {
    /// Creates a new empty store with no active session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates a session, clearing any previous conversation.
    ///
    /// # Arguments
    ///
    /// * `session_id` - The id of the session to activate
    pub async fn activate(&self, session_id: impl Into<String>) {
        let mut state = self.inner.write().await;
        state.session_id = Some(session_id.into());
        state.messages.clear();
        state.running = false;
    }

    /// Clears the active session, its messages, and the running flag.
    pub async fn deactivate(&self) {
        let mut state = self.inner.write().await;
        state.session_id = None;
        state.messages.clear();
        state.running = false;
    }

    /// Returns the active session id, if any.
    pub async fn session_id(&self) -> Option<String> {
        self.inner.read().await.session_id.clone()
    }

    /// Returns the number of messages in the log.
    pub async fn message_count(&self) -> usize {
        self.inner.read().await.messages.len()
    }

    /// Returns whether a live exchange is currently in flight.
    pub async fn is_running(&self) -> bool {
        self.inner.read().await.running
    }

    /// Sets the running flag.
    ///
    /// Owned by the live messaging pipeline; the restorer only reads it.
    pub async fn set_running(&self, running: bool) {
        self.inner.write().await.running = running;
    }

    /// Appends one message to the end of the log.
    pub async fn append(&self, message: ChatMessage) {
        self.inner.write().await.messages.push(message);
    }

    /// Returns a snapshot of the current message log.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.inner.read().await.messages.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::message::MessageRole;

    #[tokio::test]
    async fn test_append_preserves_order() {
        let store = ConversationStore::new();
        store.activate("s-1").await;

        store.append(ChatMessage::user("first")).await;
        store.append(ChatMessage::assistant("second")).await;
        store.append(ChatMessage::user("third")).await;

        let messages = store.messages().await;
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].content, "first");
        assert_eq!(messages[1].content, "second");
        assert_eq!(messages[2].content, "third");
        assert_eq!(messages[1].role, MessageRole::Assistant);
    }

    #[tokio::test]
    async fn test_activate_clears_previous_conversation() {
        let store = ConversationStore::new();
        store.activate("s-1").await;
        store.append(ChatMessage::user("hello")).await;
        store.set_running(true).await;

        store.activate("s-2").await;

        assert_eq!(store.session_id().await, Some("s-2".to_string()));
        assert_eq!(store.message_count().await, 0);
        assert!(!store.is_running().await);
    }

    #[tokio::test]
    async fn test_deactivate_resets_state() {
        let store = ConversationStore::new();
        store.activate("s-1").await;
        store.append(ChatMessage::user("hello")).await;

        store.deactivate().await;

        assert_eq!(store.session_id().await, None);
        assert_eq!(store.message_count().await, 0);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = ConversationStore::new();
        let handle = store.clone();

        store.activate("s-1").await;
        handle.append(ChatMessage::user("hello")).await;

        assert_eq!(store.message_count().await, 1);
        assert_eq!(handle.session_id().await, Some("s-1".to_string()));
    }
}
