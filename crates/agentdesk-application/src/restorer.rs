use agentdesk_core::conversation::{ChatMessage, ConversationStore, MessageRole};
use agentdesk_core::error::Result;
use agentdesk_core::session::{SessionApi, to_chat_messages};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio_util::sync::CancellationToken;

/// Restores a stored session into the conversation store, exactly once.
///
/// `SessionRestorer` is responsible for:
/// - Detecting an eligible activation (session id present, empty store,
///   no exchange running)
/// - Fetching the message history and the trace listing concurrently
/// - Re-attaching trace ids to assistant messages in order
/// - Appending the reconstructed history to the store in original order
///
/// One instance is created per activation of the chat surface. The one-shot
/// latch lives on the instance, so two surfaces restoring in the same
/// process never share it. All failures are absorbed at this boundary: a
/// missing session, an empty history, and a transport failure all leave the
/// store as a fresh, empty conversation.
pub struct SessionRestorer {
    /// Shared conversation state this restorer fills.
    store: ConversationStore,
    /// Backend client for session and trace listings.
    api: Arc<dyn SessionApi>,
    /// One-shot latch: set before the first fetch, never re-armed.
    attempted: AtomicBool,
    /// Cancelled by the hosting surface when it goes away; an in-flight
    /// restoration that completes afterwards must not touch the store.
    liveness: CancellationToken,
}

impl SessionRestorer {
    /// Creates a new `SessionRestorer` over the given store and backend.
    ///
    /// # Arguments
    ///
    /// * `store` - The conversation store to fill
    /// * `api` - The backend client for session resources
    pub fn new(store: ConversationStore, api: Arc<dyn SessionApi>) -> Self {
        Self {
            store,
            api,
            attempted: AtomicBool::new(false),
            liveness: CancellationToken::new(),
        }
    }

    /// Returns a clone of the liveness token.
    ///
    /// The hosting surface cancels it (or calls [`cancel`](Self::cancel))
    /// when it unmounts, so a restoration still in flight cannot act on a
    /// stale activation.
    pub fn liveness_token(&self) -> CancellationToken {
        self.liveness.clone()
    }

    /// Marks the hosting surface as gone.
    pub fn cancel(&self) {
        self.liveness.cancel();
    }

    /// Returns whether a restoration attempt has been made.
    pub fn attempted(&self) -> bool {
        self.attempted.load(Ordering::SeqCst)
    }

    /// Restores the active session if this activation is eligible.
    ///
    /// Eligible means: the store has a session id, holds no messages, no
    /// exchange is running, and no attempt has been made by this instance.
    /// Safe to call any number of times; re-evaluations while a restoration
    /// is in flight return immediately.
    ///
    /// Never fails: a missing session and a transport failure both leave
    /// the store empty, indistinguishable from a legitimately new session.
    pub async fn maybe_restore(&self) {
        let Some(session_id) = self.store.session_id().await else {
            return;
        };
        if self.store.is_running().await || self.store.message_count().await > 0 {
            return;
        }
        // Latch before the first fetch so a concurrent re-evaluation cannot
        // start a second attempt mid-flight.
        if self.attempted.swap(true, Ordering::SeqCst) {
            return;
        }

        if let Err(e) = self.restore(&session_id).await {
            tracing::debug!("Session restore skipped for '{}': {}", session_id, e);
        }
    }

    /// Fetches, reconciles, and appends the stored history for `session_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if either fetch fails. The caller absorbs it; no
    /// partial state is committed either way.
    async fn restore(&self, session_id: &str) -> Result<()> {
        let (session, trace_ids) = tokio::join!(
            self.api.get_session(session_id),
            self.api.get_session_trace_ids(session_id),
        );
        // Both requests have settled; act only if both succeeded.
        let (session, trace_ids) = (session?, trace_ids?);

        let Some(session) = session else {
            tracing::debug!("Session '{}' not found, starting fresh", session_id);
            return Ok(());
        };
        if session.messages.is_empty() {
            return Ok(());
        }

        let mut messages = to_chat_messages(&session.messages);
        attach_trace_ids(&mut messages, &trace_ids);

        // The fetches suspended; re-check that this activation is still the
        // one the store is showing before mutating it.
        if self.liveness.is_cancelled()
            || self.store.session_id().await.as_deref() != Some(session_id)
            || self.store.message_count().await > 0
        {
            tracing::debug!("Discarding restored history for stale session '{}'", session_id);
            return Ok(());
        }

        // One append per message so concurrent readers only ever observe a
        // growing prefix of the final log.
        for message in messages {
            self.store.append(message).await;
        }

        tracing::debug!("Restored session '{}'", session_id);
        Ok(())
    }
}

/// Attaches trace ids to assistant messages with a truncating cursor.
///
/// Messages are scanned in order; each assistant message takes the next
/// trace id until the list is exhausted. Other roles are skipped without
/// advancing the cursor. Surplus assistant messages keep `trace_id = None`;
/// surplus trace ids are dropped. Assumes the server recorded trace ids in
/// the same relative order the assistant messages were produced.
pub fn attach_trace_ids(messages: &mut [ChatMessage], trace_ids: &[String]) {
    let mut cursor = trace_ids.iter();
    for message in messages
        .iter_mut()
        .filter(|m| m.role == MessageRole::Assistant)
    {
        let Some(trace_id) = cursor.next() else {
            break;
        };
        message.trace_id = Some(trace_id.clone());
    }
}

#[cfg(test)]
#[path = "restorer_test.rs"]
mod tests;
