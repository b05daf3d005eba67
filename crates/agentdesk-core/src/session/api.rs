//! Session API trait.
//!
//! Defines the interface for fetching stored sessions and their trace
//! listings from the console backend.

use super::record::{SessionRecord, SessionSummary};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract client for the backend's session resources.
///
/// This trait defines the contract for retrieving stored sessions,
/// decoupling the restoration logic from the transport (HTTP in production,
/// in-memory fakes in tests).
#[async_trait]
pub trait SessionApi: Send + Sync {
    /// Fetches a stored session by its ID.
    ///
    /// # Arguments
    ///
    /// * `session_id` - The ID of the session to fetch
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))`: Session found
    /// - `Ok(None)`: Session not found (a normal outcome, not an error)
    /// - `Err(_)`: Transport or decode error
    async fn get_session(&self, session_id: &str) -> Result<Option<SessionRecord>>;

    /// Fetches the ordered execution trace ids recorded for a session.
    ///
    /// The server returns trace ids in the chronological order the
    /// underlying executions occurred.
    ///
    /// # Arguments
    ///
    /// * `session_id` - The ID of the session whose traces to list
    ///
    /// # Returns
    ///
    /// - `Ok(trace_ids)`: Ordered trace ids (possibly empty)
    /// - `Err(_)`: Transport or decode error
    async fn get_session_trace_ids(&self, session_id: &str) -> Result<Vec<String>>;

    /// Lists all stored sessions.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<SessionSummary>)`: All stored sessions
    /// - `Err(_)`: Transport or decode error
    async fn list_sessions(&self) -> Result<Vec<SessionSummary>>;
}
