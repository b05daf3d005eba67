//! Domain layer for the Agentdesk console core.
//!
//! This crate holds the conversation model and store, the wire-side session
//! records, and the trait boundary to the console backend. Application-level
//! logic (session restoration) lives in `agentdesk-application`; the HTTP
//! client lives in `agentdesk-client`.

pub mod conversation;
pub mod error;
pub mod session;

// Re-export common error type
pub use error::AgentdeskError;
