//! Application layer for the Agentdesk console core.
//!
//! This crate provides the use cases that coordinate between the domain
//! layer and the backend client. Its centerpiece is session restoration:
//! rebuilding the conversation store from a stored session and its trace
//! listing, exactly once per activation.

pub mod restorer;

pub use restorer::{SessionRestorer, attach_trace_ids};
