//! HTTP backend client for the Agentdesk console core.
//!
//! Implements the `SessionApi` trait from `agentdesk-core` over the
//! backend's REST surface, with configuration from the environment or
//! explicit construction.

pub mod config;
pub mod http_api;

pub use config::ClientConfig;
pub use http_api::HttpSessionApi;
