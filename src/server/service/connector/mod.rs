//! Connector services.
//!
//! Everything a platform connector needs from Heimdall: which sets a linked user is entitled
//! to, the nickname to display for them, the connector log and the linked user store.

/// Set entitlement resolution
pub mod entitlement;
/// Connector event logging
pub mod logger;
/// Nickname builder
pub mod nickname;
/// Linked user store
pub mod user;
