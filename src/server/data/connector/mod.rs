//! Connector repositories.
//!
//! Set definitions with their membership criteria, the bindings between Heimdall users and
//! platform accounts, and the persisted connector log.

/// Persisted connector events
pub mod log;
/// Sets and membership criteria
pub mod set;
/// Bindings between users and platform accounts
pub mod user;
