//! Service layer for business logic and orchestration.
//!
//! Services coordinate between repositories: the identity service assembles what set
//! resolution needs to know about a Heimdall user, and the connector services resolve
//! entitlements, build nicknames, record connector events and manage linked users.

/// Connector services
pub mod connector;
/// Identity services
pub mod user;
