//! Heimdall: group membership sync between EVE Online identities and third party platforms.

pub mod model;
pub mod server;
