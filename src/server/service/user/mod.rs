//! User service layer.

/// Identity lookups for entitlement resolution
pub mod identity;
