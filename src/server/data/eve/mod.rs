//! EVE Online data repositories.
//!
//! Read access to characters, corporations, alliances and corporation titles. The identity
//! system keeps these tables up to date; the connector only queries them.

/// Alliances
pub mod alliance;
/// Characters
pub mod character;
/// Corporations
pub mod corporation;
/// Corporation titles and the characters holding them
pub mod title;
