//! Server application core modules.
//!
//! This module contains all server-side functionality for Heimdall: HTTP routing, database
//! access, set entitlement resolution, nicknames, the connector log and configuration.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Environment configuration
pub mod config;
/// HTTP handlers
pub mod controller;
/// Database repositories
pub mod data;
/// Error types and their HTTP responses
pub mod error;
/// Server-side models and application state
pub mod model;
/// API routes
pub mod router;
/// Business logic on top of the repositories
pub mod service;
/// Database connection and migrations
pub mod startup;
/// Helpers
pub mod util;
