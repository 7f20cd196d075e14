//! Utility functions and helpers for server operations.

/// String formatting
pub mod format;
