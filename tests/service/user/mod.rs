//! Tests for user services.
