//! Test fixture modules for database record creation.
//!
//! Each submodule provides specialized fixtures for a part of the schema:
//!
//! - `eve` - EVE Online entity data (alliances, corporations, characters, titles)
//! - `user` - Heimdall users, character ownership, refresh tokens, roles and squads
//! - `connector` - Sets, set criteria and linked platform users

pub mod connector;
pub mod eve;
pub mod user;
