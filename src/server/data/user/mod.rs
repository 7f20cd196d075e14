//! Heimdall identity repositories.
//!
//! Users, the characters they own, the refresh tokens of those characters, and the roles and
//! squads granted to users.

/// Refresh tokens of owned characters
pub mod refresh_token;
/// Roles
pub mod role;
/// Squads
pub mod squad;
/// Character ownership
pub mod user_character;

use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::db::UserModel;

/// Heimdall user accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get a user by record ID
    pub async fn get(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::HeimdallUser::find_by_id(user_id)
            .one(self.db)
            .await
    }
}
