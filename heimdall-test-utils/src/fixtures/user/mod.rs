//! User, character ownership, refresh token, role and squad fixture utilities.

pub mod data;

use crate::TestContext;

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    pub setup: &'a TestContext,
}
