//! Set, set criteria and linked user fixture utilities.

pub mod data;

use crate::TestContext;

impl TestContext {
    pub fn connector<'a>(&'a self) -> ConnectorFixtures<'a> {
        ConnectorFixtures { setup: self }
    }
}

pub struct ConnectorFixtures<'a> {
    pub setup: &'a TestContext,
}
