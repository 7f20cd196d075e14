use crate::TestContext;

pub mod data;

impl TestContext {
    pub fn eve<'a>(&'a self) -> EveFixtures<'a> {
        EveFixtures { setup: self }
    }
}

pub struct EveFixtures<'a> {
    pub setup: &'a TestContext,
}
