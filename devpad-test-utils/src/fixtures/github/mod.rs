pub mod factory;
pub mod mockito;

use crate::TestContext;

impl TestContext {
    pub fn github<'a>(&'a mut self) -> GithubFixtures<'a> {
        GithubFixtures { setup: self }
    }
}

pub struct GithubFixtures<'a> {
    setup: &'a mut TestContext,
}
