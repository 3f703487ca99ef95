//! Mock executor for isolating services in tests.

use mockall::mock;

use crate::query::RenderedQuery;
use crate::repository::SearchExecutor;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Executor<T: 'static> {}

    impl<T: 'static> SearchExecutor<T> for Executor<T> {
        fn count(&self, query: &RenderedQuery) -> RepositoryResult<i64>;
        fn fetch(
            &self,
            query: &RenderedQuery,
            offset: usize,
            limit: usize,
        ) -> RepositoryResult<Vec<T>>;
    }
}
