//! Persistence collaborators executing rendered search queries.

use crate::db::DbPool;
use crate::query::RenderedQuery;
use crate::repository::errors::RepositoryResult;

pub mod contact;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod named;
pub mod search;

/// Executes rendered queries and maps the rows into `T`.
pub trait SearchExecutor<T> {
    /// Runs a count query and returns the single count it selects.
    fn count(&self, query: &RenderedQuery) -> RepositoryResult<i64>;

    /// Runs a data query returning at most `limit` rows after skipping `offset`.
    fn fetch(&self, query: &RenderedQuery, offset: usize, limit: usize)
    -> RepositoryResult<Vec<T>>;
}

/// Diesel-backed repository sharing one SQLite connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}
