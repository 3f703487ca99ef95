//! Diesel implementation of [`SearchExecutor`] for SQLite.

use diesel::prelude::*;
use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::sql_query;
use diesel::sql_types::{BigInt, Bool, Double, Nullable, Text};
use diesel::sqlite::Sqlite;

use crate::query::{ParamValue, RenderedQuery};
use crate::repository::errors::RepositoryResult;
use crate::repository::named::to_positional;
use crate::repository::{DieselRepository, SearchExecutor};

type BoxedQuery = BoxedSqlQuery<'static, Sqlite, SqlQuery>;

#[derive(QueryableByName)]
struct CountRow {
    #[diesel(sql_type = BigInt)]
    total: i64,
}

fn bind_values(mut query: BoxedQuery, values: &[&ParamValue]) -> BoxedQuery {
    for value in values {
        query = match value {
            ParamValue::Text(v) => query.bind::<Text, _>(v.clone()),
            ParamValue::Integer(v) => query.bind::<BigInt, _>(*v),
            ParamValue::Float(v) => query.bind::<Double, _>(*v),
            ParamValue::Bool(v) => query.bind::<Bool, _>(*v),
            ParamValue::Null => query.bind::<Nullable<Text>, _>(None::<String>),
        };
    }
    query
}

/// SQLite takes `i64` limits and offsets; larger values select nothing anyway.
fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl<T> SearchExecutor<T> for DieselRepository
where
    T: QueryableByName<Sqlite> + 'static,
{
    fn count(&self, query: &RenderedQuery) -> RepositoryResult<i64> {
        let positional = to_positional(&query.query, &query.params)?;
        // The count select is wrapped as a scalar subquery so any column alias works.
        let sql = format!("SELECT ({}) AS total", positional.sql);
        log::debug!("Count query: {sql}");

        let mut conn = self.pool().get()?;
        let row = bind_values(sql_query(sql).into_boxed(), &positional.binds)
            .get_result::<CountRow>(&mut conn)?;

        Ok(row.total)
    }

    fn fetch(
        &self,
        query: &RenderedQuery,
        offset: usize,
        limit: usize,
    ) -> RepositoryResult<Vec<T>> {
        let positional = to_positional(&query.query, &query.params)?;
        let offset = to_i64(offset);
        let limit = to_i64(limit);
        let sql = format!("{} LIMIT ? OFFSET ?", positional.sql);
        log::debug!("Data query: {sql} (limit {limit}, offset {offset})");

        let mut conn = self.pool().get()?;
        let items = bind_values(sql_query(sql).into_boxed(), &positional.binds)
            .bind::<BigInt, _>(limit)
            .bind::<BigInt, _>(offset)
            .load::<T>(&mut conn)?;

        Ok(items)
    }
}
