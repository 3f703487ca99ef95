//! Generic search orchestration shared by the entity search services.

use crate::domain::criteria::SearchCriteria;
use crate::domain::results::SearchResults;
use crate::dto::search::{SearchPage, SearchPageSettings};
use crate::pagination::Paginated;
use crate::query::QueryBuilder;
use crate::repository::SearchExecutor;
use crate::repository::errors::RepositoryResult;
use crate::services::ServiceResult;

/// Entry point of an entity-specific search.
pub trait SearchService {
    type Item;
    type Criteria: AsRef<SearchCriteria>;

    fn search(&self, criteria: &Self::Criteria) -> RepositoryResult<SearchResults<Self::Item>>;
}

/// Runs the count and data queries rendered from `builder`.
///
/// The criteria ordering, when set, replaces any order-by clause already on
/// the builder. Executor errors are returned unchanged.
pub fn search<T, R>(
    repo: &R,
    criteria: &SearchCriteria,
    mut builder: QueryBuilder,
) -> RepositoryResult<SearchResults<T>>
where
    R: SearchExecutor<T> + ?Sized,
{
    if let Some(order_by) = criteria.order_by_clause() {
        builder = builder.order_by(order_by);
    }

    let count_query = builder.build_count_query();
    let query = builder.build_query();

    let total = repo.count(&count_query)?;
    let items = repo.fetch(
        &query,
        criteria.calculate_offset(),
        criteria.results_per_page,
    )?;

    Ok(SearchResults::new(total, items))
}

/// Searches with the request criteria and prepares the page for rendering.
///
/// Missing criteria, or `clear` set by the user, fall back to the defaults.
pub fn load_search_page<S>(
    service: &S,
    criteria: Option<S::Criteria>,
    clear: bool,
    settings: &SearchPageSettings,
) -> ServiceResult<SearchPage<S::Item, S::Criteria>>
where
    S: SearchService + ?Sized,
    S::Criteria: Default,
{
    let criteria = match criteria {
        Some(criteria) if !clear => criteria,
        _ => S::Criteria::default(),
    };

    let results = service.search(&criteria).map_err(|err| {
        log::error!("Failed to run search: {err}");
        err
    })?;

    Ok(SearchPage {
        results: Paginated::new(results, criteria.as_ref(), settings.maximum_page_links),
        criteria,
        permissions: settings.permissions,
    })
}
