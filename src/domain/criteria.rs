//! Paging and ordering state of a single search request.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of rows returned per page when the caller does not choose one.
pub const DEFAULT_RESULTS_PER_PAGE: usize = 20;

/// Sort direction appended to the order-by field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort direction: {0}")]
pub struct UnknownSort(pub String);

impl Display for Sort {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Sort::Asc => write!(f, "asc"),
            Sort::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for Sort {
    type Err = UnknownSort;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Sort::Asc),
            "desc" => Ok(Sort::Desc),
            other => Err(UnknownSort(other.to_string())),
        }
    }
}

/// Base criteria embedded by every entity-specific search.
///
/// `page` is 1-based and `results_per_page` is expected to be positive. The
/// struct does not enforce either; request input is validated by the forms
/// before it lands here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub results_per_page: usize,
    pub page: usize,
    pub sort: Sort,
    /// Order-by expression without the direction, e.g. `e.name`.
    pub order_by: Option<String>,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
            page: 1,
            sort: Sort::Asc,
            order_by: None,
        }
    }
}

impl SearchCriteria {
    /// Zero-based row offset of the current page.
    pub fn calculate_offset(&self) -> usize {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.results_per_page)
    }

    /// Returns the order-by clause including the direction, if an order-by
    /// field is set and not blank.
    pub fn order_by_clause(&self) -> Option<String> {
        self.order_by
            .as_deref()
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(|field| format!("{field} {}", self.sort))
    }

    pub fn paginate(mut self, page: usize, results_per_page: usize) -> Self {
        self.page = page;
        self.results_per_page = results_per_page;
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, sort: Sort) -> Self {
        self.order_by = Some(field.into());
        self.sort = sort;
        self
    }
}

impl AsRef<SearchCriteria> for SearchCriteria {
    fn as_ref(&self) -> &SearchCriteria {
        self
    }
}

/// Turns user input into a `like` pattern.
///
/// The input is trimmed and lower-cased. `*` wildcards become `%`; input
/// without wildcards is wrapped in `%` on both sides.
pub fn to_search_string(value: &str) -> String {
    let normalized = value.trim().to_lowercase();
    if normalized.contains('*') {
        normalized.replace('*', "%")
    } else {
        format!("%{normalized}%")
    }
}

/// Wraps a column expression in `lower(...)` for case-insensitive matching.
pub fn to_lower(column: &str) -> String {
    format!("lower({})", column.trim().to_lowercase())
}
