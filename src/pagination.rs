//! Page-link arithmetic for search result pages.

use serde::Serialize;

use crate::domain::criteria::SearchCriteria;
use crate::domain::results::SearchResults;

/// Default number of page links rendered around the current page.
pub const DEFAULT_MAXIMUM_PAGE_LINKS: usize = 6;

/// Page-link window and result indices derived from a total count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub number_of_pages: usize,
    pub current_page: usize,
    pub start_page: usize,
    pub end_page: usize,
    pub next_page: usize,
    pub previous_page: usize,
    /// 1-based index of the first result on the page, 0 when the page is empty.
    pub first_result: usize,
    /// 1-based index of the last result on the page, 0 when the page is empty.
    pub last_result: usize,
}

impl PageWindow {
    /// Computes the window for `current_page`.
    ///
    /// `current_page` is used as given and may lie outside `1..=number_of_pages`.
    pub fn calculate(
        total: usize,
        results_per_page: usize,
        current_page: usize,
        maximum_page_links: usize,
        result_count: usize,
    ) -> Self {
        let number_of_pages = if results_per_page == 0 {
            1
        } else {
            total.div_ceil(results_per_page).max(1)
        };

        let half = maximum_page_links / 2;
        let start_page = current_page
            .saturating_sub(half)
            .max(1)
            .min(number_of_pages);
        let end_page = current_page
            .saturating_add(half)
            .min(number_of_pages)
            .max(1);

        let next_page = if current_page >= number_of_pages {
            number_of_pages
        } else {
            current_page + 1
        };
        let previous_page = if current_page <= 1 {
            1
        } else {
            current_page - 1
        };

        let (first_result, last_result) = if result_count > 0 {
            let first = current_page
                .saturating_sub(1)
                .saturating_mul(results_per_page)
                .saturating_add(1);
            (first, first.saturating_add(result_count - 1))
        } else {
            (0, 0)
        };

        Self {
            number_of_pages,
            current_page,
            start_page,
            end_page,
            next_page,
            previous_page,
            first_result,
            last_result,
        }
    }

    /// Page numbers to render as links, `start_page..=end_page`.
    pub fn pages(&self) -> Vec<usize> {
        (self.start_page..=self.end_page).collect()
    }
}

/// A page of items ready to be rendered with its pagination controls.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
    #[serde(flatten)]
    pub window: PageWindow,
    pub pages: Vec<usize>,
}

impl<T> Paginated<T> {
    pub fn new(
        results: SearchResults<T>,
        criteria: &SearchCriteria,
        maximum_page_links: usize,
    ) -> Self {
        let total = usize::try_from(results.total).unwrap_or_default();
        let window = PageWindow::calculate(
            total,
            criteria.results_per_page,
            criteria.page,
            maximum_page_links,
            results.items.len(),
        );

        Self {
            items: results.items,
            total: results.total,
            pages: window.pages(),
            window,
        }
    }
}
