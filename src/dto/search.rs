use serde::{Deserialize, Serialize};

use crate::pagination::{DEFAULT_MAXIMUM_PAGE_LINKS, Paginated};

/// Which CRUD actions a search page offers next to its results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrudPermissions {
    pub addable: bool,
    pub editable: bool,
    pub detailable: bool,
    pub deletable: bool,
}

impl Default for CrudPermissions {
    fn default() -> Self {
        Self {
            addable: true,
            editable: true,
            detailable: true,
            deletable: true,
        }
    }
}

/// Presentation settings of a search page, read from the `search` config section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchPageSettings {
    /// Maximum number of page links shown around the current page.
    pub maximum_page_links: usize,
    pub permissions: CrudPermissions,
}

impl Default for SearchPageSettings {
    fn default() -> Self {
        Self {
            maximum_page_links: DEFAULT_MAXIMUM_PAGE_LINKS,
            permissions: CrudPermissions::default(),
        }
    }
}

/// Data required to render a search page.
#[derive(Debug, Serialize)]
pub struct SearchPage<T, C> {
    /// Current page of results with its pagination controls.
    pub results: Paginated<T>,
    /// Criteria the page was searched with, echoed back to the form.
    pub criteria: C,
    pub permissions: CrudPermissions,
}
