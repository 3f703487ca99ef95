use serde::Serialize;

/// Total number of matches together with the requested page of items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults<T> {
    pub total: i64,
    pub items: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn new(total: i64, items: Vec<T>) -> Self {
        Self { total, items }
    }

    /// Converts the items while keeping the total count.
    pub fn map<U, F>(self, f: F) -> SearchResults<U>
    where
        F: FnMut(T) -> U,
    {
        SearchResults {
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

impl<T> Default for SearchResults<T> {
    fn default() -> Self {
        Self {
            total: 0,
            items: Vec::new(),
        }
    }
}
