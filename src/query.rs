//! String-assembling query builder used by the search services.
//!
//! The builder keeps clause fragments and named parameters and renders two
//! queries from them: the paged data query and the matching count query.
//! Clause text is passed through verbatim; the executor is the first place
//! where malformed fragments are detected.
//!
//! Fragments must alias the searched entity as `e` and reference parameters by
//! name, e.g. `e.age < :age`.

use std::collections::HashMap;

/// A value bound to a named parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl<T> From<Option<T>> for ParamValue
where
    T: Into<ParamValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}

/// Final query text paired with the named parameters it expects.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedQuery {
    pub query: String,
    pub params: HashMap<String, ParamValue>,
}

/// Builder accumulating the clauses of a search query.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    select: String,
    select_count: String,
    where_clause: String,
    params: HashMap<String, ParamValue>,
    order_by: Option<String>,
    group_by: Option<String>,
}

impl QueryBuilder {
    /// Creates a builder from the data select (`select e from contacts e`) and
    /// the count select (`select count(e.id) from contacts e`).
    pub fn new(select: impl Into<String>, select_count: impl Into<String>) -> Self {
        Self {
            select: select.into(),
            select_count: select_count.into(),
            ..Self::default()
        }
    }

    /// Replaces the select clause of the data query.
    pub fn select(mut self, select: impl Into<String>) -> Self {
        self.select = select.into();
        self
    }

    /// Replaces the select clause of the count query.
    pub fn select_count(mut self, select_count: impl Into<String>) -> Self {
        self.select_count = select_count.into();
        self
    }

    /// Appends a where fragment, joined with `and` to any existing fragment.
    ///
    /// The fragment must not include the `where` keyword.
    pub fn and_where(self, clause: impl AsRef<str>) -> Self {
        self.push_where(" and ", clause.as_ref())
    }

    /// Appends a where fragment, joined with `or` to any existing fragment.
    pub fn or_where(self, clause: impl AsRef<str>) -> Self {
        self.push_where(" or ", clause.as_ref())
    }

    fn push_where(mut self, joiner: &str, clause: &str) -> Self {
        if !self.where_clause.is_empty() {
            self.where_clause.push_str(joiner);
        }
        self.where_clause.push_str(clause);
        self
    }

    /// Binds a named parameter. Setting the same name twice keeps the last value.
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Replaces the order-by clause, e.g. `e.age asc, e.id desc`.
    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    /// Replaces the group-by clause.
    pub fn group_by(mut self, group_by: impl Into<String>) -> Self {
        self.group_by = Some(group_by.into());
        self
    }

    /// Renders the data query: select, where, group by, order by.
    pub fn build_query(&self) -> RenderedQuery {
        let mut query = self.select.clone();
        self.append_where(&mut query);

        if let Some(group_by) = &self.group_by {
            query.push_str(" group by ");
            query.push_str(group_by);
        }

        if let Some(order_by) = &self.order_by {
            query.push_str(" order by ");
            query.push_str(order_by);
        }

        RenderedQuery {
            query,
            params: self.params.clone(),
        }
    }

    /// Renders the count query. Grouping and ordering are never applied.
    pub fn build_count_query(&self) -> RenderedQuery {
        let mut query = self.select_count.clone();
        self.append_where(&mut query);

        RenderedQuery {
            query,
            params: self.params.clone(),
        }
    }

    fn append_where(&self, query: &mut String) {
        if !self.where_clause.is_empty() {
            query.push_str(" where ");
            query.push_str(&self.where_clause);
        }
    }
}
