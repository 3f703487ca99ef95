//! Rewrites `:name` placeholders into positional `?` binds.
//!
//! SQLite binds are positional in Diesel, so every named placeholder is
//! replaced by `?` and the matching value is queued in the same order. A name
//! used twice is bound twice.

use std::collections::{HashMap, HashSet};

use crate::query::ParamValue;
use crate::repository::errors::{RepositoryError, RepositoryResult};

/// Query text with positional placeholders and the values to bind in order.
#[derive(Debug, PartialEq)]
pub struct PositionalQuery<'a> {
    pub sql: String,
    pub binds: Vec<&'a ParamValue>,
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Rewrites `query`, resolving each placeholder against `params`.
///
/// Placeholders inside single-quoted literals and `::` casts are copied
/// verbatim. Referencing a name missing from `params` is an error; parameters
/// the query never references are ignored.
pub fn to_positional<'a>(
    query: &str,
    params: &'a HashMap<String, ParamValue>,
) -> RepositoryResult<PositionalQuery<'a>> {
    let mut sql = String::with_capacity(query.len());
    let mut binds = Vec::new();
    let mut used = HashSet::new();
    let mut in_literal = false;
    let mut chars = query.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            in_literal = !in_literal;
            sql.push(c);
            continue;
        }

        if in_literal || c != ':' {
            sql.push(c);
            continue;
        }

        match chars.peek() {
            Some(':') => {
                chars.next();
                sql.push_str("::");
            }
            Some(&next) if is_name_start(next) => {
                let mut name = String::new();
                while let Some(&next) = chars.peek() {
                    if !is_name_char(next) {
                        break;
                    }
                    name.push(next);
                    chars.next();
                }

                let (key, value) = params.get_key_value(&name).ok_or_else(|| {
                    RepositoryError::ValidationError(format!("Unbound query parameter: {name}"))
                })?;
                used.insert(key.as_str());
                binds.push(value);
                sql.push('?');
            }
            _ => sql.push(c),
        }
    }

    if used.len() < params.len() {
        let unused = params
            .keys()
            .filter(|name| !used.contains(name.as_str()))
            .collect::<Vec<_>>();
        log::debug!("Ignoring parameters not referenced by the query: {unused:?}");
    }

    Ok(PositionalQuery { sql, binds })
}
