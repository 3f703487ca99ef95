use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::criteria::SearchCriteria;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl NewContact {
    #[must_use]
    pub fn new(name: String, email: Option<String>, phone: Option<String>) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Criteria of the contacts search page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactSearchCriteria {
    pub criteria: SearchCriteria,
    /// Name pattern, `*` acts as a wildcard.
    pub name: Option<String>,
    /// Email pattern, `*` acts as a wildcard.
    pub email: Option<String>,
}

impl ContactSearchCriteria {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl AsRef<SearchCriteria> for ContactSearchCriteria {
    fn as_ref(&self) -> &SearchCriteria {
        &self.criteria
    }
}
