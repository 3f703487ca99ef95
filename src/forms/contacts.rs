use serde::Deserialize;
use validator::{Validate, ValidateEmail};

use crate::domain::contact::{ContactSearchCriteria, NewContact};
use crate::domain::criteria::{DEFAULT_RESULTS_PER_PAGE, SearchCriteria, Sort};
use crate::forms::FormError;
use crate::services::contacts::ORDERABLE_COLUMNS;

/// Query string of the contacts search page.
///
/// The page keeps no server-side state: every link carries the full criteria.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ContactSearchForm {
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<usize>,
    pub order_by: Option<String>,
    pub sort: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Resets the criteria to the defaults.
    #[serde(default)]
    pub clear: bool,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl TryFrom<ContactSearchForm> for ContactSearchCriteria {
    type Error = FormError;

    fn try_from(form: ContactSearchForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let sort = match non_blank(form.sort) {
            Some(sort) => sort.parse::<Sort>().map_err(|_| FormError::InvalidSort)?,
            None => Sort::default(),
        };

        // Order-by text is spliced into the query, so only known columns pass.
        let order_by = non_blank(form.order_by);
        if order_by
            .as_deref()
            .is_some_and(|field| !ORDERABLE_COLUMNS.contains(&field))
        {
            return Err(FormError::InvalidOrderBy);
        }

        Ok(ContactSearchCriteria {
            criteria: SearchCriteria {
                results_per_page: form.per_page.unwrap_or(DEFAULT_RESULTS_PER_PAGE),
                page: form.page.unwrap_or(1),
                sort,
                order_by,
            },
            name: non_blank(form.name),
            email: non_blank(form.email),
        })
    }
}

/// Fields of the add and edit contact forms.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveContactForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl TryFrom<SaveContactForm> for NewContact {
    type Error = FormError;

    fn try_from(form: SaveContactForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let contact = NewContact::new(form.name, form.email, form.phone);
        if contact
            .email
            .as_ref()
            .is_some_and(|email| !email.validate_email())
        {
            return Err(FormError::InvalidEmail);
        }

        Ok(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_gives_default_criteria() {
        let criteria = ContactSearchCriteria::try_from(ContactSearchForm::default()).unwrap();

        assert_eq!(criteria, ContactSearchCriteria::default());
    }

    #[test]
    fn test_form_to_criteria() {
        let form = ContactSearchForm {
            page: Some(3),
            per_page: Some(50),
            order_by: Some("e.name".to_string()),
            sort: Some("DESC".to_string()),
            name: Some(" ali ".to_string()),
            email: Some("".to_string()),
            clear: false,
        };

        let criteria = ContactSearchCriteria::try_from(form).unwrap();

        assert_eq!(criteria.criteria.page, 3);
        assert_eq!(criteria.criteria.results_per_page, 50);
        assert_eq!(criteria.criteria.sort, Sort::Desc);
        assert_eq!(criteria.criteria.order_by.as_deref(), Some("e.name"));
        assert_eq!(criteria.name.as_deref(), Some("ali"));
        assert!(criteria.email.is_none());
    }

    #[test]
    fn test_form_rejects_zero_page_size() {
        let form = ContactSearchForm {
            per_page: Some(0),
            ..ContactSearchForm::default()
        };

        assert!(matches!(
            ContactSearchCriteria::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn test_form_rejects_zero_page() {
        let form = ContactSearchForm {
            page: Some(0),
            ..ContactSearchForm::default()
        };

        assert!(ContactSearchCriteria::try_from(form).is_err());
    }

    #[test]
    fn test_form_rejects_unknown_order_by() {
        let form = ContactSearchForm {
            order_by: Some("e.name; drop table contacts".to_string()),
            ..ContactSearchForm::default()
        };

        assert!(matches!(
            ContactSearchCriteria::try_from(form),
            Err(FormError::InvalidOrderBy)
        ));
    }

    #[test]
    fn test_form_rejects_unknown_sort() {
        let form = ContactSearchForm {
            sort: Some("up".to_string()),
            ..ContactSearchForm::default()
        };

        assert!(matches!(
            ContactSearchCriteria::try_from(form),
            Err(FormError::InvalidSort)
        ));
    }

    #[test]
    fn test_add_contact_form() {
        let form = SaveContactForm {
            name: "Alice".to_string(),
            email: Some(" Alice@Example.com ".to_string()),
            phone: Some(String::new()),
        };

        let contact = NewContact::try_from(form).unwrap();

        assert_eq!(contact.email.as_deref(), Some("alice@example.com"));
        assert!(contact.phone.is_none());
    }

    #[test]
    fn test_add_contact_form_rejects_bad_email() {
        let form = SaveContactForm {
            name: "Alice".to_string(),
            email: Some("not-an-email".to_string()),
            phone: None,
        };

        assert!(matches!(
            NewContact::try_from(form),
            Err(FormError::InvalidEmail)
        ));
    }
}
