//! Contact search and CRUD services.

use crate::domain::contact::{Contact, ContactSearchCriteria, NewContact};
use crate::domain::criteria::{to_lower, to_search_string};
use crate::domain::results::SearchResults;
use crate::dto::search::{SearchPage, SearchPageSettings};
use crate::models::contact::Contact as DbContact;
use crate::query::QueryBuilder;
use crate::repository::SearchExecutor;
use crate::repository::contact::{ContactReader, ContactWriter};
use crate::repository::errors::RepositoryResult;
use crate::services::search::{SearchService, load_search_page, search};
use crate::services::{ServiceError, ServiceResult};

const SELECT: &str = "select e.* from contacts e";
const SELECT_COUNT: &str = "select count(e.id) from contacts e";

/// Columns the contacts page may be ordered by.
pub const ORDERABLE_COLUMNS: [&str; 4] = ["e.id", "e.name", "e.email", "e.created_at"];

/// Searches contacts by name and email patterns.
pub struct ContactSearchService<'a, R: ?Sized> {
    repo: &'a R,
}

impl<'a, R: ?Sized> ContactSearchService<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }
}

fn pattern(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(to_search_string)
}

impl<R> SearchService for ContactSearchService<'_, R>
where
    R: SearchExecutor<DbContact> + ?Sized,
{
    type Item = Contact;
    type Criteria = ContactSearchCriteria;

    fn search(&self, criteria: &ContactSearchCriteria) -> RepositoryResult<SearchResults<Contact>> {
        let mut builder = QueryBuilder::new(SELECT, SELECT_COUNT);

        if let Some(name) = pattern(criteria.name.as_deref()) {
            builder = builder
                .and_where(format!("{} like :name", to_lower("e.name")))
                .with_parameter("name", name);
        }

        if let Some(email) = pattern(criteria.email.as_deref()) {
            builder = builder
                .and_where(format!("{} like :email", to_lower("e.email")))
                .with_parameter("email", email);
        }

        let results = search::<DbContact, _>(self.repo, &criteria.criteria, builder)?;

        Ok(results.map(Contact::from))
    }
}

/// Loads the contacts index page.
pub fn load_contacts_page<R>(
    repo: &R,
    criteria: Option<ContactSearchCriteria>,
    clear: bool,
    settings: &SearchPageSettings,
) -> ServiceResult<SearchPage<Contact, ContactSearchCriteria>>
where
    R: SearchExecutor<DbContact> + ?Sized,
{
    load_search_page(&ContactSearchService::new(repo), criteria, clear, settings)
}

/// Persists a new contact when the page allows adding.
pub fn add_contact<R>(
    repo: &R,
    settings: &SearchPageSettings,
    new_contact: NewContact,
) -> ServiceResult<()>
where
    R: ContactWriter + ?Sized,
{
    if !settings.permissions.addable {
        return Err(ServiceError::Forbidden(
            "Adding contacts is disabled".to_string(),
        ));
    }

    if new_contact.name.is_empty() {
        return Err(ServiceError::Form("Contact name is required".to_string()));
    }

    repo.create_contacts(&[new_contact]).map_err(|err| {
        log::error!("Failed to add a contact: {err}");
        err
    })?;

    Ok(())
}

/// Loads one contact for its detail page, which also hosts the edit form.
pub fn load_contact<R>(repo: &R, settings: &SearchPageSettings, id: i32) -> ServiceResult<Contact>
where
    R: ContactReader + ?Sized,
{
    let permissions = settings.permissions;
    if !(permissions.detailable || permissions.editable) {
        return Err(ServiceError::Forbidden(
            "Contact details are disabled".to_string(),
        ));
    }

    repo.get_contact_by_id(id)
        .map_err(|err| {
            log::error!("Failed to load contact {id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)
}

/// Replaces the fields of an existing contact.
pub fn update_contact<R>(
    repo: &R,
    settings: &SearchPageSettings,
    id: i32,
    updates: NewContact,
) -> ServiceResult<Contact>
where
    R: ContactWriter + ?Sized,
{
    if !settings.permissions.editable {
        return Err(ServiceError::Forbidden(
            "Editing contacts is disabled".to_string(),
        ));
    }

    if updates.name.is_empty() {
        return Err(ServiceError::Form("Contact name is required".to_string()));
    }

    let contact = repo.update_contact(id, &updates).map_err(|err| {
        log::error!("Failed to update contact {id}: {err}");
        err
    })?;

    Ok(contact)
}

/// Deletes a contact when the page allows deleting.
pub fn delete_contact<R>(repo: &R, settings: &SearchPageSettings, id: i32) -> ServiceResult<()>
where
    R: ContactWriter + ?Sized,
{
    if !settings.permissions.deletable {
        return Err(ServiceError::Forbidden(
            "Deleting contacts is disabled".to_string(),
        ));
    }

    let deleted = repo.delete_contact(id).map_err(|err| {
        log::error!("Failed to delete contact {id}: {err}");
        err
    })?;

    if deleted == 0 {
        return Err(ServiceError::NotFound);
    }

    Ok(())
}
