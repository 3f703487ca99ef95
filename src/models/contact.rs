use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::contact::{Contact as DomainContact, NewContact as DomainNewContact};

#[derive(Debug, Clone, Identifiable, Queryable, QueryableByName)]
#[diesel(table_name = crate::schema::contacts)]
/// Diesel model for [`crate::domain::contact::Contact`].
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::contacts)]
/// Insertable form of [`Contact`].
pub struct NewContact<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
}

impl From<Contact> for DomainContact {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            created_at: contact.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewContact> for NewContact<'a> {
    fn from(contact: &'a DomainNewContact) -> Self {
        Self {
            name: contact.name.as_str(),
            email: contact.email.as_deref(),
            phone: contact.phone.as_deref(),
        }
    }
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::contacts)]
#[diesel(treat_none_as_null = true)]
/// Changeset replacing the editable fields of a [`Contact`].
pub struct UpdateContact<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
}

impl<'a> From<&'a DomainNewContact> for UpdateContact<'a> {
    fn from(contact: &'a DomainNewContact) -> Self {
        Self {
            name: contact.name.as_str(),
            email: contact.email.as_deref(),
            phone: contact.phone.as_deref(),
        }
    }
}
