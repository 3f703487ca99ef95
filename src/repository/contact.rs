use diesel::prelude::*;

use crate::domain::contact::{Contact, NewContact};
use crate::models::contact::{
    Contact as DbContact, NewContact as DbNewContact, UpdateContact as DbUpdateContact,
};
use crate::repository::DieselRepository;
use crate::repository::errors::RepositoryResult;

pub trait ContactReader {
    fn get_contact_by_id(&self, id: i32) -> RepositoryResult<Option<Contact>>;
}

pub trait ContactWriter {
    fn create_contacts(&self, new_contacts: &[NewContact]) -> RepositoryResult<usize>;
    /// Replaces the editable fields; a missing contact is [`RepositoryError::NotFound`].
    ///
    /// [`RepositoryError::NotFound`]: crate::repository::errors::RepositoryError::NotFound
    fn update_contact(&self, id: i32, updates: &NewContact) -> RepositoryResult<Contact>;
    /// Returns the number of deleted rows.
    fn delete_contact(&self, id: i32) -> RepositoryResult<usize>;
}

impl ContactReader for DieselRepository {
    fn get_contact_by_id(&self, id: i32) -> RepositoryResult<Option<Contact>> {
        use crate::schema::contacts;

        let mut conn = self.pool().get()?;
        let contact = contacts::table
            .find(id)
            .first::<DbContact>(&mut conn)
            .optional()?;

        Ok(contact.map(Into::into))
    }
}

impl ContactWriter for DieselRepository {
    fn create_contacts(&self, new_contacts: &[NewContact]) -> RepositoryResult<usize> {
        use crate::schema::contacts;

        let mut conn = self.pool().get()?;
        let insertables: Vec<DbNewContact> = new_contacts.iter().map(Into::into).collect();
        let affected = diesel::insert_into(contacts::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_contact(&self, id: i32, updates: &NewContact) -> RepositoryResult<Contact> {
        use crate::schema::contacts;

        let mut conn = self.pool().get()?;
        let changes: DbUpdateContact = updates.into();
        let updated = diesel::update(contacts::table.find(id))
            .set(&changes)
            .get_result::<DbContact>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_contact(&self, id: i32) -> RepositoryResult<usize> {
        use crate::schema::contacts;

        let mut conn = self.pool().get()?;
        let deleted = diesel::delete(contacts::table.find(id)).execute(&mut conn)?;

        Ok(deleted)
    }
}
