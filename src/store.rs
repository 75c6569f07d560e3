// In-memory contact list for the running session.

use crate::contact::{Contact, ContactField};
use crate::error::{BookError, BookResult};
use tracing::{debug, info};

/// Ordered contacts owned by the command loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        ContactStore { contacts }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Swap in a freshly loaded list.
    pub fn replace(&mut self, contacts: Vec<Contact>) {
        info!(count = contacts.len(), "Contact list replaced");
        self.contacts = contacts;
    }

    /// Convert a 1-based index as shown on screen to a position.
    pub fn position(&self, index: usize) -> BookResult<usize> {
        if index == 0 || index > self.contacts.len() {
            return Err(BookError::IndexOutOfRange {
                index,
                len: self.contacts.len(),
            });
        }
        Ok(index - 1)
    }

    /// Contact at a 1-based index.
    pub fn get(&self, index: usize) -> BookResult<&Contact> {
        let pos = self.position(index)?;
        Ok(&self.contacts[pos])
    }

    fn phone_taken(&self, phone: &str, except: Option<usize>) -> bool {
        self.contacts
            .iter()
            .enumerate()
            .any(|(pos, c)| Some(pos) != except && c.personal_phone == phone)
    }

    /// Append a contact. Returns its 1-based index.
    pub fn add(&mut self, contact: Contact) -> BookResult<usize> {
        if contact.personal_phone.is_empty() {
            return Err(BookError::EmptyPersonalPhone);
        }
        if self.phone_taken(&contact.personal_phone, None) {
            return Err(BookError::DuplicatePersonalPhone(contact.personal_phone));
        }
        self.contacts.push(contact);
        Ok(self.contacts.len())
    }

    /// Set one field of the contact at a 1-based index.
    pub fn update(&mut self, index: usize, field: ContactField, value: String) -> BookResult<()> {
        let pos = self.position(index)?;

        if field == ContactField::PersonalPhone {
            let phone = field.normalize_query(&value);
            if phone.is_empty() {
                return Err(BookError::EmptyPersonalPhone);
            }
            if self.phone_taken(&phone, Some(pos)) {
                return Err(BookError::DuplicatePersonalPhone(phone));
            }
        }

        field.set(&mut self.contacts[pos], value);
        debug!(index, field = %field, "Contact updated");
        Ok(())
    }
}
