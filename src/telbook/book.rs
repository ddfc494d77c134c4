//! The in-memory phone book, kept in sync with its backing store.

use crate::error::{Result, TelbookError};
use crate::model::Contact;
use crate::store::DataStore;

/// The ordered collection of contacts, backed by a [`DataStore`].
///
/// The book is loaded once at construction and the full sequence is written
/// back after every mutation, so the backing store is up to date after each
/// operation and remains the single source of truth across restarts.
/// Contacts are addressed by position (0-based here, 1-based in the shell);
/// there is no delete operation.
pub struct Phonebook<S: DataStore> {
    store: S,
    contacts: Vec<Contact>,
}

impl<S: DataStore> Phonebook<S> {
    /// Open the book, loading all contacts from the backing store. A store
    /// that was never written to yields an empty book.
    pub fn open(store: S) -> Result<Self> {
        let contacts = store.load()?;
        Ok(Self { store, contacts })
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Consume the book, handing back the backing store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Append a contact and persist the full book.
    pub fn add(&mut self, contact: Contact) -> Result<()> {
        self.contacts.push(contact);
        self.store.save(&self.contacts)
    }

    /// Replace the contact at `index` (0-based) and persist the full book.
    ///
    /// An out-of-range index leaves the book untouched and returns
    /// [`TelbookError::RecordOutOfRange`], which callers report to the user
    /// and recover from.
    pub fn edit(&mut self, index: usize, contact: Contact) -> Result<()> {
        if index >= self.contacts.len() {
            return Err(TelbookError::RecordOutOfRange {
                index,
                len: self.contacts.len(),
            });
        }
        self.contacts[index] = contact;
        self.store.save(&self.contacts)
    }

    /// Contacts with at least one field equal to `query` once the field is
    /// trimmed and lower-cased. Equality, not substring containment; callers
    /// pass the query already lower-cased. Matches keep book order.
    pub fn search(&self, query: &str) -> Vec<Contact> {
        self.contacts
            .iter()
            .filter(|contact| {
                contact
                    .all_fields()
                    .iter()
                    .any(|field| field.trim().to_lowercase() == query)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{fixtures, InMemoryStore};

    #[test]
    fn open_loads_the_backing_store() {
        let book = Phonebook::open(fixtures::store_with(2)).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.contacts()[0], fixtures::contact(1));
    }

    #[test]
    fn add_appends_and_persists() {
        let mut book = Phonebook::open(fixtures::store_with(1)).unwrap();
        book.add(fixtures::contact(2)).unwrap();
        assert_eq!(book.len(), 2);

        let reloaded = Phonebook::open(book.into_store()).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.contacts()[1], fixtures::contact(2));
    }

    #[test]
    fn edit_replaces_only_the_target_record() {
        let mut book = Phonebook::open(fixtures::store_with(3)).unwrap();
        book.edit(1, fixtures::contact(9)).unwrap();

        assert_eq!(book.contacts()[0], fixtures::contact(1));
        assert_eq!(book.contacts()[1], fixtures::contact(9));
        assert_eq!(book.contacts()[2], fixtures::contact(3));

        let reloaded = Phonebook::open(book.into_store()).unwrap();
        assert_eq!(reloaded.contacts()[1], fixtures::contact(9));
    }

    #[test]
    fn edit_out_of_range_leaves_the_book_unchanged() {
        let mut book = Phonebook::open(fixtures::store_with(3)).unwrap();
        let before: Vec<Contact> = book.contacts().to_vec();

        let err = book.edit(5, fixtures::contact(9)).unwrap_err();
        assert!(matches!(
            err,
            TelbookError::RecordOutOfRange { index: 5, len: 3 }
        ));
        assert_eq!(book.contacts(), before.as_slice());
    }

    #[test]
    fn edit_on_an_empty_book_is_out_of_range() {
        let mut book = Phonebook::open(InMemoryStore::new()).unwrap();
        assert!(book.edit(0, fixtures::contact(1)).is_err());
    }

    #[test]
    fn search_matches_whole_fields_only() {
        let mut book = Phonebook::open(InMemoryStore::new()).unwrap();
        book.add(Contact::new(
            "Ivanov", "Ivan", "Ivanovich", "Acme", "111", "222",
        ))
        .unwrap();
        book.add(Contact::new(
            "Petrov", "Petr", "Petrovich", "Globex", "333", "444",
        ))
        .unwrap();

        let hits = book.search("acme");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].last_name, "Ivanov");

        // Substrings do not match.
        assert!(book.search("acm").is_empty());
        assert!(book.search("ivan").len() == 1); // first name, not a prefix hit
    }

    #[test]
    fn search_normalizes_field_case_and_whitespace() {
        let mut book = Phonebook::open(InMemoryStore::new()).unwrap();
        book.add(Contact::new(" IVANOV ", "Ivan", "", "", "", ""))
            .unwrap();

        assert_eq!(book.search("ivanov").len(), 1);
    }

    #[test]
    fn search_keeps_book_order_and_returns_all_matches() {
        let mut book = Phonebook::open(InMemoryStore::new()).unwrap();
        book.add(Contact::new("A", "Shared", "", "", "1", ""))
            .unwrap();
        book.add(Contact::new("B", "Other", "", "", "2", "")).unwrap();
        book.add(Contact::new("C", "Shared", "", "", "3", ""))
            .unwrap();

        let hits = book.search("shared");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].last_name, "A");
        assert_eq!(hits[1].last_name, "C");
    }

    #[test]
    fn search_on_an_empty_book_finds_nothing() {
        let book = Phonebook::open(InMemoryStore::new()).unwrap();
        assert!(book.search("anything").is_empty());
    }
}
