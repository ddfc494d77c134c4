use super::DataStore;
use crate::error::Result;
use crate::model::Contact;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: Vec<Contact>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        self.contacts = contacts.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A distinguishable contact for tests, all fields derived from `n`.
    pub fn contact(n: usize) -> Contact {
        Contact::new(
            format!("Lastname{n}"),
            format!("Firstname{n}"),
            format!("Middlename{n}"),
            format!("Org{n}"),
            format!("100{n}"),
            format!("200{n}"),
        )
    }

    /// A store pre-seeded with `count` fixture contacts.
    pub fn store_with(count: usize) -> InMemoryStore {
        let contacts: Vec<Contact> = (1..=count).map(contact).collect();
        let mut store = InMemoryStore::new();
        store.save(&contacts).unwrap();
        store
    }
}
