use crate::book::Phonebook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;
use crate::store::DataStore;

pub fn run<S: DataStore>(book: &mut Phonebook<S>, contact: Contact) -> Result<CmdResult> {
    let name = format!("{} {}", contact.last_name, contact.first_name)
        .trim()
        .to_string();
    book.add(contact)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Record added: {}", name)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::{fixtures, InMemoryStore};

    #[test]
    fn grows_the_book_by_one() {
        let mut book = Phonebook::open(fixtures::store_with(2)).unwrap();
        let result = run(&mut book, fixtures::contact(3)).unwrap();

        assert_eq!(book.len(), 3);
        assert_eq!(book.contacts()[2], fixtures::contact(3));
        assert!(matches!(result.messages[0].level, MessageLevel::Success));
    }

    #[test]
    fn added_record_survives_a_reload() {
        let mut book = Phonebook::open(InMemoryStore::new()).unwrap();
        run(&mut book, fixtures::contact(1)).unwrap();

        let reloaded = Phonebook::open(book.into_store()).unwrap();
        assert_eq!(reloaded.contacts(), &[fixtures::contact(1)]);
    }

    #[test]
    fn reports_the_name_in_the_message() {
        let mut book = Phonebook::open(InMemoryStore::new()).unwrap();
        let contact = Contact::new("Ivanov", "Ivan", "Ivanovich", "Acme", "111", "222");
        let result = run(&mut book, contact).unwrap();
        assert_eq!(result.messages[0].content, "Record added: Ivanov Ivan");
    }
}
