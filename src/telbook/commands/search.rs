use crate::book::Phonebook;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::number_contacts;
use crate::store::DataStore;

/// Find contacts with a field equal to `query` (trimmed, case-normalized).
/// Results are numbered 1-based within the result set, not by book position.
pub fn run<S: DataStore>(book: &Phonebook<S>, query: &str) -> Result<CmdResult> {
    let matches = book.search(query);
    Ok(CmdResult::default().with_listed_contacts(number_contacts(&matches)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Contact;
    use crate::store::memory::InMemoryStore;

    fn sample_book() -> Phonebook<InMemoryStore> {
        let mut book = Phonebook::open(InMemoryStore::new()).unwrap();
        book.add(Contact::new(
            "Ivanov", "Ivan", "Ivanovich", "Acme", "111", "222",
        ))
        .unwrap();
        book.add(Contact::new(
            "Petrov", "Petr", "Petrovich", "Acme", "333", "444",
        ))
        .unwrap();
        book
    }

    #[test]
    fn numbers_results_within_the_result_set() {
        let book = sample_book();
        let result = run(&book, "acme").unwrap();

        assert_eq!(result.listed_contacts.len(), 2);
        assert_eq!(result.listed_contacts[0].index, 1);
        assert_eq!(result.listed_contacts[1].index, 2);
    }

    #[test]
    fn second_record_alone_still_gets_number_one() {
        let book = sample_book();
        let result = run(&book, "petrov").unwrap();

        assert_eq!(result.listed_contacts.len(), 1);
        assert_eq!(result.listed_contacts[0].index, 1);
        assert_eq!(result.listed_contacts[0].contact.last_name, "Petrov");
    }

    #[test]
    fn no_match_yields_an_empty_listing() {
        let book = sample_book();
        assert!(run(&book, "nobody").unwrap().listed_contacts.is_empty());
    }
}
