use crate::book::Phonebook;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::number_contacts;
use crate::store::DataStore;

pub fn run<S: DataStore>(book: &Phonebook<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_contacts(number_contacts(book.contacts())))
}
