use crate::book::Phonebook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TelbookError};
use crate::model::Contact;
use crate::store::DataStore;

/// Message for edit targets that don't name an existing record. The shell
/// uses the same wording for record numbers it cannot parse.
pub const INVALID_RECORD: &str = "Invalid record number.";

/// Replace the whole record at `index` (0-based). An out-of-range index is
/// reported as an error-level message, not a failure; the book is untouched.
pub fn run<S: DataStore>(
    book: &mut Phonebook<S>,
    index: usize,
    contact: Contact,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match book.edit(index, contact) {
        Ok(()) => {
            result.add_message(CmdMessage::success(format!(
                "Record {} updated.",
                index + 1
            )));
        }
        Err(TelbookError::RecordOutOfRange { .. }) => {
            result.add_message(CmdMessage::error(INVALID_RECORD));
        }
        Err(e) => return Err(e),
    }
    Ok(result)
}
