use crate::model::Contact;
use std::fmt;

/// A contact paired with its 1-based display position.
#[derive(Debug, Clone)]
pub struct DisplayContact {
    pub index: usize,
    pub contact: Contact,
}

impl fmt::Display for DisplayContact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}", self.index, self.contact)
    }
}

/// Assigns 1-based display numbers to contacts, preserving their order.
pub fn number_contacts(contacts: &[Contact]) -> Vec<DisplayContact> {
    contacts
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, contact)| DisplayContact {
            index: i + 1,
            contact,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_is_one_based_and_ordered() {
        let contacts = vec![
            Contact::new("A", "", "", "", "", ""),
            Contact::new("B", "", "", "", "", ""),
        ];
        let numbered = number_contacts(&contacts);
        assert_eq!(numbered[0].index, 1);
        assert_eq!(numbered[1].index, 2);
        assert_eq!(numbered[1].contact.last_name, "B");
    }

    #[test]
    fn display_prefixes_the_number() {
        let numbered = number_contacts(&[Contact::new("Ivanov", "Ivan", "", "Acme", "1", "2")]);
        assert_eq!(numbered[0].to_string(), "1) Ivanov, Ivan, , Acme, 1, 2");
    }
}
