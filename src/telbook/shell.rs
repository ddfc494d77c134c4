//! The interactive menu loop.
//!
//! This is the only layer that renders or prompts, and even here the
//! terminal is not assumed: the shell runs over any `BufRead`/`Write` pair,
//! so tests script whole sessions against in-memory buffers. One menu action
//! runs to completion per iteration; the loop ends on the quit choice, or
//! when the input runs out (EOF), which never mutates the book.

use std::io::{BufRead, Write};

use colored::Colorize;

use crate::book::Phonebook;
use crate::commands::{self, CmdMessage, MessageLevel};
use crate::error::Result;
use crate::index::DisplayContact;
use crate::model::Contact;
use crate::store::DataStore;

const MENU: &str = "\n1. List records\n2. Add record\n3. Edit record\n4. Search records\n5. Quit";
const NO_RECORDS: &str = "No records in the phone book.";
const NOT_FOUND: &str = "No records found.";
const INVALID_ACTION: &str = "Invalid action.";

const FIELD_PROMPTS: [&str; Contact::FIELD_COUNT] = [
    "Last name: ",
    "First name: ",
    "Middle name: ",
    "Organization: ",
    "Work phone: ",
    "Personal phone: ",
];

pub struct Shell<'a, S: DataStore, R: BufRead, W: Write> {
    book: &'a mut Phonebook<S>,
    input: R,
    out: W,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Shell<'a, S, R, W> {
    pub fn new(book: &'a mut Phonebook<S>, input: R, out: W) -> Self {
        Self { book, input, out }
    }

    /// Run the menu loop until the user quits or the input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.out, "{}", MENU)?;
            let choice = match self.read_input("Choose an action: ")? {
                Some(line) => line,
                None => break,
            };

            match choice.as_str() {
                "1" => self.list()?,
                "2" => self.add()?,
                "3" => self.edit()?,
                "4" => self.search()?,
                "5" => break,
                _ => writeln!(self.out, "{}", INVALID_ACTION)?,
            }
        }
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        let result = commands::list::run(self.book)?;
        self.print_contacts(&result.listed_contacts)
    }

    fn add(&mut self) -> Result<()> {
        let contact = match self.enter_contact()? {
            Some(contact) => contact,
            None => return Ok(()),
        };
        let result = commands::add::run(self.book, contact)?;
        self.print_messages(&result.messages)
    }

    fn edit(&mut self) -> Result<()> {
        let listed = commands::list::run(self.book)?.listed_contacts;
        self.print_contacts(&listed)?;

        let line = match self.read_input("Record number to edit: ")? {
            Some(line) => line,
            None => return Ok(()),
        };
        // Fields are only prompted for once the record number checks out.
        let number = match line.trim().parse::<usize>() {
            Ok(n) if n >= 1 && n <= self.book.len() => n,
            _ => {
                writeln!(self.out, "{}", commands::edit::INVALID_RECORD.red())?;
                return Ok(());
            }
        };

        let contact = match self.enter_contact()? {
            Some(contact) => contact,
            None => return Ok(()),
        };
        let result = commands::edit::run(self.book, number - 1, contact)?;
        self.print_messages(&result.messages)
    }

    fn search(&mut self) -> Result<()> {
        let query = match self.read_input("Search for: ")? {
            Some(line) => line.to_lowercase(),
            None => return Ok(()),
        };
        let result = commands::search::run(self.book, &query)?;

        if result.listed_contacts.is_empty() {
            writeln!(self.out, "{}", NOT_FOUND)?;
        } else {
            writeln!(self.out, "Search results:")?;
            for dc in &result.listed_contacts {
                writeln!(self.out, "{}", dc)?;
            }
        }
        Ok(())
    }

    /// Prompt for the six contact fields in file order. Empty input is a
    /// valid value; `None` means the input ended mid-entry.
    fn enter_contact(&mut self) -> Result<Option<Contact>> {
        let [last, first, middle, org, work, personal] = FIELD_PROMPTS;
        let Some(last_name) = self.read_input(last)? else {
            return Ok(None);
        };
        let Some(first_name) = self.read_input(first)? else {
            return Ok(None);
        };
        let Some(middle_name) = self.read_input(middle)? else {
            return Ok(None);
        };
        let Some(organization) = self.read_input(org)? else {
            return Ok(None);
        };
        let Some(work_phone) = self.read_input(work)? else {
            return Ok(None);
        };
        let Some(personal_phone) = self.read_input(personal)? else {
            return Ok(None);
        };
        Ok(Some(Contact::new(
            last_name,
            first_name,
            middle_name,
            organization,
            work_phone,
            personal_phone,
        )))
    }

    /// Write a prompt and read one line. `None` on end of input. Only the
    /// line terminator is stripped; interior and surrounding spaces are part
    /// of the value.
    fn read_input(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn print_contacts(&mut self, contacts: &[DisplayContact]) -> Result<()> {
        if contacts.is_empty() {
            writeln!(self.out, "{}", NO_RECORDS)?;
            return Ok(());
        }
        for dc in contacts {
            writeln!(self.out, "{}", dc)?;
        }
        Ok(())
    }

    fn print_messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        for message in messages {
            let rendered = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            writeln!(self.out, "{}", rendered)?;
        }
        Ok(())
    }
}
