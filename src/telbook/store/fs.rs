use super::DataStore;
use crate::error::{Result, TelbookError};
use crate::model::Contact;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed storage. The store owns its path for the lifetime of the
/// process.
///
/// Fields are trimmed on both load and save, so a book survives a
/// save/load round trip unchanged. There is no escaping: a field containing
/// a comma corrupts its line, which the field-count check reports at the
/// next load. Saves rewrite the whole file in place, without a
/// temp-file-and-rename step.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_line(&self, line_no: usize, line: &str) -> Result<Contact> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != Contact::FIELD_COUNT {
            return Err(TelbookError::MalformedLine {
                path: self.path.clone(),
                line: line_no,
                found: fields.len(),
            });
        }
        Ok(Contact::new(
            fields[0], fields[1], fields[2], fields[3], fields[4], fields[5],
        ))
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Contact>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut contacts = Vec::new();
        for (i, line) in content.lines().enumerate() {
            contacts.push(self.parse_line(i + 1, line)?);
        }
        Ok(contacts)
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        self.ensure_parent_dir()?;

        let mut out = String::new();
        for contact in contacts {
            let fields: Vec<&str> = contact.all_fields().iter().map(|f| f.trim()).collect();
            out.push_str(&fields.join(", "));
            out.push('\n');
        }
        fs::write(&self.path, out)?;
        Ok(())
    }
}
