//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where the phone book is persisted so
//! everything above it can be tested without a filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage — one flat text file, one contact
//!   per line, six fields joined by `", "`
//! - [`memory::InMemoryStore`]: in-memory storage for tests, no persistence
//!
//! ## Granularity
//!
//! Operations cover the whole book: `load` reads every record at startup and
//! `save` rewrites every record after each mutation. There is no partial or
//! streaming access, and the backing file is treated as exclusively owned by
//! the single running process — no locking, no multi-process safety.

use crate::error::Result;
use crate::model::Contact;

pub mod fs;
pub mod memory;

/// Abstract interface for phone book persistence.
pub trait DataStore {
    /// Load every contact from the backing store. A store that has never
    /// been written to yields an empty book, not an error.
    fn load(&self) -> Result<Vec<Contact>>;

    /// Replace the stored book with `contacts`, overwriting whatever was
    /// there before.
    fn save(&mut self, contacts: &[Contact]) -> Result<()>;
}
