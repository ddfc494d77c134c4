//! # Telbook Architecture
//!
//! Telbook is a **UI-agnostic phone book library** with a small interactive
//! terminal client on top. The library owns all of the behavior; the binary
//! only wires stdin/stdout to it.
//!
//! ## Layers
//!
//! ```text
//! shell     — the menu loop; the only layer that renders or prompts.
//!             Generic over BufRead/Write so tests can script whole sessions.
//! commands  — one module per operation (add, edit, list, search).
//!             Pure logic: takes Rust types, returns Result<CmdResult>,
//!             never touches stdout or the process.
//! book      — Phonebook<S: DataStore>, the ordered in-memory collection.
//!             Loaded once at startup, written back in full after every
//!             mutation, so the backing store is always up to date.
//! store     — the DataStore trait with FileStore (production) and
//!             InMemoryStore (tests).
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `commands` inward, code never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal. Even the shell takes
//! its handles as parameters. This keeps every layer testable against
//! in-memory buffers and the memory store.
//!
//! ## Module Overview
//!
//! - [`book`]: The phone book itself — ordered contacts plus persistence
//! - [`commands`]: Business logic for each menu operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Contact` record
//! - [`index`]: 1-based display numbering
//! - [`shell`]: The interactive menu loop
//! - [`config`]: Optional config file pinning a default book location
//! - [`error`]: Error types

pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod shell;
pub mod store;
