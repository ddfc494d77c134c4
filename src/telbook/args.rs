use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "telbook",
    version,
    about = "A tiny interactive phone book for the terminal"
)]
pub struct Cli {
    /// Backing file for the phone book. Defaults to the configured file,
    /// or phonebook.txt in the current directory.
    pub file: Option<PathBuf>,
}
