use clap::Parser;
use directories::ProjectDirs;
use std::io;
use std::path::PathBuf;

use telbook::book::Phonebook;
use telbook::config::TelbookConfig;
use telbook::error::Result;
use telbook::shell::Shell;
use telbook::store::fs::FileStore;

mod args;
use args::Cli;

const DEFAULT_BOOK_FILE: &str = "phonebook.txt";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = FileStore::new(resolve_book_path(&cli));
    let mut book = Phonebook::open(store)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(&mut book, stdin.lock(), stdout.lock());
    shell.run()
}

/// The backing file: CLI argument, then the config file, then the default
/// name in the current directory.
fn resolve_book_path(cli: &Cli) -> PathBuf {
    if let Some(file) = &cli.file {
        return file.clone();
    }

    let config = ProjectDirs::from("com", "telbook", "telbook")
        .map(|dirs| TelbookConfig::load(dirs.config_dir()).unwrap_or_default())
        .unwrap_or_default();

    config
        .book_file
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BOOK_FILE))
}
