//! Libris CLI
//!
//! Command-line interface for the personal library manager

use clap::{Parser, Subcommand};
use libris_core::logging_facility::{init, Profile};
use libris_core::{ExError, Library, LibraryError};
use libris_core_types::RequestContext;
use libris_store::{JsonFileRepository, DEFAULT_STORE_FILE};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "libris")]
#[command(about = "Libris - personal book collection manager", long_about = None)]
struct Cli {
    /// JSON file holding the collection
    #[arg(long, global = true, default_value = DEFAULT_STORE_FILE)]
    file: PathBuf,

    /// Emit JSON structured logs on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add a new book
    Add(commands::book::AddArgs),
    /// Remove the first book with the given title
    Remove(commands::book::RemoveArgs),
    /// Search titles and authors
    Find(commands::book::FindArgs),
    /// Update the first book with the given title
    Update(commands::book::UpdateArgs),
    /// List all books
    List,
    /// Show reading progress
    Stats,
    /// Interactive menu (default when no command is given)
    Shell,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Add(_) => "add",
            Commands::Remove(_) => "remove",
            Commands::Find(_) => "find",
            Commands::Update(_) => "update",
            Commands::List => "list",
            Commands::Stats => "stats",
            Commands::Shell => "shell",
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    let command = cli.command.unwrap_or(Commands::Shell);
    let ctx = RequestContext::new().with_action(command.name());
    let span = tracing::info_span!(
        "session",
        request_id = %ctx.request_id,
        action = ctx.action.as_deref().unwrap_or_default()
    );
    let _guard = span.enter();

    let mut library = Library::open(JsonFileRepository::new(cli.file));

    let result = match command {
        Commands::Add(args) => commands::book::add(&mut library, args),
        Commands::Remove(args) => commands::book::remove(&mut library, args),
        Commands::Find(args) => commands::book::find(&library, args),
        Commands::Update(args) => commands::book::update(&mut library, args),
        Commands::List => commands::book::list(&library),
        Commands::Stats => commands::book::stats(&library),
        Commands::Shell => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            commands::shell::Shell::new(stdin.lock(), stdout.lock()).run(library)
        }
    };

    if let Err(e) = result {
        match e.downcast::<LibraryError>() {
            Ok(err) => {
                let ex = ExError::from(*err).with_request_id(ctx.request_id);
                eprintln!("Error: {}", ex);
            }
            Err(other) => eprintln!("Error: {}", other),
        }
        std::process::exit(1);
    }
}
