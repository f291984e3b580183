//! One-shot book commands
//!
//! Usage: libris [--file PATH] <add|remove|find|update|list|stats> ...

use clap::{Args, ValueEnum};
use libris_core::render::{render_collection, render_search_results, render_stats};
use libris_core::{Book, BookUpdate, Library, Repository, SearchField};

use super::{added_message, not_in_collection_message, removed_message};

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub author: String,

    /// Publication year, stored as entered
    #[arg(long)]
    pub year: String,

    #[arg(long)]
    pub genre: String,

    /// Mark the book as already read
    #[arg(long)]
    pub read: bool,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Title to remove (case-insensitive, exact)
    pub title: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SearchBy {
    Title,
    Author,
}

impl From<SearchBy> for SearchField {
    fn from(by: SearchBy) -> Self {
        match by {
            SearchBy::Title => SearchField::Title,
            SearchBy::Author => SearchField::Author,
        }
    }
}

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Text to look for in titles and authors
    pub query: String,

    /// Requested search field; titles and authors are both searched
    #[arg(long, value_enum, default_value = "title")]
    pub by: SearchBy,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Title of the book to edit (case-insensitive, exact)
    pub title: String,

    #[arg(long)]
    pub new_title: Option<String>,

    #[arg(long)]
    pub new_author: Option<String>,

    #[arg(long)]
    pub new_year: Option<String>,

    #[arg(long)]
    pub new_genre: Option<String>,

    /// Read status after the update; omitted means unread
    #[arg(long)]
    pub read: bool,
}

impl From<UpdateArgs> for BookUpdate {
    fn from(args: UpdateArgs) -> Self {
        BookUpdate {
            title: args.new_title,
            author: args.new_author,
            publication_year: args.new_year,
            genre: args.new_genre,
            read: args.read,
        }
    }
}

/// Execute add
pub fn add<R: Repository>(
    library: &mut Library<R>,
    args: AddArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let book = Book::new(args.title, args.author, args.year, args.genre, args.read);
    let added = library.add(book)?;
    println!("{}", added_message(&added.title));
    Ok(())
}

/// Execute remove
pub fn remove<R: Repository>(
    library: &mut Library<R>,
    args: RemoveArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    match library.remove(&args.title)? {
        Some(_) => println!("{}", removed_message(&args.title)),
        None => println!("{}", not_in_collection_message(&args.title)),
    }
    Ok(())
}

/// Execute find
pub fn find<R: Repository>(
    library: &Library<R>,
    args: FindArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let matches = library.find(&args.query, args.by.into());
    print!("{}", render_search_results(&args.query, matches));
    Ok(())
}

/// Execute update
pub fn update<R: Repository>(
    library: &mut Library<R>,
    args: UpdateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let title = args.title.clone();
    match library.update(&title, args.into())? {
        Some(book) => println!("Book \"{}\" updated successfully!", book.title),
        None => println!("{}", not_in_collection_message(&title)),
    }
    Ok(())
}

/// Execute list
pub fn list<R: Repository>(library: &Library<R>) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", render_collection(library.list()));
    Ok(())
}

/// Execute stats
pub fn stats<R: Repository>(library: &Library<R>) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", render_stats(&library.stats()));
    Ok(())
}
