//! Interactive menu
//!
//! Seven actions, one per library operation plus exit. Generic over the
//! input and output streams so sessions can be scripted in tests.

use std::io::{self, BufRead, Write};

use libris_core::render::{render_collection, render_search_results, render_stats};
use libris_core::{Book, BookUpdate, Library, Repository, SearchField};

use super::{added_message, not_in_collection_message, removed_message};

type ShellResult<T> = Result<T, Box<dyn std::error::Error>>;

enum Flow {
    Continue,
    Exit,
}

/// Interactive request/response loop over a library
pub struct Shell<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Shell<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Run until the exit action or end of input, then persist once more
    ///
    /// # Errors
    ///
    /// Returns persistence errors and terminal I/O errors.
    pub fn run<R: Repository>(mut self, mut library: Library<R>) -> ShellResult<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.ask("Please choose an option (1-7): ")? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.add_book(&mut library)?,
                "2" => self.remove_book(&mut library)?,
                "3" => self.find_books(&library)?,
                "4" => self.update_book(&mut library)?,
                "5" => self.list_books(&library)?,
                "6" => self.show_progress(&library)?,
                "7" => Flow::Exit,
                _ => {
                    writeln!(
                        self.output,
                        "Invalid choice. Please choose a number between 1 and 7."
                    )?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        library.close()?;
        writeln!(
            self.output,
            "Thank you for using the book collection manager. Goodbye!"
        )?;
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "📚 Welcome to your book collection manager!")?;
        writeln!(self.output, "1. Add a new book")?;
        writeln!(self.output, "2. Remove a book")?;
        writeln!(self.output, "3. Search for books")?;
        writeln!(self.output, "4. Update book details")?;
        writeln!(self.output, "5. View all books")?;
        writeln!(self.output, "6. View reading progress")?;
        writeln!(self.output, "7. Exit")
    }

    /// Prompt and read one line without its terminator; `None` on end of input
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    fn ask_yes_no(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        Ok(self
            .ask(prompt)?
            .map(|answer| answer.trim().to_lowercase() == "yes"))
    }

    fn add_book<R: Repository>(&mut self, library: &mut Library<R>) -> ShellResult<Flow> {
        let Some(title) = self.ask("Enter Book Title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.ask("Enter Book Author: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(year) = self.ask("Enter Publication Year: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(genre) = self.ask("Enter Book Genre: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(read) = self.ask_yes_no("Have you read this book? (yes/no): ")? else {
            return Ok(Flow::Exit);
        };

        library.add(Book::new(title.clone(), author, year, genre, read))?;
        writeln!(self.output, "{}", added_message(&title))?;
        Ok(Flow::Continue)
    }

    fn remove_book<R: Repository>(&mut self, library: &mut Library<R>) -> ShellResult<Flow> {
        let Some(title) = self.ask("Enter the title of the book you want to delete: ")? else {
            return Ok(Flow::Exit);
        };

        match library.remove(&title)? {
            Some(_) => writeln!(self.output, "{}", removed_message(&title))?,
            None => writeln!(self.output, "{}", not_in_collection_message(&title))?,
        }
        Ok(Flow::Continue)
    }

    fn find_books<R: Repository>(&mut self, library: &Library<R>) -> ShellResult<Flow> {
        let Some(choice) = self.ask(
            "Search by:\n1. Title\n2. Author\nEnter the number of your choice: ",
        )?
        else {
            return Ok(Flow::Exit);
        };
        let by = if choice.trim() == "2" {
            SearchField::Author
        } else {
            SearchField::Title
        };

        let Some(query) =
            self.ask("Enter the title or author of the book you want to find: ")?
        else {
            return Ok(Flow::Exit);
        };

        let rendered = render_search_results(&query, library.find(&query, by));
        write!(self.output, "{}", rendered)?;
        Ok(Flow::Continue)
    }

    fn update_book<R: Repository>(&mut self, library: &mut Library<R>) -> ShellResult<Flow> {
        let Some(title) = self.ask("Enter the title of the book you want to edit: ")? else {
            return Ok(Flow::Exit);
        };

        let Some(index) = library.collection().position(&title) else {
            writeln!(self.output, "Book not found!\n")?;
            return Ok(Flow::Continue);
        };
        let current = library.collection().books()[index].clone();

        writeln!(self.output, "Leave blank to keep existing value.")?;
        let Some(new_title) = self.ask(&format!("New title ({}): ", current.title))? else {
            return Ok(Flow::Exit);
        };
        let Some(new_author) = self.ask(&format!("New author ({}): ", current.author))? else {
            return Ok(Flow::Exit);
        };
        let Some(new_year) = self.ask(&format!("New year ({}): ", current.publication_year))?
        else {
            return Ok(Flow::Exit);
        };
        let Some(new_genre) = self.ask(&format!("New genre ({}): ", current.genre))? else {
            return Ok(Flow::Exit);
        };
        let Some(read) = self.ask_yes_no("Have you read this book? (yes/no): ")? else {
            return Ok(Flow::Exit);
        };

        let update = BookUpdate::read_only(read)
            .with_title(new_title)
            .with_author(new_author)
            .with_publication_year(new_year)
            .with_genre(new_genre);

        match library.update(&title, update)? {
            Some(_) => writeln!(self.output, "Book updated successfully!\n")?,
            None => writeln!(self.output, "Book not found!\n")?,
        }
        Ok(Flow::Continue)
    }

    fn list_books<R: Repository>(&mut self, library: &Library<R>) -> ShellResult<Flow> {
        writeln!(self.output, "{}", render_collection(library.list()))?;
        Ok(Flow::Continue)
    }

    fn show_progress<R: Repository>(&mut self, library: &Library<R>) -> ShellResult<Flow> {
        writeln!(self.output, "{}", render_stats(&library.stats()))?;
        Ok(Flow::Continue)
    }
}
