//! Library store: an in-memory collection bound to a repository
//!
//! ## Persistence contract
//!
//! Every successful mutation (`add`, `remove`, `update`) is followed by a
//! full overwrite of the repository before the call returns. If that write
//! fails, the in-memory change is rolled back and the error is returned, so
//! memory and storage never diverge.
//!
//! A title that matches nothing is not an error: `remove` and `update`
//! return `Ok(None)` and leave both memory and storage untouched.

use std::time::Instant;

use crate::errors::{LibraryError, Result};
use crate::model::{Book, BookUpdate, ReadingStats, SearchField};
use crate::ops::Collection;
use crate::repository::Repository;
use crate::schema::{OUTCOME_APPLIED, OUTCOME_NOT_FOUND};
use crate::{log_op_end, log_op_error, log_op_start};

/// Personal library backed by a repository
#[derive(Debug)]
pub struct Library<R: Repository> {
    repo: R,
    collection: Collection,
}

impl<R: Repository> Library<R> {
    /// Load the collection from `repo`
    ///
    /// Never fails: a missing store starts an empty collection, and so does
    /// a store that cannot be read or parsed (logged at warn level).
    pub fn open(repo: R) -> Self {
        log_op_start!("library_open", store = repo.describe().as_str());
        let start = Instant::now();

        let collection = match repo.load() {
            Ok(books) => Collection::from_books(books),
            Err(LibraryError::StoreNotFound { path }) => {
                tracing::debug!(
                    op = "library_open",
                    store = path.as_str(),
                    "backing store missing, starting empty"
                );
                Collection::new()
            }
            Err(err) => {
                tracing::warn!(
                    op = "library_open",
                    store = repo.describe().as_str(),
                    error = %err,
                    "backing store unreadable, starting empty"
                );
                Collection::new()
            }
        };

        log_op_end!(
            "library_open",
            duration_ms = start.elapsed().as_millis() as u64,
            count = collection.len() as u64
        );

        Self { repo, collection }
    }

    /// Append a book and persist
    ///
    /// Duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Returns the repository error if the collection cannot be saved; the
    /// book is not kept in that case.
    pub fn add(&mut self, book: Book) -> Result<&Book> {
        log_op_start!("add_book", title = book.title.as_str());
        let start = Instant::now();

        self.collection.push(book);
        if let Err(err) = self.save() {
            self.collection.pop();
            log_op_error!(
                "add_book",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            return Err(err);
        }

        log_op_end!(
            "add_book",
            duration_ms = start.elapsed().as_millis() as u64,
            outcome = OUTCOME_APPLIED,
            count = self.collection.len() as u64
        );

        let books = self.collection.books();
        Ok(&books[books.len() - 1])
    }

    /// Remove the first book whose title matches case-insensitively
    ///
    /// Returns the removed book, or `None` when no title matches.
    ///
    /// # Errors
    ///
    /// Returns the repository error if the collection cannot be saved; the
    /// book is restored in that case.
    pub fn remove(&mut self, title: &str) -> Result<Option<Book>> {
        log_op_start!("remove_book", title = title);
        let start = Instant::now();

        let Some(index) = self.collection.position(title) else {
            log_op_end!(
                "remove_book",
                duration_ms = start.elapsed().as_millis() as u64,
                outcome = OUTCOME_NOT_FOUND
            );
            return Ok(None);
        };

        let previous = self.collection.clone();
        let removed = self.collection.remove_at(index);
        if let Err(err) = self.save() {
            self.collection = previous;
            log_op_error!(
                "remove_book",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            return Err(err);
        }

        log_op_end!(
            "remove_book",
            duration_ms = start.elapsed().as_millis() as u64,
            outcome = OUTCOME_APPLIED,
            count = self.collection.len() as u64
        );

        Ok(Some(removed))
    }

    /// Search titles and authors for `query`, case-insensitively
    ///
    /// `by` is what the caller asked to search by. It is recorded but does
    /// not narrow the match: both fields are always searched.
    pub fn find<'a>(
        &'a self,
        query: &str,
        by: SearchField,
    ) -> impl Iterator<Item = &'a Book> + 'a {
        log_op_start!("find_books", query = query, by = by.as_str());
        let start = Instant::now();

        let matches = self.collection.search(query);
        log_op_end!(
            "find_books",
            duration_ms = start.elapsed().as_millis() as u64,
            count = self.collection.search(query).count() as u64
        );

        matches
    }

    /// Update the first book whose title matches case-insensitively
    ///
    /// Empty or absent fields in `update` keep their value; the read status
    /// is always replaced. Returns the updated book, or `None` when no title
    /// matches.
    ///
    /// # Errors
    ///
    /// Returns the repository error if the collection cannot be saved; the
    /// previous values are restored in that case.
    pub fn update(&mut self, title: &str, update: BookUpdate) -> Result<Option<&Book>> {
        log_op_start!("update_book", title = title);
        let start = Instant::now();

        let Some(index) = self.collection.position(title) else {
            log_op_end!(
                "update_book",
                duration_ms = start.elapsed().as_millis() as u64,
                outcome = OUTCOME_NOT_FOUND
            );
            return Ok(None);
        };

        let previous = self.collection.clone();
        self.collection.update_at(index, update);
        if let Err(err) = self.save() {
            self.collection = previous;
            log_op_error!(
                "update_book",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            return Err(err);
        }

        log_op_end!(
            "update_book",
            duration_ms = start.elapsed().as_millis() as u64,
            outcome = OUTCOME_APPLIED
        );

        Ok(self.collection.books().get(index))
    }

    /// All books in insertion order
    pub fn list(&self) -> &[Book] {
        log_op_start!("list_books");
        let start = Instant::now();

        let books = self.collection.books();
        log_op_end!(
            "list_books",
            duration_ms = start.elapsed().as_millis() as u64,
            count = books.len() as u64
        );

        books
    }

    pub fn stats(&self) -> ReadingStats {
        log_op_start!("reading_stats");
        let start = Instant::now();

        let stats = self.collection.stats();
        log_op_end!(
            "reading_stats",
            duration_ms = start.elapsed().as_millis() as u64,
            count = stats.total as u64
        );

        stats
    }

    /// Overwrite the repository with the current collection
    ///
    /// # Errors
    ///
    /// Returns the repository error on write failure.
    pub fn persist(&self) -> Result<()> {
        log_op_start!("persist", store = self.repo.describe().as_str());
        let start = Instant::now();

        self.save().map_err(|e| {
            log_op_error!(
                "persist",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "persist",
            duration_ms = start.elapsed().as_millis() as u64,
            count = self.collection.len() as u64
        );

        Ok(())
    }

    /// Persist one final time and release the repository
    ///
    /// # Errors
    ///
    /// Returns the repository error on write failure.
    pub fn close(self) -> Result<R> {
        self.persist()?;
        Ok(self.repo)
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn save(&self) -> Result<()> {
        self.repo.save(self.collection.books())
    }
}
