//! Persistence seam for the library
//!
//! A `Repository` holds the whole collection as one unit: `load` returns the
//! full ordered list and `save` overwrites it entirely.

use std::cell::{Cell, RefCell};

use crate::errors::{LibraryError, Result};
use crate::model::Book;

/// Durable backing store for a book collection
pub trait Repository {
    /// Read the full collection
    ///
    /// # Errors
    ///
    /// `StoreNotFound` when nothing has been saved yet, `StoreMalformed` when
    /// the stored content is not a book list, `Io` for other read failures.
    fn load(&self) -> Result<Vec<Book>>;

    /// Overwrite the stored collection with `books`
    ///
    /// # Errors
    ///
    /// `Io` or `Serialization` when the collection cannot be written.
    fn save(&self, books: &[Book]) -> Result<()>;

    /// Human-readable location, used in log fields
    fn describe(&self) -> String;
}

/// In-process repository
///
/// Starts "missing" until the first save (or until constructed with
/// `with_books`), mirroring a file that does not exist yet.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    books: RefCell<Option<Vec<Book>>>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `books`
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RefCell::new(Some(books)),
            ..Self::default()
        }
    }

    /// Snapshot of what was last saved
    pub fn stored(&self) -> Option<Vec<Book>> {
        self.books.borrow().clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Make every subsequent save fail with an `Io` error
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }
}

impl Repository for MemoryRepository {
    fn load(&self) -> Result<Vec<Book>> {
        self.books
            .borrow()
            .clone()
            .ok_or_else(|| LibraryError::StoreNotFound {
                path: self.describe(),
            })
    }

    fn save(&self, books: &[Book]) -> Result<()> {
        if self.fail_saves.get() {
            return Err(LibraryError::Io {
                op: "save".to_string(),
                path: self.describe(),
                message: "simulated write failure".to_string(),
            });
        }

        *self.books.borrow_mut() = Some(books.to_vec());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

impl<R: Repository + ?Sized> Repository for &R {
    fn load(&self) -> Result<Vec<Book>> {
        (**self).load()
    }

    fn save(&self, books: &[Book]) -> Result<()> {
        (**self).save(books)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
