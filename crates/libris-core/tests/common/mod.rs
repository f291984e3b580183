use libris_core::{Book, Library, MemoryRepository};

/// Library over a fresh in-memory repository
#[allow(dead_code)]
pub fn empty_library() -> Library<MemoryRepository> {
    Library::open(MemoryRepository::new())
}

/// Library preloaded with the given books
#[allow(dead_code)]
pub fn library_with(books: Vec<Book>) -> Library<MemoryRepository> {
    Library::open(MemoryRepository::with_books(books))
}

#[allow(dead_code)]
pub fn dune() -> Book {
    Book::new("Dune", "Herbert", "1965", "Sci-Fi", false)
}

#[allow(dead_code)]
pub fn moby_dick() -> Book {
    Book::new("Moby Dick", "Herman Melville", "1851", "Adventure", true)
}
