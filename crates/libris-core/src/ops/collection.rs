use crate::model::{Book, BookUpdate, ReadingStats};

/// In-memory ordered book collection
///
/// Insertion order is preserved and titles are not unique. Title lookups
/// for remove and update act on the first case-insensitive match.
/// Not thread-safe - designed for a single interactive owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    books: Vec<Book>,
}

impl Collection {
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// All books in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Append a book at the end and return a reference to it
    pub fn push(&mut self, book: Book) -> &Book {
        self.books.push(book);
        &self.books[self.books.len() - 1]
    }

    /// Index of the first book whose title matches case-insensitively
    pub fn position(&self, title: &str) -> Option<usize> {
        self.books.iter().position(|b| b.title_matches(title))
    }

    /// Remove the most recently appended book
    pub fn pop(&mut self) -> Option<Book> {
        self.books.pop()
    }

    /// Remove the book at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; callers obtain it from `position`.
    pub fn remove_at(&mut self, index: usize) -> Book {
        self.books.remove(index)
    }

    /// Apply `update` to the book at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; callers obtain it from `position`.
    pub fn update_at(&mut self, index: usize, update: BookUpdate) -> &Book {
        let book = &mut self.books[index];
        book.apply(update);
        book
    }

    /// Books whose title or author contains `query`, case-insensitively
    ///
    /// The iterator is lazy; an empty query yields every book.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Book> + 'a {
        let needle = query.to_lowercase();
        self.books.iter().filter(move |b| b.mentions(&needle))
    }

    pub fn stats(&self) -> ReadingStats {
        ReadingStats::compute(&self.books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Collection {
        Collection::from_books(vec![
            Book::new("Dune", "Frank Herbert", "1965", "Sci-Fi", false),
            Book::new("Moby Dick", "Herman Melville", "1851", "Adventure", true),
            Book::new("Dune", "Someone Else", "2001", "Parody", false),
        ])
    }

    #[test]
    fn test_push_appends_at_end() {
        let mut collection = sample();
        let added = collection
            .push(Book::new("Emma", "Jane Austen", "1815", "Romance", true))
            .clone();

        assert_eq!(collection.len(), 4);
        assert_eq!(collection.books()[3], added);
    }

    #[test]
    fn test_position_finds_first_duplicate() {
        let collection = sample();
        assert_eq!(collection.position("DUNE"), Some(0));
        assert_eq!(collection.position("Emma"), None);
    }

    #[test]
    fn test_remove_only_first_duplicate() {
        let mut collection = sample();

        let index = collection.position("dune").unwrap();
        let removed = collection.remove_at(index);

        assert_eq!(removed.author, "Frank Herbert");
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.books()[1].author, "Someone Else");
    }

    #[test]
    fn test_position_is_exact_not_substring() {
        let collection = sample();
        assert_eq!(collection.position("Moby"), None);
        assert_eq!(collection.position("moby dick"), Some(1));
    }

    #[test]
    fn test_pop_returns_last() {
        let mut collection = sample();
        assert_eq!(collection.pop().unwrap().author, "Someone Else");
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_update_first_match() {
        let mut collection = sample();

        let index = collection.position("dune").unwrap();
        let updated = collection
            .update_at(index, BookUpdate::read_only(true).with_genre("Classic"))
            .clone();

        assert_eq!(updated.title, "Dune");
        assert_eq!(updated.genre, "Classic");
        assert!(updated.read);
        assert_eq!(collection.books()[2].genre, "Parody");
    }

    #[test]
    fn test_search_matches_title_or_author() {
        let collection = sample();

        let titles: Vec<&str> = collection.search("MEL").map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Moby Dick"]);

        assert_eq!(collection.search("dune").count(), 2);
        assert_eq!(collection.search("").count(), 3);
        assert_eq!(collection.search("tolkien").count(), 0);
    }

    #[test]
    fn test_stats_over_collection() {
        let stats = sample().stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
    }
}
