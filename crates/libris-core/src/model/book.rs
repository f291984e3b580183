use serde::{Deserialize, Serialize};

/// Book - one record in the personal library
///
/// Field names double as the JSON keys of the backing store. The
/// publication year is kept as opaque text; it is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title, the natural lookup key (not unique)
    pub title: String,

    pub author: String,

    /// Publication year exactly as entered
    pub publication_year: String,

    pub genre: String,

    /// Whether the book has been read
    pub read: bool,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: impl Into<String>,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publication_year: publication_year.into(),
            genre: genre.into(),
            read,
        }
    }

    /// Case-insensitive exact title comparison used by remove and update
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Case-insensitive substring match against title or author
    ///
    /// `needle` must already be lowercased.
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }

    /// Apply an update patch in place
    ///
    /// Empty or absent text fields keep the current value; `read` is always
    /// overwritten.
    pub fn apply(&mut self, update: BookUpdate) {
        let BookUpdate {
            title,
            author,
            publication_year,
            genre,
            read,
        } = update;

        replace_unless_empty(&mut self.title, title);
        replace_unless_empty(&mut self.author, author);
        replace_unless_empty(&mut self.publication_year, publication_year);
        replace_unless_empty(&mut self.genre, genre);
        self.read = read;
    }
}

fn replace_unless_empty(slot: &mut String, value: Option<String>) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        *slot = v;
    }
}

/// Patch applied by `Library::update`
///
/// The read status is mandatory: every update re-specifies it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publication_year: Option<String>,
    pub genre: Option<String>,
    pub read: bool,
}

impl BookUpdate {
    /// Update that only re-specifies the read status
    pub fn read_only(read: bool) -> Self {
        Self {
            read,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_publication_year(mut self, year: impl Into<String>) -> Self {
        self.publication_year = Some(year.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }
}

/// Field the caller asks to search by
///
/// Matching always considers both title and author; the selector is only
/// recorded in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Title,
    Author,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
        }
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book::new("Dune", "Frank Herbert", "1965", "Sci-Fi", false)
    }

    #[test]
    fn test_title_matches_ignores_case() {
        let book = Book::new("Moby Dick", "Herman Melville", "1851", "Adventure", true);
        assert!(book.title_matches("moby dick"));
        assert!(book.title_matches("MOBY DICK"));
        assert!(!book.title_matches("moby"));
    }

    #[test]
    fn test_mentions_checks_title_and_author() {
        let book = dune();
        assert!(book.mentions("dun"));
        assert!(book.mentions("herbert"));
        assert!(!book.mentions("tolkien"));
    }

    #[test]
    fn test_apply_keeps_empty_fields() {
        let mut book = dune();
        book.apply(BookUpdate::read_only(true).with_title("").with_genre("Classic"));

        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.genre, "Classic");
        assert!(book.read);
    }

    #[test]
    fn test_apply_always_sets_read() {
        let mut book = dune();
        book.read = true;
        book.apply(BookUpdate::default());
        assert!(!book.read);
    }

    #[test]
    fn test_serialized_keys() {
        let json = serde_json::to_value(dune()).unwrap();
        assert_eq!(json["title"], "Dune");
        assert_eq!(json["publication_year"], "1965");
        assert_eq!(json["read"], false);
    }

    #[test]
    fn test_search_field_display() {
        assert_eq!(SearchField::Title.to_string(), "title");
        assert_eq!(SearchField::Author.to_string(), "author");
    }
}
