use crate::model::{Book, ReadingStats};

/// Render one numbered book line
///
/// Format: `{index}. {title} by {author} ({year}) - {genre} - {Read|Unread}`
pub fn render_book_line(index: usize, book: &Book) -> String {
    let status = if book.read { "Read" } else { "Unread" };
    format_line(index, book, status)
}

fn format_line(index: usize, book: &Book, status: &str) -> String {
    format!(
        "{}. {} by {} ({}) - {} - {}",
        index, book.title, book.author, book.publication_year, book.genre, status
    )
}

/// Render the full collection listing
///
/// Books are numbered from 1 in collection order. An empty collection gets
/// a dedicated message instead of an empty header.
pub fn render_collection(books: &[Book]) -> String {
    if books.is_empty() {
        return "Your collection is empty.\n".to_string();
    }

    let mut output = String::from("Your Book Collection:\n");
    for (i, book) in books.iter().enumerate() {
        output.push_str(&render_book_line(i + 1, book));
        output.push('\n');
    }
    output
}

/// Render search results; the status word is lowercase here
pub fn render_search_results<'a, I>(query: &str, books: I) -> String
where
    I: IntoIterator<Item = &'a Book>,
{
    let mut output = String::new();
    for (i, book) in books.into_iter().enumerate() {
        let status = if book.read { "read" } else { "unread" };
        output.push_str(&format_line(i + 1, book, status));
        output.push('\n');
    }

    if output.is_empty() {
        output = format!("No books found matching \"{}\".\n", query.to_lowercase());
    }
    output
}

/// Render reading progress with a two-decimal percentage
pub fn render_stats(stats: &ReadingStats) -> String {
    format!(
        "Total books in collection: {}\nReading progress: {:.2}%\n",
        stats.total, stats.completion_rate
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book::new("Dune", "Frank Herbert", "1965", "Sci-Fi", false)
    }

    #[test]
    fn test_render_book_line() {
        assert_eq!(
            render_book_line(1, &dune()),
            "1. Dune by Frank Herbert (1965) - Sci-Fi - Unread"
        );
    }

    #[test]
    fn test_render_empty_collection() {
        assert_eq!(render_collection(&[]), "Your collection is empty.\n");
    }

    #[test]
    fn test_render_collection_numbers_from_one() {
        let emma = Book::new("Emma", "Jane Austen", "1815", "Romance", true);
        let output = render_collection(&[dune(), emma]);

        assert_eq!(
            output,
            "Your Book Collection:\n\
             1. Dune by Frank Herbert (1965) - Sci-Fi - Unread\n\
             2. Emma by Jane Austen (1815) - Romance - Read\n"
        );
    }

    #[test]
    fn test_render_search_results() {
        let books = [dune()];
        assert_eq!(
            render_search_results("dune", books.iter()),
            "1. Dune by Frank Herbert (1965) - Sci-Fi - unread\n"
        );
        assert_eq!(
            render_search_results("Tolkien", std::iter::empty()),
            "No books found matching \"tolkien\".\n"
        );
    }

    #[test]
    fn test_render_stats_two_decimals() {
        let stats = ReadingStats {
            total: 3,
            completed: 1,
            completion_rate: 100.0 / 3.0,
        };
        assert_eq!(
            render_stats(&stats),
            "Total books in collection: 3\nReading progress: 33.33%\n"
        );
    }
}
