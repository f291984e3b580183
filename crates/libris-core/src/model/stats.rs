use crate::model::Book;

/// Reading progress summary over a collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingStats {
    pub total: usize,
    pub completed: usize,
    /// Percentage of books marked read; 0 for an empty collection
    pub completion_rate: f64,
}

impl ReadingStats {
    pub fn compute(books: &[Book]) -> Self {
        let total = books.len();
        let completed = books.iter().filter(|b| b.read).count();
        let completion_rate = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };

        Self {
            total,
            completed,
            completion_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_has_zero_rate() {
        let stats = ReadingStats::compute(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.completion_rate, 0.0);
    }

    #[test]
    fn test_partial_completion() {
        let books = vec![
            Book::new("A", "x", "2000", "g", true),
            Book::new("B", "x", "2000", "g", false),
            Book::new("C", "x", "2000", "g", false),
            Book::new("D", "x", "2000", "g", true),
        ];
        let stats = ReadingStats::compute(&books);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.completion_rate, 50.0);
    }
}
