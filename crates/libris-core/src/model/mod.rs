pub mod book;
pub mod stats;

pub use book::{Book, BookUpdate, SearchField};
pub use stats::ReadingStats;
