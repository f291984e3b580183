pub mod book_render;

pub use book_render::{render_book_line, render_collection, render_search_results, render_stats};
