pub mod collection;
pub mod library;

pub use collection::Collection;
pub use library::Library;
