//! Libris Core - in-memory personal library kernel
//!
//! This crate provides:
//! - The `Book` record model and its update patch
//! - An ordered in-memory `Collection` with case-insensitive lookup
//! - The `Repository` persistence seam and an in-memory implementation
//! - `Library`, which persists the whole collection after every mutation
//! - Text rendering for console drivers
//! - The error and structured logging facilities shared by all crates

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod render;
pub mod repository;

// Re-export commonly used types
pub use libris_core_types::schema;
pub use errors::{ExError, ExErrorKind, LibraryError, Result};
pub use model::{Book, BookUpdate, ReadingStats, SearchField};
pub use ops::{Collection, Library};
pub use repository::{MemoryRepository, Repository};
