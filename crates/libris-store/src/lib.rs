//! Libris Store - flat-file persistence for the personal library
//!
//! Provides `JsonFileRepository`, a `Repository` that keeps the whole
//! collection as one pretty-printed JSON array and overwrites it on every
//! save.

pub mod errors;
pub mod json_file;

// Re-export key types
pub use json_file::{JsonFileRepository, DEFAULT_STORE_FILE};
