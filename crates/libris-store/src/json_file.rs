//! JSON flat-file repository
//!
//! The file holds a single JSON array of book objects in collection order,
//! indented with four spaces. Saving is a straight overwrite of the whole
//! file; there is no temp file and no rename.

use std::fs;
use std::path::{Path, PathBuf};

use libris_core::errors::Result;
use libris_core::{Book, Repository};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::errors::{io_error, malformed, read_error, serialization};

/// File name used when no path is configured
pub const DEFAULT_STORE_FILE: &str = "books_data.json";

const INDENT: &[u8] = b"    ";

/// Repository backed by one JSON file
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encode `books` exactly as they are written to disk
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails.
    pub fn encode(books: &[Book]) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        books.serialize(&mut ser).map_err(serialization)?;
        Ok(buf)
    }
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

impl Repository for JsonFileRepository {
    fn load(&self) -> Result<Vec<Book>> {
        let bytes = fs::read(&self.path).map_err(|e| read_error(&self.path, e))?;
        let books: Vec<Book> =
            serde_json::from_slice(&bytes).map_err(|e| malformed(&self.path, e))?;

        tracing::debug!(
            store = %self.path.display(),
            count = books.len() as u64,
            "loaded backing store"
        );
        Ok(books)
    }

    fn save(&self, books: &[Book]) -> Result<()> {
        let content = Self::encode(books)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_error("create_store_dir", parent, e))?;
        }
        fs::write(&self.path, &content).map_err(|e| io_error("write_store", &self.path, e))?;

        tracing::debug!(
            store = %self.path.display(),
            count = books.len() as u64,
            bytes = content.len() as u64,
            "wrote backing store"
        );
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
