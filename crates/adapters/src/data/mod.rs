use std::fs;
use std::path::PathBuf;

use bookrack_application::{ApplicationError, EntryProvider};
use bookrack_domain::BookEntry;

const BOOK_LIST_JSON: &str = include_str!("book_list.json");

/// The bundled `BookList` document, compiled into the binary. Document
/// order is the order pages see.
#[derive(Debug, Default)]
pub struct BundledBookList;

impl EntryProvider for BundledBookList {
    fn book_list(&self) -> Result<Vec<BookEntry>, ApplicationError> {
        parse_book_list(BOOK_LIST_JSON)
    }
}

/// A catalog document read from disk, with the same shape as the
/// bundled one.
#[derive(Debug, Clone)]
pub struct FileBookList {
    path: PathBuf,
}

impl FileBookList {
    pub fn new(path: String) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }
}

impl EntryProvider for FileBookList {
    fn book_list(&self) -> Result<Vec<BookEntry>, ApplicationError> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|error| ApplicationError::Io(error.to_string()))?;
        parse_book_list(&raw)
    }
}

fn parse_book_list(raw: &str) -> Result<Vec<BookEntry>, ApplicationError> {
    serde_json::from_str(raw).map_err(|error| ApplicationError::Data(error.to_string()))
}
