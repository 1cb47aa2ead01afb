//! JSON dataset loading.
//!
//! # File Format
//!
//! ```json
//! {
//!   "books_per_page": 36,
//!   "authors": { "a1": "Frank Herbert" },
//!   "genres": { "g1": "Science Fiction" },
//!   "books": [
//!     {
//!       "id": "b1",
//!       "title": "Dune",
//!       "author": "a1",
//!       "genres": ["g1"],
//!       "image": "https://covers.example/dune.jpg",
//!       "description": "...",
//!       "published": "1965-08-01T00:00:00.000Z"
//!     }
//!   ]
//! }
//! ```

use crate::dataset::models::DatasetFile;
use crate::dataset::source::CatalogSource;
use crate::domain::error::{BrowserError, Result};
use crate::domain::Catalog;
use std::path::PathBuf;

const SAMPLE_DATASET: &str = include_str!("../../data/sample-catalog.json");

/// Parses a JSON dataset document into a validated [`Catalog`].
///
/// # Errors
///
/// Returns [`BrowserError::Dataset`] for malformed JSON, bad dates, duplicate
/// book ids, or a `books_per_page` of zero.
pub fn parse_catalog(contents: &str) -> Result<Catalog> {
    let file: DatasetFile = serde_json::from_str(contents)
        .map_err(|e| BrowserError::Dataset(format!("failed to parse JSON: {e}")))?;

    if file.books_per_page == Some(0) {
        return Err(BrowserError::Dataset(
            "books_per_page must be positive".to_string(),
        ));
    }

    let books = file
        .books
        .into_iter()
        .map(|record| record.into_book())
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        books = books.len(),
        authors = file.authors.len(),
        genres = file.genres.len(),
        "parsed dataset"
    );

    Ok(Catalog::new(books, file.authors, file.genres)?.with_books_per_page(file.books_per_page))
}

/// A dataset stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    file_path: PathBuf,
}

impl JsonCatalog {
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl CatalogSource for JsonCatalog {
    fn load(&self) -> Result<Catalog> {
        let _span = tracing::debug_span!("json_catalog_load", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        let catalog = parse_catalog(&contents)?;

        tracing::debug!(count = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    fn describe(&self) -> String {
        self.file_path.display().to_string()
    }
}

/// The sample dataset compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl CatalogSource for EmbeddedCatalog {
    fn load(&self) -> Result<Catalog> {
        let _span = tracing::debug_span!("embedded_catalog_load").entered();
        parse_catalog(SAMPLE_DATASET)
    }

    fn describe(&self) -> String {
        "embedded sample catalog".to_string()
    }
}
